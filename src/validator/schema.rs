// ==========================================
// 发票与报表自动生成系统 - 表单模式注册表
// ==========================================
// 职责: 表单名 → 必填字段集,进程启动时固定
// 红线: 模式是静态配置,不从表单内容反推
// ==========================================

use crate::domain::records::columns;
use std::collections::HashMap;

// ==========================================
// SchemaRegistry - 模式注册表
// ==========================================
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    required_fields: HashMap<String, Vec<String>>,
}

impl SchemaRegistry {
    /// 从显式映射构造（表单名 → 必填字段）
    pub fn new(required_fields: HashMap<String, Vec<String>>) -> Self {
        Self { required_fields }
    }

    /// 查询表单的必填字段集
    ///
    /// 未注册的表单名返回空集,对应的必填校验空转
    pub fn required_fields(&self, sheet_name: &str) -> &[String] {
        self.required_fields
            .get(sheet_name)
            .map(|fields| fields.as_slice())
            .unwrap_or(&[])
    }

    /// 已注册的表单名
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.required_fields.keys().map(|name| name.as_str())
    }
}

impl Default for SchemaRegistry {
    /// 默认注册表: 四张业务表单的必填字段全集
    fn default() -> Self {
        let mut required_fields = HashMap::new();

        required_fields.insert(
            "Clients".to_string(),
            vec![
                columns::CLIENT_ID.to_string(),
                columns::CLIENT_NAME.to_string(),
                columns::CONTACT_PERSON.to_string(),
                columns::EMAIL.to_string(),
                columns::ADDRESS.to_string(),
            ],
        );

        required_fields.insert(
            "Products".to_string(),
            vec![
                columns::PRODUCT_ID.to_string(),
                columns::PRODUCT_NAME.to_string(),
                columns::UNIT_PRICE.to_string(),
                columns::STOCK_QUANTITY.to_string(),
                columns::DESCRIPTION.to_string(),
            ],
        );

        required_fields.insert(
            "Orders".to_string(),
            vec![
                columns::ORDER_ID.to_string(),
                columns::CLIENT_ID.to_string(),
                columns::ORDER_DATE.to_string(),
                columns::PRODUCT_ID.to_string(),
                columns::QUANTITY.to_string(),
                columns::TOTAL_AMOUNT.to_string(),
                columns::DELIVERY_DATE.to_string(),
                columns::STATUS.to_string(),
            ],
        );

        required_fields.insert(
            "Invoices".to_string(),
            vec![
                columns::INVOICE_ID.to_string(),
                columns::ORDER_ID.to_string(),
                columns::INVOICE_DATE.to_string(),
                columns::DUE_DATE.to_string(),
                columns::AMOUNT_DUE.to_string(),
                columns::PAID_STATUS.to_string(),
            ],
        );

        Self { required_fields }
    }
}
