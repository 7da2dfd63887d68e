// ==========================================
// 发票与报表自动生成系统 - 业务记录模型
// ==========================================
// 职责: 干净数据行 → 类型化业务记录的映射
// 用途: 组装层按记录做关联与汇总,不回写源表单
// ==========================================

use crate::domain::sheet::Row;
use crate::domain::types::PaidStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 标准列名
// ==========================================
// 与源表单表头精确一致,校验与映射共用
pub mod columns {
    // Clients
    pub const CLIENT_ID: &str = "Client ID";
    pub const CLIENT_NAME: &str = "Client Name";
    pub const CONTACT_PERSON: &str = "Contact Person";
    pub const EMAIL: &str = "Email";
    pub const ADDRESS: &str = "Address";

    // Products
    pub const PRODUCT_ID: &str = "Product ID";
    pub const PRODUCT_NAME: &str = "Product Name";
    pub const UNIT_PRICE: &str = "Unit Price ($)";
    pub const STOCK_QUANTITY: &str = "Stock Quantity";
    pub const DESCRIPTION: &str = "Description";

    // Orders
    pub const ORDER_ID: &str = "Order ID";
    pub const ORDER_DATE: &str = "Order Date";
    pub const QUANTITY: &str = "Quantity";
    pub const TOTAL_AMOUNT: &str = "Total Amount ($)";
    pub const DELIVERY_DATE: &str = "Delivery Date";
    pub const STATUS: &str = "Status";

    // Invoices
    pub const INVOICE_ID: &str = "Invoice ID";
    pub const INVOICE_DATE: &str = "Invoice Date";
    pub const DUE_DATE: &str = "Due Date";
    pub const AMOUNT_DUE: &str = "Amount Due ($)";
    pub const PAID_STATUS: &str = "Paid Status";
}

// ==========================================
// 字段提取辅助
// ==========================================

/// 提取文本字段（空值 → 空串）
fn get_text(row: &Row, column: &str) -> String {
    row.get(column)
        .map(|cell| cell.to_display_string())
        .unwrap_or_default()
}

/// 提取数值字段（缺失/不可解析 → 0.0）
fn get_number(row: &Row, column: &str) -> f64 {
    row.get(column)
        .and_then(|cell| cell.as_number())
        .unwrap_or(0.0)
}

/// 提取日期字段
fn get_date(row: &Row, column: &str) -> Option<NaiveDate> {
    row.get(column).and_then(|cell| cell.coerce_date())
}

// ==========================================
// ClientRecord - 客户记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub client_id: String,      // 客户唯一标识
    pub client_name: String,    // 客户名称
    pub contact_person: String, // 联系人
    pub email: String,          // 邮箱
    pub address: String,        // 地址
}

impl ClientRecord {
    pub fn from_row(row: &Row) -> Self {
        Self {
            client_id: get_text(row, columns::CLIENT_ID),
            client_name: get_text(row, columns::CLIENT_NAME),
            contact_person: get_text(row, columns::CONTACT_PERSON),
            email: get_text(row, columns::EMAIL),
            address: get_text(row, columns::ADDRESS),
        }
    }
}

// ==========================================
// ProductRecord - 产品记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,   // 产品唯一标识
    pub product_name: String, // 产品名称
    pub unit_price: f64,      // 单价（非负）
    pub stock_quantity: f64,  // 库存数量
    pub description: String,  // 描述
}

impl ProductRecord {
    pub fn from_row(row: &Row) -> Self {
        Self {
            product_id: get_text(row, columns::PRODUCT_ID),
            product_name: get_text(row, columns::PRODUCT_NAME),
            unit_price: get_number(row, columns::UNIT_PRICE),
            stock_quantity: get_number(row, columns::STOCK_QUANTITY),
            description: get_text(row, columns::DESCRIPTION),
        }
    }
}

// ==========================================
// OrderRecord - 订单记录
// ==========================================
// Product ID 源字段为逗号分隔的多产品列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,             // 订单唯一标识
    pub client_id: String,            // 客户外键
    pub order_date: Option<NaiveDate>, // 下单日期（校验已保证可转换）
    pub product_ids: Vec<String>,     // 产品外键列表
    pub quantity: f64,                // 数量（订单级,行项共用）
    pub total_amount: f64,            // 订单总额
    pub delivery_date: String,        // 交付日期（原样保留）
    pub status: String,               // 订单状态
}

impl OrderRecord {
    pub fn from_row(row: &Row) -> Self {
        let product_ids = get_text(row, columns::PRODUCT_ID)
            .split(',')
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        Self {
            order_id: get_text(row, columns::ORDER_ID),
            client_id: get_text(row, columns::CLIENT_ID),
            order_date: get_date(row, columns::ORDER_DATE),
            product_ids,
            quantity: get_number(row, columns::QUANTITY),
            total_amount: get_number(row, columns::TOTAL_AMOUNT),
            delivery_date: get_text(row, columns::DELIVERY_DATE),
            status: get_text(row, columns::STATUS),
        }
    }
}

// ==========================================
// InvoiceRecord - 发票记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_id: String,              // 发票唯一标识
    pub order_id: String,                // 订单外键
    pub invoice_date: Option<NaiveDate>, // 开票日期
    pub due_date: Option<NaiveDate>,     // 到期日期
    pub amount_due: f64,                 // 应付金额
    pub paid_status: PaidStatus,         // 付款状态
}

impl InvoiceRecord {
    pub fn from_row(row: &Row) -> Self {
        Self {
            invoice_id: get_text(row, columns::INVOICE_ID),
            order_id: get_text(row, columns::ORDER_ID),
            invoice_date: get_date(row, columns::INVOICE_DATE),
            due_date: get_date(row, columns::DUE_DATE),
            amount_due: get_number(row, columns::AMOUNT_DUE),
            paid_status: PaidStatus::from_value(&get_text(row, columns::PAID_STATUS)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sheet::CellValue;
    use std::collections::HashMap;

    fn client_row() -> Row {
        let mut row = HashMap::new();
        row.insert(
            columns::CLIENT_ID.to_string(),
            CellValue::Text("C001".to_string()),
        );
        row.insert(
            columns::CLIENT_NAME.to_string(),
            CellValue::Text("Acme Corp".to_string()),
        );
        row.insert(
            columns::EMAIL.to_string(),
            CellValue::Text("billing@acme.com".to_string()),
        );
        row
    }

    #[test]
    fn test_client_record_from_row() {
        let record = ClientRecord::from_row(&client_row());
        assert_eq!(record.client_id, "C001");
        assert_eq!(record.client_name, "Acme Corp");
        assert_eq!(record.email, "billing@acme.com");
        // 缺失列 → 空串
        assert_eq!(record.address, "");
    }

    #[test]
    fn test_order_record_splits_product_ids() {
        let mut row: Row = HashMap::new();
        row.insert(
            columns::ORDER_ID.to_string(),
            CellValue::Text("ORD1".to_string()),
        );
        row.insert(
            columns::PRODUCT_ID.to_string(),
            CellValue::Text("P001, P002 ,P003".to_string()),
        );
        row.insert(columns::QUANTITY.to_string(), CellValue::Number(3.0));

        let record = OrderRecord::from_row(&row);
        assert_eq!(record.product_ids, vec!["P001", "P002", "P003"]);
        assert_eq!(record.quantity, 3.0);
    }

    #[test]
    fn test_order_record_numeric_order_id_display() {
        let mut row: Row = HashMap::new();
        row.insert(columns::ORDER_ID.to_string(), CellValue::Number(1001.0));

        let record = OrderRecord::from_row(&row);
        assert_eq!(record.order_id, "1001");
    }

    #[test]
    fn test_invoice_record_paid_status() {
        let mut row: Row = HashMap::new();
        row.insert(
            columns::PAID_STATUS.to_string(),
            CellValue::Text("Unpaid".to_string()),
        );
        row.insert(columns::AMOUNT_DUE.to_string(), CellValue::Number(120.5));

        let record = InvoiceRecord::from_row(&row);
        assert_eq!(record.paid_status, PaidStatus::Unpaid);
        assert_eq!(record.amount_due, 120.5);
    }
}
