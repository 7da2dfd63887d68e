// ==========================================
// 发票与报表自动生成系统 - 发票上下文组装
// ==========================================
// 职责: 订单 × 客户 × 产品 关联 → 每订单一份发票上下文
// 失败语义: 单订单关联失败记录后跳过,批次继续
// ==========================================

use crate::composer::error::{ComposeError, ComposeResult};
use crate::domain::records::{ClientRecord, OrderRecord, ProductRecord};
use crate::domain::sheet::{Row, SheetVerdicts};
use serde::Serialize;
use std::collections::HashMap;

// ==========================================
// OrderItem - 发票行项
// ==========================================
// 字段名是模板契约的一部分,保持稳定
#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    pub product_name: String, // 产品名称
    pub unit_price: f64,      // 单价
    pub quantity: f64,        // 数量（订单级,行项共用）
    pub total_price: f64,     // 行项金额 = 数量 × 单价
}

// ==========================================
// InvoiceContext - 发票渲染上下文
// ==========================================
// 每个可关联客户的订单一份,新分配,不引用源表单
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceContext {
    pub invoice_id: String,          // 发票标识（取订单号）
    pub invoice_date: String,        // 开票日期（取下单日期）
    pub due_date: String,            // 到期日期（取交付日期）
    pub client_name: String,         // 客户名称
    pub contact_person: String,      // 联系人
    pub client_email: String,        // 客户邮箱
    pub client_address: String,      // 客户地址
    pub order_items: Vec<OrderItem>, // 行项列表
    pub total_amount_due: f64,       // 应付总额（取订单总额）
}

// ==========================================
// SkippedOrder - 跳过记录
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct SkippedOrder {
    pub order_id: String, // 受影响订单
    pub reason: String,   // 跳过原因
}

/// 发票组装结果: 成功上下文 + 跳过清单
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceBatch {
    pub contexts: Vec<InvoiceContext>,
    pub skipped: Vec<SkippedOrder>,
}

/// 读取前置表单的干净数据,缺失即整体中止
pub(crate) fn clean_rows_or_abort<'a>(
    verdicts: &'a SheetVerdicts,
    sheet_name: &str,
) -> ComposeResult<&'a [Row]> {
    verdicts
        .get(sheet_name)
        .and_then(|verdict| verdict.clean_rows())
        .ok_or_else(|| ComposeError::MissingDependencyData {
            sheet: sheet_name.to_string(),
        })
}

/// 构建全部发票上下文
///
/// # 前置条件
/// - Orders 与 Clients 必须有干净数据,否则 MissingDependencyData
/// - Products 缺失不触发整体中止: 所有订单将因产品无法关联而逐单跳过
///
/// # 每订单流程
/// 1. 按 Client ID 关联客户,失败 → 跳过该订单
/// 2. 拆分 Product ID 列表,逐一精确关联产品,失败 → 跳过该订单
/// 3. 行项金额 = 订单数量 × 产品单价（数量为订单级字段,行项共用）
pub fn build_invoice_contexts(verdicts: &SheetVerdicts) -> ComposeResult<InvoiceBatch> {
    let order_rows = clean_rows_or_abort(verdicts, "Orders")?;
    let client_rows = clean_rows_or_abort(verdicts, "Clients")?;

    // 产品表缺失按空索引处理,关联失败在订单粒度暴露
    let product_rows = verdicts
        .get("Products")
        .and_then(|verdict| verdict.clean_rows())
        .unwrap_or(&[]);

    let clients: HashMap<String, ClientRecord> = client_rows
        .iter()
        .map(ClientRecord::from_row)
        .map(|record| (record.client_id.clone(), record))
        .collect();

    let products: HashMap<String, ProductRecord> = product_rows
        .iter()
        .map(ProductRecord::from_row)
        .map(|record| (record.product_id.clone(), record))
        .collect();

    let mut contexts = Vec::new();
    let mut skipped = Vec::new();

    for order_row in order_rows {
        let order = OrderRecord::from_row(order_row);

        match build_single_invoice(&order, &clients, &products) {
            Ok(context) => contexts.push(context),
            Err(reason) => {
                tracing::warn!("订单 {} 发票生成跳过: {}", order.order_id, reason);
                skipped.push(SkippedOrder {
                    order_id: order.order_id.clone(),
                    reason,
                });
            }
        }
    }

    tracing::info!(
        "发票上下文组装完成: {} 成功, {} 跳过",
        contexts.len(),
        skipped.len()
    );

    Ok(InvoiceBatch { contexts, skipped })
}

/// 组装单订单发票上下文（局部失败以原因文本返回）
fn build_single_invoice(
    order: &OrderRecord,
    clients: &HashMap<String, ClientRecord>,
    products: &HashMap<String, ProductRecord>,
) -> Result<InvoiceContext, String> {
    let client = clients
        .get(&order.client_id)
        .ok_or_else(|| format!("客户无法关联: {}", order.client_id))?;

    let mut order_items = Vec::new();
    for product_id in &order.product_ids {
        let product = products
            .get(product_id)
            .ok_or_else(|| format!("产品无法关联: {}", product_id))?;

        order_items.push(OrderItem {
            product_name: product.product_name.clone(),
            unit_price: product.unit_price,
            quantity: order.quantity,
            total_price: order.quantity * product.unit_price,
        });
    }

    Ok(InvoiceContext {
        invoice_id: order.order_id.clone(),
        invoice_date: order
            .order_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        due_date: order.delivery_date.clone(),
        client_name: client.client_name.clone(),
        contact_person: client.contact_person.clone(),
        client_email: client.email.clone(),
        client_address: client.address.clone(),
        order_items,
        total_amount_due: order.total_amount,
    })
}
