// ==========================================
// 发票与报表自动生成系统 - 汇总报表组装
// ==========================================
// 职责: 订单/发票/客户三表汇总 → 单份报表上下文
// 失败语义: 任一前置表单缺失即整体中止,无部分报表
// ==========================================

use crate::composer::error::ComposeResult;
use crate::composer::invoice::clean_rows_or_abort;
use crate::domain::records::{ClientRecord, InvoiceRecord, OrderRecord};
use crate::domain::sheet::SheetVerdicts;
use crate::domain::types::PaidStatus;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

// ==========================================
// TopClient - 客户采购排名条目
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct TopClient {
    pub name: String,        // 客户名称（无法关联时为空）
    pub total_purchase: f64, // 采购总额
}

// ==========================================
// OrderSummary - 订单摘要行
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub client_name: String, // 客户名称（左连接,无法关联时为空）
    pub order_id: String,    // 订单号
    pub order_date: String,  // 下单日期
    pub amount: f64,         // 订单金额
    pub status: String,      // 订单状态
}

// ==========================================
// ReportContext - 报表渲染上下文
// ==========================================
// 每次报表运行单例,字段名是模板契约的一部分
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub report_period: String,        // 报告期标签
    pub total_sales: f64,             // 销售总额
    pub outstanding_invoices: f64,    // 未付发票合计
    pub top_clients: Vec<TopClient>,  // 客户采购排名（至多 top_limit 条）
    pub orders: Vec<OrderSummary>,    // 订单摘要（全量,左连接客户）
}

/// 构建报表上下文
///
/// # 前置条件
/// - Orders、Invoices、Clients 三表均须有干净数据,否则 MissingDependencyData
///
/// # 汇总口径
/// - 销售总额 = 全部订单总额之和
/// - 未付合计 = Paid Status 精确等于 "Unpaid" 的发票应付金额之和
/// - 客户采购 = 按 Client ID 分组求和,分组顺序按订单表首次出现
/// - 排名 = 按采购总额稳定降序取前 top_limit,并列保持输入顺序
/// - 订单摘要 = 每笔订单左连接客户,无法关联的客户名留空（不中止）
pub fn build_report_context(
    verdicts: &SheetVerdicts,
    report_period: &str,
    top_limit: usize,
) -> ComposeResult<ReportContext> {
    let order_rows = clean_rows_or_abort(verdicts, "Orders")?;
    let invoice_rows = clean_rows_or_abort(verdicts, "Invoices")?;
    let client_rows = clean_rows_or_abort(verdicts, "Clients")?;

    let orders: Vec<OrderRecord> = order_rows.iter().map(OrderRecord::from_row).collect();
    let invoices: Vec<InvoiceRecord> = invoice_rows.iter().map(InvoiceRecord::from_row).collect();
    let clients: HashMap<String, ClientRecord> = client_rows
        .iter()
        .map(ClientRecord::from_row)
        .map(|record| (record.client_id.clone(), record))
        .collect();

    // 销售总额
    let total_sales: f64 = orders.iter().map(|order| order.total_amount).sum();

    // 未付发票合计（精确匹配 Unpaid）
    let outstanding_invoices: f64 = invoices
        .iter()
        .filter(|invoice| invoice.paid_status == PaidStatus::Unpaid)
        .map(|invoice| invoice.amount_due)
        .sum();

    // 客户采购分组（保持首次出现顺序,保证并列时的确定性）
    let mut purchase_index: HashMap<String, usize> = HashMap::new();
    let mut purchases: Vec<(String, f64)> = Vec::new();
    for order in &orders {
        match purchase_index.get(&order.client_id) {
            Some(&idx) => purchases[idx].1 += order.total_amount,
            None => {
                purchase_index.insert(order.client_id.clone(), purchases.len());
                purchases.push((order.client_id.clone(), order.total_amount));
            }
        }
    }

    // 稳定降序排序 → 前 top_limit 名,左连接客户名称
    let mut ranked = purchases;
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    let top_clients: Vec<TopClient> = ranked
        .into_iter()
        .take(top_limit)
        .map(|(client_id, total_purchase)| TopClient {
            name: clients
                .get(&client_id)
                .map(|client| client.client_name.clone())
                .unwrap_or_default(),
            total_purchase,
        })
        .collect();

    // 订单摘要（全量左连接,无法关联不中止）
    let order_summaries: Vec<OrderSummary> = orders
        .iter()
        .map(|order| OrderSummary {
            client_name: clients
                .get(&order.client_id)
                .map(|client| client.client_name.clone())
                .unwrap_or_default(),
            order_id: order.order_id.clone(),
            order_date: order
                .order_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            amount: order.total_amount,
            status: order.status.clone(),
        })
        .collect();

    tracing::info!(
        "报表上下文组装完成: 销售总额 {:.2}, 未付合计 {:.2}, {} 笔订单",
        total_sales,
        outstanding_invoices,
        order_summaries.len()
    );

    Ok(ReportContext {
        report_period: report_period.to_string(),
        total_sales,
        outstanding_invoices,
        top_clients,
        orders: order_summaries,
    })
}
