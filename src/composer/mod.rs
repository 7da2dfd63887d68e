// ==========================================
// 发票与报表自动生成系统 - 组装层
// ==========================================
// 职责: 跨表关联与汇总,产出单据渲染请求
// 红线: 只读干净数据,不回写源表单
// ==========================================

pub mod document;
pub mod error;
pub mod invoice;
pub mod report;

// 重导出核心类型
pub use document::{
    compose_invoice, compose_report, invoice_output_id, report_output_id, sanitize_name,
    DocumentRequest,
};
pub use error::{ComposeError, ComposeResult};
pub use invoice::{build_invoice_contexts, InvoiceBatch, InvoiceContext, OrderItem, SkippedOrder};
pub use report::{build_report_context, OrderSummary, ReportContext, TopClient};
