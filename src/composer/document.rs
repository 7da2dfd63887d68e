// ==========================================
// 发票与报表自动生成系统 - 单据组装引擎
// ==========================================
// 职责: 上下文 → (输出标识, 序列化渲染上下文) 配对
// 约定: 输出标识不含扩展名,目录与扩展名由渲染边界解析
// ==========================================

use crate::composer::error::{ComposeError, ComposeResult};
use crate::composer::invoice::InvoiceContext;
use crate::composer::report::ReportContext;
use crate::domain::types::DocumentKind;
use serde::Serialize;

// ==========================================
// DocumentRequest - 渲染请求
// ==========================================
// 渲染边界的输入: 单据类别 + 输出标识 + 序列化上下文
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRequest {
    pub kind: DocumentKind,          // 单据类别（决定模板与输出目录）
    pub output_id: String,           // 输出标识（确定性,已消毒）
    pub context: serde_json::Value,  // 序列化渲染上下文
}

/// 名称消毒: 空格与逗号替换为下划线
///
/// 幂等: 对已消毒名称再消毒不产生变化
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == ' ' || c == ',' { '_' } else { c })
        .collect()
}

/// 发票输出标识: invoice_<消毒客户名>_<订单号>
pub fn invoice_output_id(client_name: &str, order_id: &str) -> String {
    format!("invoice_{}_{}", sanitize_name(client_name), order_id)
}

/// 报表输出标识: report_<报告期,空格转下划线>
pub fn report_output_id(report_period: &str) -> String {
    format!("report_{}", report_period.replace(' ', "_"))
}

/// 组装单份发票渲染请求
pub fn compose_invoice(context: &InvoiceContext) -> ComposeResult<DocumentRequest> {
    Ok(DocumentRequest {
        kind: DocumentKind::Invoice,
        output_id: invoice_output_id(&context.client_name, &context.invoice_id),
        context: serde_json::to_value(context)
            .map_err(|e| ComposeError::ContextSerialization(e.to_string()))?,
    })
}

/// 组装报表渲染请求
pub fn compose_report(context: &ReportContext) -> ComposeResult<DocumentRequest> {
    Ok(DocumentRequest {
        kind: DocumentKind::Report,
        output_id: report_output_id(&context.report_period),
        context: serde_json::to_value(context)
            .map_err(|e| ComposeError::ContextSerialization(e.to_string()))?,
    })
}
