// ==========================================
// 发票与报表自动生成系统 - 生成管线层
// ==========================================
// 职责: 校验、组装、渲染的一次性批量编排
// ==========================================

pub mod document_generator_impl;
pub mod document_generator_trait;
pub mod error;
pub mod result;

// 重导出核心类型
pub use document_generator_impl::DocumentGeneratorImpl;
pub use document_generator_trait::DocumentGenerator;
pub use error::{GenerateError, GenerateResult};
pub use result::{BatchOutcome, InvoiceGenerationResult, ReportGenerationResult};
