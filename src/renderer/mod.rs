// ==========================================
// 发票与报表自动生成系统 - 渲染边界
// ==========================================
// 职责: 渲染上下文 → 持久化单据（HTML 产物）
// 红线: 核心管线不直接做磁盘 I/O,统一经此边界
// ==========================================

pub mod error;
pub mod tera_renderer;

// 重导出核心类型
pub use error::{RenderError, RenderResult};
pub use tera_renderer::{DocumentRenderer, TeraDocumentRenderer};
