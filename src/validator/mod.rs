// ==========================================
// 发票与报表自动生成系统 - 校验层
// ==========================================
// 职责: 表单级规则校验,输出裁定（错误/警告/干净数据）
// 红线: 不做跨表校验,跨表关联属组装层
// ==========================================

pub mod engine;
pub mod rules;
pub mod schema;

// 重导出核心类型
pub use engine::{SheetValidator, EMAIL_PATTERN};
pub use schema::SchemaRegistry;
