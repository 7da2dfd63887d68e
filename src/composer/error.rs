// ==========================================
// 发票与报表自动生成系统 - 组装层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 组装层错误类型
///
/// 前置数据缺失是整体中止,单订单关联失败不在此列
/// （按跳过条目记录,批次继续）
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("前置表单数据不可用: {sheet}")]
    MissingDependencyData { sheet: String },

    #[error("渲染上下文序列化失败: {0}")]
    ContextSerialization(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ComposeResult<T> = Result<T, ComposeError>;
