// ==========================================
// 发票与报表自动生成系统 - 渲染边界错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 渲染边界错误类型
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("模板不存在: {template}")]
    TemplateNotFound { template: String },

    #[error("模板目录载入失败: {0}")]
    TemplateDirError(String),

    #[error("渲染失败 ({template}): {message}")]
    RenderFailed { template: String, message: String },

    #[error("单据写出失败: {0}")]
    PersistError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::PersistError(err.to_string())
    }
}

/// Result 类型别名
pub type RenderResult<T> = Result<T, RenderError>;
