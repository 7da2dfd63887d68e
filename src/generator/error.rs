// ==========================================
// 发票与报表自动生成系统 - 生成管线错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::composer::ComposeError;
use crate::loader::LoadError;
use crate::renderer::RenderError;
use thiserror::Error;

/// 生成管线错误类型
///
/// 仅整体性失败（前置数据缺失/渲染边界故障）以 Err 传播,
/// 单订单失败在结果结构里以跳过条目呈现
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result 类型别名
pub type GenerateResult<T> = Result<T, GenerateError>;
