//! 错误类型定义

use thiserror::Error;

/// AI 配置错误
#[derive(Error, Debug)]
pub enum AiError {
    /// 未知的预设角色
    #[error("Unknown avatar: {0}")]
    UnknownAvatar(String),

    /// AI 配置不合法
    #[error("Invalid AI profile: {0}")]
    InvalidProfile(String),

    /// JSON 解析错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
