//! 错误类型定义

use thiserror::Error;

/// 黑白棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OthelloError {
    /// 棋盘边长不合法（必须为偶数且在支持范围内）
    #[error("Invalid board size: {size} (must be even, between {min} and {max})")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    /// 坐标超出棋盘
    #[error("Invalid coordinate: ({row}, {col}) on a {size}x{size} board")]
    InvalidCoordinate { row: u8, col: u8, size: usize },

    /// 空位没有对手
    #[error("Empty has no opponent")]
    EmptyColor,

    /// 无效的棋盘布局字符串
    #[error("Invalid layout: {reason}")]
    InvalidLayout { reason: String },

    /// 无效的坐标记法
    #[error("Invalid notation: {input:?}")]
    InvalidNotation { input: String },
}

/// 核心操作结果类型
pub type Result<T> = std::result::Result<T, OthelloError>;
