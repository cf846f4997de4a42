//! 黑白棋核心库
//!
//! 包含:
//! - 颜色、坐标、棋盘等核心数据结构
//! - 落子验证、翻转和终局判定
//! - 棋盘布局字符串与坐标记法
//! - 对局历史快照

mod board;
mod constants;
mod error;
mod history;
mod layout;
mod moves;
mod notation;
mod piece;

pub use board::Board;
pub use constants::*;
pub use error::{OthelloError, Result};
pub use history::{GameHistory, GameState};
pub use layout::{Layout, INITIAL_LAYOUT};
pub use notation::Notation;
pub use piece::{Color, Coordinate};
