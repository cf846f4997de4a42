//! 黑白棋命令行对局
//!
//! 包含:
//! - JSON 对局配置
//! - 单局、悔棋与多轮对战流程
//! - 终端人类玩家

pub mod config;
pub mod game;
pub mod human;

pub use config::{AppConfig, ConfigError, ConfigSource, PlayerConfig};
pub use game::{play_tournament, GameOutcome, Match, PlyResult, TournamentResult, MAX_ILLEGAL_ATTEMPTS};
pub use human::HumanPlayer;
