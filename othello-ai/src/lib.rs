//! 黑白棋 AI 引擎
//!
//! 包含:
//! - 五种启发式及其加权组合评估器
//! - 单层贪心、Alpha-Beta 搜索与随机三种选点器
//! - 可序列化的 AI 配置与预设角色

mod error;
mod evaluate;
mod greedy;
mod heuristic;
mod player;
mod random;
mod roster;
mod search;

pub use error::AiError;
pub use evaluate::Evaluator;
pub use greedy::GreedyAi;
pub use heuristic::{buffered_corner, piece_table_value, stable_discs, Heuristic, HeuristicKind};
pub use player::Decider;
pub use random::RandomAi;
pub use roster::{AiProfile, PolicyConfig, Roster, MAX_HEURISTIC_WEIGHT, MAX_SEARCH_DEPTH};
pub use search::{SearchAi, SearchConfig};
