//! 棋局评估函数

use othello_core::{Board, Color};
use serde::{Deserialize, Serialize};

use crate::heuristic::{Heuristic, HeuristicKind};

/// 组合评估器：按顺序对每个启发式的均衡加权分求和
///
/// 没有启发式时所有局面都评为 0。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluator {
    heuristics: Vec<Heuristic>,
}

impl Evaluator {
    pub fn new(heuristics: Vec<Heuristic>) -> Self {
        Self { heuristics }
    }

    /// 追加一个启发式
    pub fn with(mut self, heuristic: Heuristic) -> Self {
        self.heuristics.push(heuristic);
        self
    }

    pub fn heuristics(&self) -> &[Heuristic] {
        &self.heuristics
    }

    /// 评估棋局（`color` 视角，正值对 `color` 有利），求和溢出时取饱和值
    pub fn evaluate(&self, color: Color, board: &Board) -> i64 {
        self.heuristics
            .iter()
            .map(|h| h.grade_board_equalized(color, board))
            .fold(0, i64::saturating_add)
    }

    /// 各启发式的分项得分（用于日志和调试）
    pub fn breakdown(&self, color: Color, board: &Board) -> Vec<(HeuristicKind, i64)> {
        self.heuristics
            .iter()
            .map(|h| (h.kind, h.grade_board_equalized(color, board)))
            .collect()
    }
}
