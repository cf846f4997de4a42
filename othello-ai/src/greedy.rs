//! 单层贪心 AI

use othello_core::{Board, Color, Coordinate};

use crate::evaluate::Evaluator;
use crate::player::Decider;

/// 对每个合法落子点评估一步之后的局面，选分数最高的
pub struct GreedyAi {
    name: String,
    evaluator: Evaluator,
}

impl GreedyAi {
    pub fn new(name: impl Into<String>, evaluator: Evaluator) -> Self {
        Self {
            name: name.into(),
            evaluator,
        }
    }
}

impl Decider for GreedyAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, board: &Board, color: Color) -> Option<Coordinate> {
        let (mv, score) = best_single_ply(&self.evaluator, board, color)?;
        tracing::debug!("{} 贪心选点: {} 得分 {}", self.name, mv, score);
        Some(mv)
    }
}

/// 单层评估：分数相同时保留先枚举到的落子点
pub(crate) fn best_single_ply(
    evaluator: &Evaluator,
    board: &Board,
    color: Color,
) -> Option<(Coordinate, i64)> {
    let mut best: Option<(Coordinate, i64)> = None;

    for mv in board.valid_moves(color) {
        let mut next = board.clone();
        next.apply_move(color, mv);
        let score = evaluator.evaluate(color, &next);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    best
}
