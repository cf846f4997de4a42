//! 选点接口

use othello_core::{Board, Color, Coordinate};

/// 所有玩家（AI 与人类）共用的选点接口
///
/// 返回 None 表示无子可下（停一手）。实现不得修改传入的棋盘。
pub trait Decider {
    /// 玩家名称
    fn name(&self) -> &str;

    /// 为 `color` 选择落子点
    fn decide(&mut self, board: &Board, color: Color) -> Option<Coordinate>;
}

impl<D: Decider + ?Sized> Decider for Box<D> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&mut self, board: &Board, color: Color) -> Option<Coordinate> {
        (**self).decide(board, color)
    }
}
