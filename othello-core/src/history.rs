//! 对局历史（用于悔棋）
//!
//! 每个快照都持有独立的棋盘拷贝，之后的对局不会改写已记录的历史。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::Color;

/// 某一步之前的局面快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    ply: usize,
    to_move: Color,
    board: Board,
}

impl GameState {
    /// 创建快照（拷贝棋盘）
    pub fn new(ply: usize, to_move: Color, board: &Board) -> Self {
        Self {
            ply,
            to_move,
            board: board.clone(),
        }
    }

    /// 步数（从 0 开始）
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// 轮到哪一方
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// 获取棋盘拷贝
    pub fn board(&self) -> Board {
        self.board.clone()
    }
}

/// 按步数排列的快照序列
#[derive(Debug, Clone, Default)]
pub struct GameHistory {
    states: Vec<GameState>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录快照，步数为当前长度
    pub fn record(&mut self, to_move: Color, board: &Board) -> &GameState {
        let ply = self.states.len();
        self.states.push(GameState::new(ply, to_move, board));
        &self.states[ply]
    }

    /// 获取指定步数的快照
    pub fn get(&self, ply: usize) -> Option<&GameState> {
        self.states.get(ply)
    }

    /// 最新快照
    pub fn latest(&self) -> Option<&GameState> {
        self.states.last()
    }

    /// 已记录的快照数
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// 回退 `plies` 步，返回回退后的快照并丢弃其后的记录
    ///
    /// 历史不足时返回 None，不做任何修改。
    pub fn rewind(&mut self, plies: usize) -> Option<GameState> {
        let target = self.states.len().checked_sub(plies.checked_add(1)?)?;
        self.states.truncate(target + 1);
        self.states.last().cloned()
    }
}
