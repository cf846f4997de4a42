//! 走法生成、验证与执行

use crate::board::Board;
use crate::constants::DIRECTIONS;
use crate::piece::{Color, Coordinate};

impl Board {
    /// 沿一个方向收集落子后会被翻转的棋子
    ///
    /// 只有连续的对方棋子之后紧跟己方棋子时才会翻转；遇到空位或棋盘边缘则不翻转。
    fn flips_in_direction(&self, color: Color, from: Coordinate, dr: i8, dc: i8) -> Vec<Coordinate> {
        let Ok(opponent) = color.opponent() else {
            return Vec::new();
        };

        let mut run = Vec::new();
        let mut current = from;
        while let Some(next) = current.offset(dr, dc, self.size()) {
            match self.get(next) {
                Some(c) if c == opponent => run.push(next),
                Some(c) if c == color => return run,
                _ => break,
            }
            current = next;
        }

        Vec::new()
    }

    /// 落子后会被翻转的全部棋子（八个方向各自独立）
    ///
    /// 目标格非空、越界或颜色为空位时返回空列表。
    pub fn flips_for(&self, color: Color, coord: Coordinate) -> Vec<Coordinate> {
        if !color.is_piece() || self.get(coord) != Some(Color::Empty) {
            return Vec::new();
        }

        DIRECTIONS
            .iter()
            .flat_map(|&(dr, dc)| self.flips_in_direction(color, coord, dr, dc))
            .collect()
    }

    /// 检查走法是否合法
    pub fn is_legal_move(&self, color: Color, coord: Coordinate) -> bool {
        if !color.is_piece() || self.get(coord) != Some(Color::Empty) {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| !self.flips_in_direction(color, coord, dr, dc).is_empty())
    }

    /// 行优先生成所有合法落子点
    pub fn valid_moves(&self, color: Color) -> Vec<Coordinate> {
        self.iter()
            .filter(|(_, c)| *c == Color::Empty)
            .map(|(coord, _)| coord)
            .filter(|coord| self.is_legal_move(color, *coord))
            .collect()
    }

    /// 合法落子点数量
    pub fn count_valid_moves(&self, color: Color) -> usize {
        self.valid_moves(color).len()
    }

    /// 是否存在至少一个合法落子点
    pub fn has_valid_move(&self, color: Color) -> bool {
        self.iter()
            .any(|(coord, c)| c == Color::Empty && self.is_legal_move(color, coord))
    }

    /// 执行走法
    ///
    /// 非法走法返回 false，棋盘保持不变。
    pub fn apply_move(&mut self, color: Color, coord: Coordinate) -> bool {
        let flips = self.flips_for(color, coord);
        if flips.is_empty() {
            tracing::trace!("拒绝非法走法: {:?} {}", color, coord);
            return false;
        }

        self.put(coord, color);
        for flipped in flips {
            self.put(flipped, color);
        }
        true
    }

    /// 双方都无子可下时游戏结束（包括棋盘已满）
    pub fn is_game_over(&self) -> bool {
        !self.has_valid_move(Color::Black) && !self.has_valid_move(Color::White)
    }

    /// 棋子多的一方获胜，相等返回 Color::Empty（平局）
    ///
    /// 游戏未结束时返回当前领先方。
    pub fn winner(&self) -> Color {
        let black = self.count_pieces(Color::Black);
        let white = self.count_pieces(Color::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Color::Black,
            std::cmp::Ordering::Less => Color::White,
            std::cmp::Ordering::Equal => Color::Empty,
        }
    }
}
