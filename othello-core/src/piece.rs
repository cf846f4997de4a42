//! 棋子颜色与坐标定义

use serde::{Deserialize, Serialize};

use crate::error::{OthelloError, Result};

/// 格子颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// 黑方（先手）
    Black,
    /// 白方（后手）
    White,
    /// 空位
    Empty,
}

impl Color {
    /// 获取对方颜色，空位没有对手
    pub fn opponent(&self) -> Result<Color> {
        match self {
            Color::Black => Ok(Color::White),
            Color::White => Ok(Color::Black),
            Color::Empty => Err(OthelloError::EmptyColor),
        }
    }

    /// 是否为棋子（非空位）
    pub fn is_piece(&self) -> bool {
        !matches!(self, Color::Empty)
    }

    /// 单字符标签
    pub fn label(&self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
            Color::Empty => '-',
        }
    }

    /// 从单字符标签解析（不区分大小写）
    pub fn from_label(c: char) -> Option<Color> {
        match c {
            'B' | 'b' => Some(Color::Black),
            'W' | 'w' => Some(Color::White),
            '-' | '.' => Some(Color::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 棋盘坐标（从 0 开始）
///
/// 坐标本身不知道棋盘大小，越界由 [`crate::Board`] 判断。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    /// 创建新坐标
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查坐标是否在 size x size 的棋盘内
    pub fn is_within(&self, size: usize) -> bool {
        (self.row as usize) < size && (self.col as usize) < size
    }

    /// 获取偏移后的坐标，越界返回 None
    pub fn offset(&self, dr: i8, dc: i8, size: usize) -> Option<Coordinate> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row >= 0 && (row as usize) < size && col >= 0 && (col as usize) < size {
            Some(Coordinate::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// 转换为行优先的数组索引
    pub fn to_index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    /// 从行优先的数组索引转换
    pub fn from_index(index: usize, size: usize) -> Self {
        Coordinate::new((index / size) as u8, (index % size) as u8)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
