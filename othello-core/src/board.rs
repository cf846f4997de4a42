//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{OthelloError, Result};
use crate::piece::{Color, Coordinate};

/// 棋盘
///
/// `Clone` 是完整的深拷贝，拷贝与原棋盘之间没有共享状态。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// 边长
    size: usize,
    /// size x size 格子，索引为 row * size + col
    cells: Vec<Color>,
}

impl Board {
    /// 创建 8x8 初始棋盘
    pub fn initial() -> Self {
        Self::blank(BOARD_SIZE).with_center_setup()
    }

    /// 创建指定边长的初始棋盘
    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self::empty(size)?.with_center_setup())
    }

    /// 创建指定边长的空棋盘（用于残局摆放）
    pub fn empty(size: usize) -> Result<Self> {
        Self::check_size(size)?;
        Ok(Self::blank(size))
    }

    /// 检查棋盘边长
    pub fn check_size(size: usize) -> Result<()> {
        if size % 2 != 0 || !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(OthelloError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(())
    }

    fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![Color::Empty; size * size],
        }
    }

    /// 中心四格：白方在主对角线，黑方在副对角线
    fn with_center_setup(mut self) -> Self {
        let low = (self.size / 2 - 1) as u8;
        let high = (self.size / 2) as u8;
        self.put(Coordinate::new(low, low), Color::White);
        self.put(Coordinate::new(low, high), Color::Black);
        self.put(Coordinate::new(high, low), Color::Black);
        self.put(Coordinate::new(high, high), Color::White);
        self
    }

    /// 棋盘边长
    pub fn size(&self) -> usize {
        self.size
    }

    /// 坐标是否在棋盘内
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.is_within(self.size)
    }

    /// 获取指定格子的颜色，越界返回 None
    pub fn get(&self, coord: Coordinate) -> Option<Color> {
        if self.contains(coord) {
            Some(self.cells[coord.to_index(self.size)])
        } else {
            None
        }
    }

    /// 直接摆放棋子（不检查规则，用于残局摆放）
    ///
    /// 越界返回 false。
    pub fn place(&mut self, color: Color, coord: Coordinate) -> bool {
        if !self.contains(coord) {
            return false;
        }
        self.put(coord, color);
        true
    }

    /// 写入格子，调用方保证坐标合法
    pub(crate) fn put(&mut self, coord: Coordinate, color: Color) {
        let index = coord.to_index(self.size);
        self.cells[index] = color;
    }

    /// 行优先遍历所有格子
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Color)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, color)| (Coordinate::from_index(index, size), *color))
    }

    /// 统计指定颜色的格子数
    pub fn count_pieces(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == color).count()
    }

    /// 统计空位数
    pub fn count_empty(&self) -> usize {
        self.count_pieces(Color::Empty)
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();
        assert_eq!(board.size(), 8);

        assert_eq!(board.get(Coordinate::new(3, 3)), Some(Color::White));
        assert_eq!(board.get(Coordinate::new(4, 4)), Some(Color::White));
        assert_eq!(board.get(Coordinate::new(3, 4)), Some(Color::Black));
        assert_eq!(board.get(Coordinate::new(4, 3)), Some(Color::Black));

        assert_eq!(board.count_pieces(Color::Black), 2);
        assert_eq!(board.count_pieces(Color::White), 2);
        assert_eq!(board.count_empty(), 60);
    }

    #[test]
    fn test_board_sizes() {
        let small = Board::with_size(4).unwrap();
        assert_eq!(small.get(Coordinate::new(1, 1)), Some(Color::White));
        assert_eq!(small.get(Coordinate::new(1, 2)), Some(Color::Black));
        assert_eq!(small.count_empty(), 12);

        assert!(Board::with_size(10).is_ok());
        assert!(matches!(
            Board::with_size(7),
            Err(OthelloError::InvalidBoardSize { size: 7, .. })
        ));
        assert!(Board::with_size(2).is_err());
        assert!(Board::empty(28).is_err());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::initial();
        assert_eq!(board.get(Coordinate::new(8, 0)), None);
        assert_eq!(board.get(Coordinate::new(0, 200)), None);
    }

    #[test]
    fn test_place() {
        let mut board = Board::empty(8).unwrap();
        assert!(board.place(Color::Black, Coordinate::new(0, 0)));
        assert_eq!(board.get(Coordinate::new(0, 0)), Some(Color::Black));
        assert!(!board.place(Color::Black, Coordinate::new(8, 8)));
        assert_eq!(board.count_pieces(Color::Black), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::initial();
        let mut copy = original.clone();
        copy.place(Color::Black, Coordinate::new(0, 0));

        assert_eq!(original.get(Coordinate::new(0, 0)), Some(Color::Empty));
        assert_eq!(copy.get(Coordinate::new(0, 0)), Some(Color::Black));
        assert_ne!(original, copy);
    }
}
