//! 棋盘布局字符串解析和生成
//!
//! 格式：每行用 `/` 分隔，每格一个颜色标签（`B` 黑、`W` 白、`-` 或 `.` 空）。
//!
//! 示例（8x8 初始局面）：
//! `--------/--------/--------/---WB---/---BW---/--------/--------/--------`

use crate::board::Board;
use crate::error::{OthelloError, Result};
use crate::piece::{Color, Coordinate};

/// 8x8 初始局面
pub const INITIAL_LAYOUT: &str =
    "--------/--------/--------/---WB---/---BW---/--------/--------/--------";

/// 布局格式处理
pub struct Layout;

impl Layout {
    /// 解析布局字符串，边长由行数决定
    pub fn parse(layout: &str) -> Result<Board> {
        let rows: Vec<&str> = layout.trim().split('/').map(str::trim).collect();
        let size = rows.len();

        let mut board = Board::empty(size).map_err(|_| OthelloError::InvalidLayout {
            reason: format!("Unsupported row count: {}", size),
        })?;

        for (row_idx, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != size {
                return Err(OthelloError::InvalidLayout {
                    reason: format!("Row {} has {} columns, expected {}", row_idx, cells.len(), size),
                });
            }

            for (col_idx, c) in cells.into_iter().enumerate() {
                let color = Color::from_label(c).ok_or_else(|| OthelloError::InvalidLayout {
                    reason: format!("Invalid cell character: {}", c),
                })?;
                board.place(color, Coordinate::new(row_idx as u8, col_idx as u8));
            }
        }

        Ok(board)
    }

    /// 将棋盘转换为布局字符串
    pub fn to_string(board: &Board) -> String {
        let size = board.size();
        let mut rows = Vec::with_capacity(size);
        let mut row = String::with_capacity(size);

        for (coord, color) in board.iter() {
            row.push(color.label());
            if coord.col as usize == size - 1 {
                rows.push(std::mem::take(&mut row));
            }
        }

        rows.join("/")
    }
}
