//! 坐标记法与棋盘文本渲染
//!
//! 坐标记法：列字母 + 从 1 开始的行号，例如 `D3` 表示 (行 2, 列 3)。

use std::fmt::Write;

use crate::board::Board;
use crate::error::{OthelloError, Result};
use crate::piece::{Color, Coordinate};

/// 坐标记法与渲染
pub struct Notation;

impl Notation {
    /// 解析坐标记法（不区分大小写，允许前后空白）
    pub fn parse(input: &str, size: usize) -> Result<Coordinate> {
        let invalid = || OthelloError::InvalidNotation {
            input: input.to_string(),
        };

        let text = input.trim();
        let mut chars = text.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(invalid());
        }
        let col = (letter as u8 - b'A') as usize;
        let row: usize = chars.as_str().parse().map_err(|_| invalid())?;

        if row == 0 || row > size || col >= size {
            return Err(invalid());
        }

        Ok(Coordinate::new((row - 1) as u8, col as u8))
    }

    /// 将坐标转换为记法
    pub fn to_notation(coord: Coordinate) -> String {
        format!("{}{}", (b'A' + coord.col) as char, coord.row as usize + 1)
    }

    /// 渲染棋盘，`hints_for` 为 Some 时用 `*` 标出该方的合法落子点
    pub fn render(board: &Board, hints_for: Option<Color>) -> String {
        let size = board.size();
        let hints = hints_for
            .map(|color| board.valid_moves(color))
            .unwrap_or_default();

        let mut out = String::from("   ");
        for col in 0..size {
            out.push(' ');
            out.push((b'A' + col as u8) as char);
        }
        out.push('\n');

        for (coord, color) in board.iter() {
            if coord.col == 0 {
                let _ = write!(out, "{:>3}", coord.row as usize + 1);
            }
            out.push(' ');
            if hints.contains(&coord) {
                out.push('*');
            } else {
                out.push(color.label());
            }
            if coord.col as usize == size - 1 {
                out.push('\n');
            }
        }

        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Notation::render(self, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notation() {
        assert_eq!(Notation::parse("D3", 8), Ok(Coordinate::new(2, 3)));
        assert_eq!(Notation::parse(" c4 ", 8), Ok(Coordinate::new(3, 2)));
        assert_eq!(Notation::parse("A1", 8), Ok(Coordinate::new(0, 0)));
        assert_eq!(Notation::parse("H8", 8), Ok(Coordinate::new(7, 7)));
    }

    #[test]
    fn test_parse_invalid_notation() {
        assert!(Notation::parse("", 8).is_err());
        assert!(Notation::parse("I1", 8).is_err());
        assert!(Notation::parse("A0", 8).is_err());
        assert!(Notation::parse("A9", 8).is_err());
        assert!(Notation::parse("3D", 8).is_err());
        assert!(Notation::parse("E5", 4).is_err());
        assert!(matches!(
            Notation::parse("pass", 8),
            Err(OthelloError::InvalidNotation { .. })
        ));
    }

    #[test]
    fn test_to_notation() {
        assert_eq!(Notation::to_notation(Coordinate::new(2, 3)), "D3");
        assert_eq!(Notation::to_notation(Coordinate::new(7, 0)), "A8");
    }

    #[test]
    fn test_render_initial() {
        let board = Board::with_size(4).unwrap();
        let text = board.to_string();
        let expected = "    A B C D\n  1 - - - -\n  2 - W B -\n  3 - B W -\n  4 - - - -\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_hints() {
        let board = Board::initial();
        let text = Notation::render(&board, Some(Color::Black));
        assert_eq!(text.matches('*').count(), 4);
    }
}
