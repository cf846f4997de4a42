//! 启发式评估
//!
//! 每种启发式在自己的原生尺度上评分，再乘以均衡系数换算到位置表的尺度，
//! 最后乘以调用方给定的权重。位置表的均衡系数为 1，是其他启发式的换算基准。

use othello_core::{Board, Color, Coordinate};
use serde::{Deserialize, Serialize};

/// 位置分值表（左上象限，按到最近边的行距离、列距离索引，其余象限镜像）
///
/// 距离超过 3 的格子（大棋盘内部）按 3 计算。
mod piece_table {
    pub const QUADRANT: [[i64; 4]; 4] = [
        [1616, -303, 99, 43],
        [-412, -181, -8, -27],
        [133, -4, 51, 7],
        [63, -18, -4, -1],
    ];
}

/// 启发式种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    /// 子数差
    MaxPieces,
    /// 压制对方行动力
    MinMobility,
    /// 奇偶性（争取最后一手）
    Parity,
    /// 稳定子差
    Stability,
    /// 位置分值表
    PieceTable,
}

impl HeuristicKind {
    /// 所有种类
    pub fn all() -> &'static [HeuristicKind] {
        &[
            HeuristicKind::MaxPieces,
            HeuristicKind::MinMobility,
            HeuristicKind::Parity,
            HeuristicKind::Stability,
            HeuristicKind::PieceTable,
        ]
    }

    /// 显示名称
    pub fn name(&self) -> &'static str {
        match self {
            HeuristicKind::MaxPieces => "Max Pieces",
            HeuristicKind::MinMobility => "Min Mobility",
            HeuristicKind::Parity => "Parity",
            HeuristicKind::Stability => "Stability",
            HeuristicKind::PieceTable => "Piece Table",
        }
    }

    /// 均衡系数：一个原生分相当于多少位置表分
    pub fn equalizer(&self) -> i64 {
        match self {
            HeuristicKind::MaxPieces => 25,
            HeuristicKind::MinMobility => 60,
            HeuristicKind::Parity => 150,
            HeuristicKind::Stability => 40,
            HeuristicKind::PieceTable => 1,
        }
    }

    /// 原生尺度评分（正值对 `color` 有利），空位颜色得 0
    pub fn grade_raw(&self, color: Color, board: &Board) -> i64 {
        let Ok(opponent) = color.opponent() else {
            return 0;
        };

        match self {
            HeuristicKind::MaxPieces => {
                board.count_pieces(color) as i64 - board.count_pieces(opponent) as i64
            }
            HeuristicKind::MinMobility => -(board.count_valid_moves(opponent) as i64),
            HeuristicKind::Parity => parity(board),
            HeuristicKind::Stability => {
                let stable = stable_discs(board);
                let count = |c: Color| {
                    board
                        .iter()
                        .filter(|(coord, cell)| *cell == c && stable[coord.to_index(board.size())])
                        .count() as i64
                };
                count(color) - count(opponent)
            }
            HeuristicKind::PieceTable => piece_table_score(color, board),
        }
    }
}

/// 带权重的启发式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heuristic {
    pub kind: HeuristicKind,
    pub weight: i64,
}

impl Heuristic {
    pub fn new(kind: HeuristicKind, weight: i64) -> Self {
        Self { kind, weight }
    }

    pub fn max_pieces(weight: i64) -> Self {
        Self::new(HeuristicKind::MaxPieces, weight)
    }

    pub fn min_mobility(weight: i64) -> Self {
        Self::new(HeuristicKind::MinMobility, weight)
    }

    pub fn parity(weight: i64) -> Self {
        Self::new(HeuristicKind::Parity, weight)
    }

    pub fn stability(weight: i64) -> Self {
        Self::new(HeuristicKind::Stability, weight)
    }

    pub fn piece_table(weight: i64) -> Self {
        Self::new(HeuristicKind::PieceTable, weight)
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn equalizer(&self) -> i64 {
        self.kind.equalizer()
    }

    /// 原生尺度评分
    pub fn grade_board_raw(&self, color: Color, board: &Board) -> i64 {
        self.kind.grade_raw(color, board)
    }

    /// 原生分乘以权重（溢出时取饱和值）
    pub fn grade_board(&self, color: Color, board: &Board) -> i64 {
        self.grade_board_raw(color, board).saturating_mul(self.weight)
    }

    /// 换算到位置表尺度后乘以权重，用于多个启发式求和
    pub fn grade_board_equalized(&self, color: Color, board: &Board) -> i64 {
        self.grade_board(color, board).saturating_mul(self.equalizer())
    }
}

/// 空位为偶数时 `color`（刚落子的一方）将下最后一手
///
/// 只看空位数，不区分颜色：同一局面对双方给出相同的分，
/// 所以同一层的兄弟节点得分一致，偶数层叶节点上的符号实际属于对方。
fn parity(board: &Board) -> i64 {
    match board.count_empty() {
        0 => 0,
        n if n % 2 == 0 => 1,
        _ => -1,
    }
}

/// 格子在位置表中的分值
pub fn piece_table_value(size: usize, coord: Coordinate) -> i64 {
    let (dr, dc) = edge_distance(size, coord);
    piece_table::QUADRANT[dr.min(3)][dc.min(3)]
}

/// 到最近边的行距离和列距离
fn edge_distance(size: usize, coord: Coordinate) -> (usize, usize) {
    let row = coord.row as usize;
    let col = coord.col as usize;
    (row.min(size - 1 - row), col.min(size - 1 - col))
}

/// 与角相邻的格子返回它所挨着的角
pub fn buffered_corner(size: usize, coord: Coordinate) -> Option<Coordinate> {
    match edge_distance(size, coord) {
        (0, 1) | (1, 0) | (1, 1) => {
            let last = (size - 1) as u8;
            let row = if (coord.row as usize) < size / 2 { 0 } else { last };
            let col = if (coord.col as usize) < size / 2 { 0 } else { last };
            Some(Coordinate::new(row, col))
        }
        _ => None,
    }
}

/// 己方格子的位置分之和；所挨着的角已被己方占据时，角旁格子的罚分反转为加分
fn piece_table_score(color: Color, board: &Board) -> i64 {
    let size = board.size();
    board
        .iter()
        .filter(|(_, cell)| *cell == color)
        .map(|(coord, _)| {
            let value = piece_table_value(size, coord);
            match buffered_corner(size, coord) {
                Some(corner) if board.get(corner) == Some(color) => -value,
                _ => value,
            }
        })
        .sum()
}

/// 四条轴线（只需正方向，反方向取负）
const AXES: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// 计算稳定子，结果按行优先索引
///
/// 一枚棋子在每条轴线上都满足以下之一即视为稳定：该线已填满，
/// 或某一侧紧邻棋盘边缘，或某一侧紧邻同色稳定子。反复迭代直到不再变化。
pub fn stable_discs(board: &Board) -> Vec<bool> {
    let size = board.size();
    let mut stable = vec![false; size * size];

    loop {
        let mut changed = false;
        for (coord, color) in board.iter() {
            let index = coord.to_index(size);
            if !color.is_piece() || stable[index] {
                continue;
            }

            let anchored = |dr: i8, dc: i8| match coord.offset(dr, dc, size) {
                None => true,
                Some(next) => board.get(next) == Some(color) && stable[next.to_index(size)],
            };

            let is_stable = AXES.iter().all(|&(dr, dc)| {
                line_full(board, coord, dr, dc) || anchored(dr, dc) || anchored(-dr, -dc)
            });

            if is_stable {
                stable[index] = true;
                changed = true;
            }
        }

        if !changed {
            return stable;
        }
    }
}

/// 经过 `coord` 的整条轴线是否没有空位
fn line_full(board: &Board, coord: Coordinate, dr: i8, dc: i8) -> bool {
    [(dr, dc), (-dr, -dc)].iter().all(|&(dr, dc)| {
        let mut current = coord;
        while let Some(next) = current.offset(dr, dc, board.size()) {
            if board.get(next) == Some(Color::Empty) {
                return false;
            }
            current = next;
        }
        true
    })
}
