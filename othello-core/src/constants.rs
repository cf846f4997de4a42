//! 棋盘常量定义

/// 标准棋盘边长
pub const BOARD_SIZE: usize = 8;

/// 支持的最小棋盘边长
pub const MIN_BOARD_SIZE: usize = 4;

/// 支持的最大棋盘边长（列号用单个字母表示）
pub const MAX_BOARD_SIZE: usize = 26;

/// 八个射线方向 (行偏移, 列偏移)
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
