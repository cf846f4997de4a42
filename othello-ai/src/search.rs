//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝，内部节点按静态评估排序

use std::time::{Duration, Instant};

use othello_core::{Board, Color, Coordinate};
use serde::{Deserialize, Serialize};

use crate::evaluate::Evaluator;
use crate::greedy::best_single_ply;
use crate::player::Decider;

/// 搜索配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 搜索层数，小于等于 1 时等同于单层贪心
    pub depth: i32,
    /// 思考时间上限（毫秒），None 表示只受层数限制
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
    /// 内部节点是否按静态评估排序
    #[serde(default = "default_order_moves")]
    pub order_moves: bool,
}

fn default_order_moves() -> bool {
    true
}

impl SearchConfig {
    pub fn with_depth(depth: i32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            time_limit_ms: None,
            order_moves: true,
        }
    }
}

/// 搜索 AI
pub struct SearchAi {
    name: String,
    config: SearchConfig,
    evaluator: Evaluator,
    nodes_searched: u64,
    deadline: Option<Instant>,
}

impl SearchAi {
    /// 创建新的搜索 AI
    pub fn new(name: impl Into<String>, config: SearchConfig, evaluator: Evaluator) -> Self {
        Self {
            name: name.into(),
            config,
            evaluator,
            nodes_searched: 0,
            deadline: None,
        }
    }

    /// 搜索最佳落子点及其分值，无子可下返回 None
    pub fn search(&mut self, board: &Board, color: Color) -> Option<(Coordinate, i64)> {
        self.nodes_searched = 0;
        self.deadline = self
            .config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        if self.config.depth <= 1 {
            return best_single_ply(&self.evaluator, board, color);
        }

        let opponent = color.opponent().ok()?;
        let moves = board.valid_moves(color);
        let mut best: Option<(Coordinate, i64)> = None;
        let mut alpha = i64::MIN;

        for mv in moves {
            // 超时则使用已搜索部分的结果
            if best.is_some() && self.out_of_time() {
                tracing::debug!("{} 搜索超时，提前返回", self.name);
                break;
            }

            let mut child = board.clone();
            child.apply_move(color, mv);
            let score = self.alpha_beta(&child, color, opponent, self.config.depth - 1, alpha, i64::MAX);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
                alpha = score;
            }
        }

        best
    }

    /// Alpha-Beta 搜索（fail-soft）
    ///
    /// 分值始终是 `mover` 视角：轮到 `mover` 时取最大，轮到对方时取最小。
    /// 无子可下时停一手，同样消耗一层深度。
    fn alpha_beta(
        &mut self,
        board: &Board,
        mover: Color,
        to_move: Color,
        depth: i32,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        self.nodes_searched += 1;

        if depth <= 0 || self.out_of_time() || board.is_game_over() {
            return self.evaluator.evaluate(mover, board);
        }

        let Ok(next) = to_move.opponent() else {
            return self.evaluator.evaluate(mover, board);
        };

        let maximizing = to_move == mover;
        let children = self.expand(board, mover, to_move, depth, maximizing);
        if children.is_empty() {
            return self.alpha_beta(board, mover, next, depth - 1, alpha, beta);
        }

        if maximizing {
            let mut value = i64::MIN;
            for child in &children {
                value = value.max(self.alpha_beta(child, mover, next, depth - 1, alpha, beta));
                alpha = alpha.max(value);
                if alpha >= beta {
                    break; // Beta 剪枝
                }
            }
            value
        } else {
            let mut value = i64::MAX;
            for child in &children {
                value = value.min(self.alpha_beta(child, mover, next, depth - 1, alpha, beta));
                beta = beta.min(value);
                if alpha >= beta {
                    break; // Alpha 剪枝
                }
            }
            value
        }
    }

    /// 生成子局面，需要继续向下搜索时按静态评估排序（稳定排序，同分保持枚举顺序）
    fn expand(
        &self,
        board: &Board,
        mover: Color,
        to_move: Color,
        depth: i32,
        maximizing: bool,
    ) -> Vec<Board> {
        let children = board.valid_moves(to_move).into_iter().map(|mv| {
            let mut child = board.clone();
            child.apply_move(to_move, mv);
            child
        });

        if !self.config.order_moves || depth <= 1 {
            return children.collect();
        }

        let mut scored: Vec<(i64, Board)> = children
            .map(|child| (self.evaluator.evaluate(mover, &child), child))
            .collect();
        if maximizing {
            scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));
        } else {
            scored.sort_by_key(|(score, _)| *score);
        }
        scored.into_iter().map(|(_, child)| child).collect()
    }

    fn out_of_time(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

impl Decider for SearchAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, board: &Board, color: Color) -> Option<Coordinate> {
        let Some((mv, score)) = self.search(board, color) else {
            tracing::debug!("{} 无子可下，停一手", self.name);
            return None;
        };
        tracing::debug!(
            "{} 搜索选点: {} 得分 {} 深度 {} 节点 {}",
            self.name,
            mv,
            score,
            self.config.depth,
            self.nodes_searched
        );
        Some(mv)
    }
}
