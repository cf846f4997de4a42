//! 随机 AI（基准对手）

use othello_core::{Board, Color, Coordinate};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::player::Decider;

/// 从合法落子点中均匀随机选择，相同种子产生相同的选点序列
pub struct RandomAi {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomAi {
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Decider for RandomAi {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, board: &Board, color: Color) -> Option<Coordinate> {
        board.valid_moves(color).choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_out(seed: u64) -> Vec<Option<Coordinate>> {
        let mut ai = RandomAi::new("random", seed);
        let mut board = Board::initial();
        let mut color = Color::Black;
        let mut picks = Vec::new();
        for _ in 0..12 {
            let mv = ai.decide(&board, color);
            if let Some(mv) = mv {
                assert!(board.apply_move(color, mv));
            }
            picks.push(mv);
            color = color.opponent().unwrap();
        }
        picks
    }

    #[test]
    fn test_random_picks_legal_moves() {
        // play_out 内部已校验每次选点都能落子
        let picks = play_out(7);
        assert!(picks[0].is_some());
    }

    #[test]
    fn test_random_same_seed_same_moves() {
        assert_eq!(play_out(42), play_out(42));
    }

    #[test]
    fn test_random_passes_without_moves() {
        let board = othello_core::Layout::parse("BB--/BB--/----/----").unwrap();
        let mut ai = RandomAi::new("random", 1);
        assert_eq!(ai.decide(&board, Color::White), None);
    }
}
