//! 对局控制
//!
//! 包含单局流程、悔棋和多轮对战

use othello_ai::Decider;
use othello_core::{Board, Color, Coordinate, GameHistory};

/// 同一步连续给出非法落子的次数上限，超过则判为停一手
pub const MAX_ILLEGAL_ATTEMPTS: usize = 3;

/// 一步的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlyResult {
    /// 正常落子
    Moved(Coordinate),
    /// 无子可下
    Passed,
    /// 多次非法落子，本步作废
    Forfeited,
}

/// 单局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// 胜方，平局为 Empty
    pub winner: Color,
    pub black: usize,
    pub white: usize,
    /// 总步数（含停一手）
    pub plies: usize,
}

/// 一局对局
pub struct Match<'a> {
    board: Board,
    to_move: Color,
    black: &'a mut dyn Decider,
    white: &'a mut dyn Decider,
    history: GameHistory,
    /// 连续未落子的步数
    idle_plies: usize,
}

impl<'a> Match<'a> {
    /// 创建对局，`first_mover` 必须是黑或白
    pub fn new(
        board: Board,
        first_mover: Color,
        black: &'a mut dyn Decider,
        white: &'a mut dyn Decider,
    ) -> Self {
        let mut history = GameHistory::new();
        history.record(first_mover, &board);
        Self {
            board,
            to_move: first_mover,
            black,
            white,
            history,
            idle_plies: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// 已走步数
    pub fn ply(&self) -> usize {
        self.history.latest().map_or(0, |state| state.ply())
    }

    /// 对局是否结束
    ///
    /// 双方都无子可下，或者连续两步都没有落子（例如一方多次非法落子后对方恰好无子可下）。
    pub fn is_over(&self) -> bool {
        self.board.is_game_over() || self.idle_plies >= 2
    }

    /// 走一步
    pub fn play_ply(&mut self) -> PlyResult {
        let color = self.to_move;
        let result = if self.board.has_valid_move(color) {
            self.request_move(color)
        } else {
            PlyResult::Passed
        };

        match result {
            PlyResult::Moved(mv) => {
                tracing::debug!("第 {} 步: {} 落子 {}", self.ply() + 1, color, mv);
                self.idle_plies = 0;
            }
            PlyResult::Passed => {
                tracing::debug!("第 {} 步: {} 停一手", self.ply() + 1, color);
                self.idle_plies += 1;
            }
            PlyResult::Forfeited => {
                tracing::warn!("第 {} 步: {} 多次非法落子，判为停一手", self.ply() + 1, color);
                self.idle_plies += 1;
            }
        }

        // 只有黑白两色会轮到，取对手不会失败
        self.to_move = color.opponent().unwrap_or(Color::Black);
        self.history.record(self.to_move, &self.board);
        result
    }

    fn request_move(&mut self, color: Color) -> PlyResult {
        let decider: &mut dyn Decider = if color == Color::Black {
            &mut *self.black
        } else {
            &mut *self.white
        };

        for attempt in 1..=MAX_ILLEGAL_ATTEMPTS {
            match decider.decide(&self.board, color) {
                Some(mv) => {
                    if self.board.apply_move(color, mv) {
                        return PlyResult::Moved(mv);
                    }
                    tracing::warn!("{} 非法落子 {} ({}/{})", decider.name(), mv, attempt, MAX_ILLEGAL_ATTEMPTS);
                }
                None => {
                    tracing::warn!("{} 有子可下却停一手 ({}/{})", decider.name(), attempt, MAX_ILLEGAL_ATTEMPTS);
                }
            }
        }

        PlyResult::Forfeited
    }

    /// 下完整局
    pub fn play_game(&mut self) -> GameOutcome {
        while !self.is_over() {
            self.play_ply();
        }

        let outcome = self.outcome();
        tracing::info!(
            "对局结束: {} 胜 ({} 黑 : {} 白, {} 步)",
            outcome.winner,
            outcome.black,
            outcome.white,
            outcome.plies
        );
        outcome
    }

    /// 当前局面的结果（未结束时为当前领先方）
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            winner: self.board.winner(),
            black: self.board.count_pieces(Color::Black),
            white: self.board.count_pieces(Color::White),
            plies: self.ply(),
        }
    }

    /// 悔棋 `plies` 步，历史不足时返回 false
    pub fn undo(&mut self, plies: usize) -> bool {
        let Some(state) = self.history.rewind(plies) else {
            return false;
        };
        self.board = state.board();
        self.to_move = state.to_move();
        self.idle_plies = 0;
        true
    }
}

/// 多轮对战统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentResult {
    /// 两名玩家各自的胜局数
    pub wins: [usize; 2],
    pub draws: usize,
    pub games: Vec<GameOutcome>,
}

/// 多轮对战
///
/// `players[0]` 在第一局执 `first_mover`，`swap_order` 为 true 时每局交换。
pub fn play_tournament(
    players: &mut [Box<dyn Decider>; 2],
    start: &Board,
    first_mover: Color,
    rounds: u32,
    swap_order: bool,
) -> TournamentResult {
    let mut result = TournamentResult::default();

    for round in 0..rounds {
        let swapped = swap_order && round % 2 == 1;
        let (lead, follow) = if swapped { (1, 0) } else { (0, 1) };

        let [first, second] = &mut *players;
        let (lead_player, follow_player): (&mut dyn Decider, &mut dyn Decider) = if swapped {
            (second.as_mut(), first.as_mut())
        } else {
            (first.as_mut(), second.as_mut())
        };
        tracing::info!(
            "第 {} 局: {} ({}) 对 {}",
            round + 1,
            lead_player.name(),
            first_mover,
            follow_player.name()
        );

        let (black, white) = if first_mover == Color::White {
            (follow_player, lead_player)
        } else {
            (lead_player, follow_player)
        };
        let outcome = Match::new(start.clone(), first_mover, black, white).play_game();

        if outcome.winner == Color::Empty {
            result.draws += 1;
        } else if outcome.winner == first_mover {
            result.wins[lead] += 1;
        } else {
            result.wins[follow] += 1;
        }
        result.games.push(outcome);
    }

    tracing::info!(
        "对战结束: {} 胜 {} 负 {} 平",
        result.wins[0],
        result.wins[1],
        result.draws
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_ai::{Evaluator, GreedyAi, Heuristic, RandomAi, Roster};
    use othello_core::Layout;

    /// 总是给出同一个坐标的玩家
    struct Stubborn(Coordinate);

    impl Decider for Stubborn {
        fn name(&self) -> &str {
            "stubborn"
        }

        fn decide(&mut self, _board: &Board, _color: Color) -> Option<Coordinate> {
            Some(self.0)
        }
    }

    fn greedy() -> GreedyAi {
        GreedyAi::new("pieces", Evaluator::new(vec![Heuristic::max_pieces(1)]))
    }

    #[test]
    fn test_play_game_to_completion() {
        let mut black = greedy();
        let mut white = RandomAi::new("random", 3);
        let mut game = Match::new(Board::initial(), Color::Black, &mut black, &mut white);

        let outcome = game.play_game();
        assert!(game.board().is_game_over());
        assert_eq!(outcome.plies, game.ply());
        assert_eq!(game.history().len(), outcome.plies + 1);
        assert_eq!(outcome.winner, game.board().winner());
        assert_eq!(
            outcome.black + outcome.white + game.board().count_empty(),
            64
        );
    }

    #[test]
    fn test_pass_is_recorded() {
        // 白方无子可下，黑方拿下 A1 后终局
        let board = Layout::parse("-WBB/----/----/----").unwrap();
        let mut black = greedy();
        let mut white = greedy();
        let mut game = Match::new(board, Color::White, &mut black, &mut white);

        assert_eq!(game.play_ply(), PlyResult::Passed);
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(game.play_ply(), PlyResult::Moved(Coordinate::new(0, 0)));
        assert!(game.is_over());

        let outcome = game.outcome();
        assert_eq!(outcome.winner, Color::Black);
        assert_eq!((outcome.black, outcome.white, outcome.plies), (4, 0, 2));
    }

    #[test]
    fn test_illegal_moves_forfeit_ply() {
        let mut black = Stubborn(Coordinate::new(0, 0));
        let mut white = greedy();
        let mut game = Match::new(Board::initial(), Color::Black, &mut black, &mut white);

        assert_eq!(game.play_ply(), PlyResult::Forfeited);
        assert_eq!(game.board(), &Board::initial());
        assert_eq!(game.to_move(), Color::White);
        assert!(matches!(game.play_ply(), PlyResult::Moved(_)));
    }

    #[test]
    fn test_game_ends_when_nobody_moves() {
        let mut black = Stubborn(Coordinate::new(0, 0));
        let mut white = Stubborn(Coordinate::new(0, 0));
        let mut game = Match::new(Board::initial(), Color::Black, &mut black, &mut white);

        let outcome = game.play_game();
        assert_eq!(outcome.plies, 2);
        assert_eq!(outcome.winner, Color::Empty);
    }

    #[test]
    fn test_undo_restores_snapshot() {
        let mut black = greedy();
        let mut white = greedy();
        let mut game = Match::new(Board::initial(), Color::Black, &mut black, &mut white);

        game.play_ply();
        let after_one = game.board().clone();
        game.play_ply();
        game.play_ply();
        assert_eq!(game.ply(), 3);

        assert!(game.undo(2));
        assert_eq!(game.ply(), 1);
        assert_eq!(game.board(), &after_one);
        assert_eq!(game.to_move(), Color::White);

        assert!(!game.undo(5));
        assert!(!game.undo(usize::MAX));
        assert_eq!(game.ply(), 1);

        assert!(game.undo(1));
        assert_eq!(game.board(), &Board::initial());
        assert_eq!(game.to_move(), Color::Black);
    }

    #[test]
    fn test_undo_then_replay_is_deterministic() {
        let mut black = greedy();
        let mut white = greedy();
        let mut game = Match::new(Board::initial(), Color::Black, &mut black, &mut white);

        let first = game.play_ply();
        game.play_ply();
        assert!(game.undo(2));
        assert_eq!(game.play_ply(), first);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_tournament_swaps_first_mover() {
        let mut players: [Box<dyn Decider>; 2] = [
            Roster::avatar("hybrid-curves").unwrap().build().unwrap(),
            Roster::avatar("random").unwrap().build().unwrap(),
        ];
        let board = Board::with_size(6).unwrap();

        let result = play_tournament(&mut players, &board, Color::Black, 4, true);
        assert_eq!(result.games.len(), 4);
        assert_eq!(result.wins[0] + result.wins[1] + result.draws, 4);
        for game in &result.games {
            assert!(game.plies > 0);
            assert!(game.black + game.white <= 36);
        }
    }

    #[test]
    fn test_tournament_deterministic_players_repeat() {
        // 确定性玩家不交换先手时每局都相同
        let mut players: [Box<dyn Decider>; 2] = [Box::new(greedy()), Box::new(greedy())];
        let result = play_tournament(&mut players, &Board::initial(), Color::White, 3, false);
        assert_eq!(result.games[0], result.games[1]);
        assert_eq!(result.games[1], result.games[2]);
    }
}
