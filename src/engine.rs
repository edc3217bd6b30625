//! Decision engine: single-ply greedy move selection
//!
//! The bot scores every candidate cell and plays the best one. Selection
//! priority per candidate, in generator order:
//!
//! 1. **Immediate win**: a cell that completes five-in-a-row is taken on the
//!    spot, without scanning the remaining candidates.
//! 2. **Forced block**: a cell that would complete the opponent's five gets
//!    a [`BLOCK_WIN`] bonus, large enough to dominate any positional score,
//!    but still compared against the other candidates.
//! 3. **Positional score**: offensive pattern value plus the opponent's
//!    pattern value at the same cell discounted by [`DEFENSE_WEIGHT`].
//!
//! There is no lookahead; this is deliberately a one-move heuristic player.
//!
//! # Example
//!
//! ```
//! use caro::{Board, Engine, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let mut engine = Engine::with_seed(1);
//! if let Some(pos) = engine.select_move(&board, Stone::White) {
//!     board.place_stone(pos, Stone::White);
//! }
//! ```

use std::time::Instant;

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::movegen::candidate_moves;
use crate::rules::has_five_at;

/// Bonus for a move that prevents an immediate opponent win.
pub const BLOCK_WIN: f64 = 500_000.0;

/// Discount applied to the opponent's pattern value at the candidate cell.
pub const DEFENSE_WEIGHT: f64 = 0.5;

/// How the engine arrived at its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// The move completes five-in-a-row for the bot
    ImmediateWin,
    /// Best heuristic score among the candidates
    Heuristic,
}

/// Result of a move selection with diagnostics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Combined heuristic score of the chosen move
    pub score: f64,
    /// Which selection branch produced the move
    pub kind: MoveKind,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of candidates considered
    pub candidates: usize,
}

/// Greedy heuristic move selector.
///
/// Owns the RNG used to down-sample oversized candidate sets. [`Engine::new`]
/// seeds it from the thread RNG; [`Engine::with_seed`] makes every selection
/// on the same board reproducible.
#[derive(Debug, Clone)]
pub struct Engine {
    rng: Pcg32,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg32::seed_from_u64(rand::rng().random()),
        }
    }

    /// Create an engine with a fixed down-sampling seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Select the bot's move for `stone`. Does not mutate the board;
    /// committing the move is the caller's job.
    #[must_use]
    pub fn select_move(&mut self, board: &Board, stone: Stone) -> Option<Pos> {
        self.select_move_with_stats(board, stone).best_move
    }

    /// Select a move and report how it was chosen.
    #[must_use]
    pub fn select_move_with_stats(&mut self, board: &Board, stone: Stone) -> MoveResult {
        let start = Instant::now();
        let opponent = stone.opponent();

        let moves = candidate_moves(board, &mut self.rng);
        debug!(candidates = moves.len(), "scoring candidate moves");

        let mut best_move = None;
        let mut best_score = f64::NEG_INFINITY;

        for &pos in &moves {
            // Immediate win: take the first one found and stop scanning.
            if has_five_at(board, pos, stone) {
                debug!(row = pos.row, col = pos.col, "immediate winning move");
                return MoveResult {
                    best_move: Some(pos),
                    score: f64::INFINITY,
                    kind: MoveKind::ImmediateWin,
                    time_ms: start.elapsed().as_millis() as u64,
                    candidates: moves.len(),
                };
            }

            let mut score = 0.0;

            // Forced block: outweighs every positional pattern, but the move
            // still competes with the other candidates' totals.
            if has_five_at(board, pos, opponent) {
                score += BLOCK_WIN;
            }

            score += f64::from(evaluate(board, pos, stone));
            score += DEFENSE_WEIGHT * f64::from(evaluate(board, pos, opponent));

            // Strict comparison: the first candidate wins ties.
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        // Every candidate scores at least 0.0, so this only falls back when
        // the candidate list itself is empty.
        let best_move = best_move.or_else(|| moves.first().copied());
        if let Some(pos) = best_move {
            debug!(row = pos.row, col = pos.col, score = best_score, "selected move");
        }

        MoveResult {
            best_move,
            score: best_score,
            kind: MoveKind::Heuristic,
            time_ms: start.elapsed().as_millis() as u64,
            candidates: moves.len(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    #[test]
    fn test_empty_board_plays_center() {
        let board = Board::new();
        let mut engine = Engine::with_seed(0);
        assert_eq!(engine.select_move(&board, Stone::White), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        // Open four for the bot: . O O O O .
        for i in 5..9 {
            board.place_stone(Pos::new(7, i), Stone::White);
        }
        board.place_stone(Pos::new(9, 9), Stone::Black);

        let mut engine = Engine::with_seed(0);
        let result = engine.select_move_with_stats(&board, Stone::White);

        assert_eq!(result.kind, MoveKind::ImmediateWin);
        let m = result.best_move.expect("winning move expected");
        assert!(
            m == Pos::new(7, 4) || m == Pos::new(7, 9),
            "expected a completing cell, got {:?}",
            m
        );
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut board = Board::new();
        // Both sides have an open four; the bot should win, not block.
        for i in 5..9 {
            board.place_stone(Pos::new(7, i), Stone::White);
            board.place_stone(Pos::new(9, i), Stone::Black);
        }

        let mut engine = Engine::with_seed(0);
        let result = engine.select_move_with_stats(&board, Stone::White);

        assert_eq!(result.kind, MoveKind::ImmediateWin);
        let m = result.best_move.expect("winning move expected");
        assert_eq!(m.row, 7);
    }

    #[test]
    fn test_blocks_opponent_four() {
        let mut board = Board::new();
        // Human four with one open end: O X X X X .
        board.place_stone(Pos::new(7, 0), Stone::White);
        for i in 1..5 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        board.place_stone(Pos::new(10, 10), Stone::White);

        let mut engine = Engine::with_seed(0);
        let result = engine.select_move_with_stats(&board, Stone::White);

        assert_eq!(result.best_move, Some(Pos::new(7, 5)));
        assert_eq!(result.kind, MoveKind::Heuristic);
        assert!(result.score >= BLOCK_WIN);
    }

    #[test]
    fn test_block_dominates_positional_score() {
        let mut board = Board::new();
        // Bot has an open three (strong positional pull), human has a
        // one-ended four elsewhere; the block must win out.
        for i in 5..8 {
            board.place_stone(Pos::new(3, i), Stone::White);
        }
        board.place_stone(Pos::new(11, 4), Stone::White);
        for i in 5..9 {
            board.place_stone(Pos::new(11, i), Stone::Black);
        }

        let mut engine = Engine::with_seed(0);
        let result = engine.select_move_with_stats(&board, Stone::White);

        assert_eq!(result.best_move, Some(Pos::new(11, 9)));
    }

    #[test]
    fn test_first_candidate_wins_ties() {
        let mut board = Board::new();
        // With a single stone the window cells pair up symmetrically; the
        // same seed must always resolve ties to the same (first) candidate.
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let mut a = Engine::with_seed(1);
        let mut b = Engine::with_seed(1);
        assert_eq!(
            a.select_move(&board, Stone::White),
            b.select_move(&board, Stone::White)
        );
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(Pos::from_index(idx), stone);
        }

        let mut engine = Engine::with_seed(0);
        let result = engine.select_move_with_stats(&board, Stone::White);
        assert!(result.best_move.is_none());
        assert_eq!(result.candidates, 0);
    }

    #[test]
    fn test_does_not_mutate_board() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let snapshot = board.clone();

        let mut engine = Engine::with_seed(0);
        let _ = engine.select_move(&board, Stone::White);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_seeded_selection_reproducible() {
        let mut board = Board::new();
        // Enough spread stones to trigger down-sampling
        for r in [2u8, 7, 12] {
            for c in [2u8, 7, 12] {
                board.place_stone(Pos::new(r, c), Stone::Black);
            }
        }

        let m1 = Engine::with_seed(99).select_move(&board, Stone::White);
        let m2 = Engine::with_seed(99).select_move(&board, Stone::White);
        assert_eq!(m1, m2);
    }
}
