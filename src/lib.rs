//! Connect-five (Caro) game core with a heuristic computer opponent
//!
//! A two-player connect-five game on a 15x15 grid: a human against a
//! single-ply greedy bot. The bot checks for an immediate winning move,
//! then weighs blocking the opponent's win against pattern-based positional
//! scores. No lookahead, by design.
//!
//! # Architecture
//!
//! - [`board`]: grid, stones, and positions
//! - [`rules`]: win and draw detection
//! - [`eval`]: pattern scores and the position evaluator
//! - [`movegen`]: candidate move generation near occupied cells
//! - [`engine`]: the decision engine picking the bot's move
//! - [`game`]: the turn state machine and the front-end facing API
//!
//! # Quick Start
//!
//! ```
//! use caro::{Game, Phase, Seat};
//!
//! let mut game = Game::new(Seat::Human);
//!
//! game.apply_human_move(7, 7).expect("center is empty");
//! assert_eq!(game.phase(), Phase::BotTurn);
//!
//! let reply = game.apply_bot_move().expect("bot finds a move");
//! assert!(reply.placed.is_some());
//! assert_eq!(game.phase(), Phase::HumanTurn);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use engine::{Engine, MoveKind, MoveResult};
pub use game::{Game, GameError, GameOutcome, MoveOutcome, Phase, Seat};
