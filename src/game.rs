//! Turn and game-state management
//!
//! Drives the `human move -> bot move -> ... -> game over` cycle and guards
//! it: a move for the wrong phase or after game over is rejected with no
//! state change. The presentation layer decides *when* to call in (UX
//! delays, banners); the phase transition itself is immediate and
//! synchronous.

use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::engine::Engine;
use crate::rules::find_five_at;

/// Which side a stone belongs to. The human always plays Black ("X"),
/// the bot White ("O").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Bot,
}

impl Seat {
    #[inline]
    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Bot,
            Seat::Bot => Seat::Human,
        }
    }

    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Seat::Human => Stone::Black,
            Seat::Bot => Stone::White,
        }
    }
}

/// Current phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanTurn,
    BotTurn,
    Over(GameOutcome),
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win { seat: Seat, line: [Pos; 5] },
    Draw,
}

/// Errors for rejected move attempts. All are local and leave the game
/// untouched; the caller simply re-prompts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("cell is out of bounds")]
    OutOfBounds,

    /// The target cell is already occupied
    #[error("cell is already occupied")]
    Occupied,

    /// The game has concluded; reset to play again
    #[error("game is over")]
    GameOver,

    /// It is the other side's turn
    #[error("not this side's turn")]
    OutOfTurn,
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The cell that was filled. `None` only for the degenerate bot turn on
    /// an already-full board.
    pub placed: Option<Pos>,
    /// The winning run, if this move concluded the game
    pub win: Option<[Pos; 5]>,
    /// Whether this move filled the last cell without a winner
    pub draw: bool,
}

/// A single human-vs-bot game.
pub struct Game {
    board: Board,
    engine: Engine,
    phase: Phase,
    starter: Seat,
    last_move: Option<Pos>,
}

impl Game {
    /// Start a fresh game with the given side to move first.
    #[must_use]
    pub fn new(starter: Seat) -> Self {
        Self::with_engine(starter, Engine::new())
    }

    /// Start a fresh game with a specific engine (e.g. a seeded one).
    #[must_use]
    pub fn with_engine(starter: Seat, engine: Engine) -> Self {
        Self {
            board: Board::new(),
            engine,
            phase: Self::phase_for(starter),
            starter,
            last_move: None,
        }
    }

    fn phase_for(seat: Seat) -> Phase {
        match seat {
            Seat::Human => Phase::HumanTurn,
            Seat::Bot => Phase::BotTurn,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn starter(&self) -> Seat {
        self.starter
    }

    /// Whether the game has concluded.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    /// Apply the human's move at (row, col).
    ///
    /// Rejected without side effects when the game is over, it is not the
    /// human's turn, or the target cell is invalid.
    pub fn apply_human_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, GameError> {
        match self.phase {
            Phase::Over(_) => return Err(GameError::GameOver),
            Phase::BotTurn => return Err(GameError::OutOfTurn),
            Phase::HumanTurn => {}
        }

        let pos = Pos::try_new(row, col).ok_or(GameError::OutOfBounds)?;
        if !self.board.is_empty(pos) {
            return Err(GameError::Occupied);
        }

        Ok(self.commit(pos, Seat::Human))
    }

    /// Run the decision engine and commit the bot's move.
    pub fn apply_bot_move(&mut self) -> Result<MoveOutcome, GameError> {
        match self.phase {
            Phase::Over(_) => return Err(GameError::GameOver),
            Phase::HumanTurn => return Err(GameError::OutOfTurn),
            Phase::BotTurn => {}
        }

        let Some(pos) = self.engine.select_move(&self.board, Seat::Bot.stone()) else {
            // No candidates means a full board; conclude as a draw.
            self.phase = Phase::Over(GameOutcome::Draw);
            return Ok(MoveOutcome {
                placed: None,
                win: None,
                draw: true,
            });
        };

        Ok(self.commit(pos, Seat::Bot))
    }

    /// Place a stone for `seat`, run the win/draw checks, and advance the
    /// phase. The caller has already validated the cell.
    fn commit(&mut self, pos: Pos, seat: Seat) -> MoveOutcome {
        let stone = seat.stone();
        self.board.place_stone(pos, stone);
        self.last_move = Some(pos);
        debug!(?seat, row = pos.row, col = pos.col, "move committed");

        if let Some(line) = find_five_at(&self.board, pos, stone) {
            debug!(?seat, "five-in-a-row, game over");
            self.phase = Phase::Over(GameOutcome::Win { seat, line });
            return MoveOutcome {
                placed: Some(pos),
                win: Some(line),
                draw: false,
            };
        }

        if self.board.is_full() {
            debug!("board full, draw");
            self.phase = Phase::Over(GameOutcome::Draw);
            return MoveOutcome {
                placed: Some(pos),
                win: None,
                draw: true,
            };
        }

        self.phase = Self::phase_for(seat.other());
        MoveOutcome {
            placed: Some(pos),
            win: None,
            draw: false,
        }
    }

    /// Reset for a new game.
    ///
    /// Who starts alternates: the loser of the previous game starts the
    /// next one; after a draw, the previous non-starter starts. A mid-game
    /// reset keeps the current starter.
    pub fn reset(&mut self) {
        self.starter = match self.phase {
            Phase::Over(GameOutcome::Win { seat, .. }) => seat.other(),
            Phase::Over(GameOutcome::Draw) => self.starter.other(),
            _ => self.starter,
        };
        self.board = Board::new();
        self.phase = Self::phase_for(self.starter);
        self.last_move = None;
        debug!(starter = ?self.starter, "game reset");
    }
}
