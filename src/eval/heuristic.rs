//! Heuristic evaluation of candidate cells
//!
//! Scores the strategic value of placing a given color at a given empty
//! cell: for each of the 4 axes through the cell, count the consecutive
//! same-color stones reachable from it and how many of the two walk
//! directions end on an empty cell, then sum the pattern contributions.
//!
//! The cell is treated as hypothetically occupied for the duration of the
//! call; the walks start one step out and never read the cell itself, so
//! the function is pure and the caller never has to place-and-revert.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};
use crate::rules::DIRECTIONS;

use super::patterns::line_score;

/// Evaluate the positional value of `stone` played at `pos`.
///
/// Purely positional pattern strength, independent of whose turn it is;
/// win/loss detection is the job of [`crate::rules::win`]. Deterministic:
/// the same board, cell, and color always produce the same score.
#[must_use]
pub fn evaluate(board: &Board, pos: Pos, stone: Stone) -> i32 {
    let mut score = 0;

    for &(dr, dc) in &DIRECTIONS {
        let mut count = 0u32;
        let mut open_ends = 0u32;

        // A run of five needs at most 4 neighbors beyond the pivot, so each
        // sense walks at most 4 steps.
        for sense in [1, -1] {
            for i in 1..WIN_LENGTH as i32 {
                let r = i32::from(pos.row) + dr * i * sense;
                let c = i32::from(pos.col) + dc * i * sense;
                match Pos::try_new(r, c) {
                    Some(p) if board.get(p) == stone => count += 1,
                    Some(p) if board.get(p) == Stone::Empty => {
                        open_ends += 1;
                        break;
                    }
                    _ => break, // opponent stone or board edge
                }
            }
        }

        score += line_score(count, open_ends);
    }

    score
}
