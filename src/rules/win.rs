//! Win condition checking
//!
//! A move wins when it brings 5 or more consecutive same-color stones onto
//! one of the 4 axes through the played cell. Both checks here treat the
//! pivot cell as hypothetically occupied by the queried color: the walks
//! start one step out and never read the pivot, so the same functions serve
//! "would this move win?" (before placing) and "did this move win?" (after).

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Fast five-in-a-row check at a specific position. No allocation.
#[inline]
#[must_use]
pub fn has_five_at(board: &Board, pos: Pos, stone: Stone) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1; // The pivot itself

        for i in 1..WIN_LENGTH as i32 {
            match Pos::try_new(i32::from(pos.row) + dr * i, i32::from(pos.col) + dc * i) {
                Some(p) if board.get(p) == stone => count += 1,
                _ => break,
            }
        }
        for i in 1..WIN_LENGTH as i32 {
            match Pos::try_new(i32::from(pos.row) - dr * i, i32::from(pos.col) - dc * i) {
                Some(p) if board.get(p) == stone => count += 1,
                _ => break,
            }
        }

        if count >= WIN_LENGTH {
            return true;
        }
    }
    false
}

/// Find the winning run through `pos`, if one exists.
///
/// Collects the consecutive same-color run along each axis, ordered from the
/// negative end to the positive end with the pivot included. Overlines (runs
/// longer than 5) are truncated to the first 5 cells in that order.
#[must_use]
pub fn find_five_at(board: &Board, pos: Pos, stone: Stone) -> Option<[Pos; 5]> {
    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        for i in 1..WIN_LENGTH as i32 {
            match Pos::try_new(i32::from(pos.row) - dr * i, i32::from(pos.col) - dc * i) {
                Some(p) if board.get(p) == stone => line.insert(0, p),
                _ => break,
            }
        }

        // Extend in positive direction
        for i in 1..WIN_LENGTH as i32 {
            match Pos::try_new(i32::from(pos.row) + dr * i, i32::from(pos.col) + dc * i) {
                Some(p) if board.get(p) == stone => line.push(p),
                _ => break,
            }
        }

        if line.len() >= WIN_LENGTH {
            return Some([line[0], line[1], line[2], line[3], line[4]]);
        }
    }
    None
}
