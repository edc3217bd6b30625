//! Candidate move generation
//!
//! The bot only considers empty cells near the action: everything within
//! Chebyshev distance 2 of an occupied cell. On an empty board the single
//! candidate is the center. Oversized candidate sets are down-sampled to
//! bound the scoring loop; the shuffle uses a caller-supplied RNG so a
//! seeded generator makes the selection reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, BOARD_SIZE};

/// Neighborhood radius around occupied cells (Chebyshev distance).
pub const NEIGHBOR_RADIUS: i32 = 2;

/// Upper bound on the candidate set handed to the scoring loop.
pub const MAX_CANDIDATES: usize = 80;

/// Collect candidate moves for the current position.
///
/// Occupied cells are scanned in row-major order and a 5x5 window is
/// expanded around each; empty cells are collected once, in discovery
/// order. Returns exactly `[center]` on an empty board and an empty vector
/// on a full one. More than [`MAX_CANDIDATES`] cells are shuffled with
/// `rng` and truncated.
#[must_use]
pub fn candidate_moves<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let mut moves = Vec::with_capacity(64);
    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];

    for pos in board.occupied() {
        for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                let Some(p) = Pos::try_new(i32::from(pos.row) + dr, i32::from(pos.col) + dc)
                else {
                    continue;
                };

                if seen[p.row as usize][p.col as usize] {
                    continue;
                }
                seen[p.row as usize][p.col as usize] = true;

                if board.is_empty(p) {
                    moves.push(p);
                }
            }
        }
    }

    if moves.len() > MAX_CANDIDATES {
        moves.shuffle(rng);
        moves.truncate(MAX_CANDIDATES);
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Stone, TOTAL_CELLS};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0)
    }

    #[test]
    fn test_empty_board_yields_center() {
        let board = Board::new();
        assert_eq!(candidate_moves(&board, &mut rng()), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn test_candidates_never_occupied() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);
        board.place_stone(Pos::new(8, 7), Stone::Black);

        for pos in candidate_moves(&board, &mut rng()) {
            assert!(board.is_empty(pos), "candidate {:?} is occupied", pos);
        }
    }

    #[test]
    fn test_candidates_within_radius() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let moves = candidate_moves(&board, &mut rng());
        // 5x5 window minus the occupied center
        assert_eq!(moves.len(), 24);
        for pos in moves {
            let dr = (i32::from(pos.row) - 7).abs();
            let dc = (i32::from(pos.col) - 7).abs();
            assert!(dr.max(dc) <= NEIGHBOR_RADIUS, "{:?} outside the window", pos);
        }
    }

    #[test]
    fn test_no_duplicates() {
        let mut board = Board::new();
        // Overlapping windows
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);
        board.place_stone(Pos::new(8, 8), Stone::Black);

        let moves = candidate_moves(&board, &mut rng());
        let mut deduped = moves.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(moves.len(), deduped.len());
    }

    #[test]
    fn test_corner_stone_clips_window() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::Black);

        let moves = candidate_moves(&board, &mut rng());
        // 3x3 of the window lies on the board, minus the stone itself
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_discovery_order_row_major() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let moves = candidate_moves(&board, &mut rng());
        // First discovered cell is the window's top-left corner
        assert_eq!(moves[0], Pos::new(5, 5));
        assert_eq!(moves[moves.len() - 1], Pos::new(9, 9));
    }

    #[test]
    fn test_downsample_caps_at_limit() {
        let mut board = Board::new();
        // Stones spaced 5 apart tile the board with disjoint 5x5 windows:
        // 225 cells - 9 stones = 216 empty candidates, well over the cap.
        for r in [2u8, 7, 12] {
            for c in [2u8, 7, 12] {
                board.place_stone(Pos::new(r, c), Stone::Black);
            }
        }

        let moves = candidate_moves(&board, &mut rng());
        assert_eq!(moves.len(), MAX_CANDIDATES);
    }

    #[test]
    fn test_downsample_deterministic_with_seed() {
        let mut board = Board::new();
        for r in [2u8, 7, 12] {
            for c in [2u8, 7, 12] {
                board.place_stone(Pos::new(r, c), Stone::White);
            }
        }

        let a = candidate_moves(&board, &mut Pcg32::seed_from_u64(42));
        let b = candidate_moves(&board, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_board_yields_nothing() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            let stone = if idx % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(Pos::from_index(idx), stone);
        }
        assert!(candidate_moves(&board, &mut rng()).is_empty());
    }
}
