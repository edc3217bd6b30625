//! Pattern scores for position evaluation
//!
//! These constants define the scoring weights for line patterns around a
//! candidate cell. `count` is the number of matched neighbor stones along an
//! axis (the candidate cell itself is excluded), `open_ends` how many of the
//! two walk directions ended on an empty cell.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Four neighbors on one axis: the candidate completes five-in-a-row
    pub const FOUR: i32 = 10_000;
    /// Open three: both ends free, one move from an open four
    pub const OPEN_THREE: i32 = 500;
    /// Closed three: one end blocked by a stone or the edge
    pub const CLOSED_THREE: i32 = 100;
    /// Open two: room to grow on both sides
    pub const OPEN_TWO: i32 = 50;
    /// Closed two: one side blocked
    pub const CLOSED_TWO: i32 = 10;
    /// Lone adjacent stone with both ends free
    pub const OPEN_ONE: i32 = Self::CLOSED_TWO / 2;
}

/// Map a line's neighbor count and open-end count to a score contribution.
///
/// Patterns with no room to reach five (three or fewer neighbors and no open
/// end) score zero.
#[inline]
#[must_use]
pub fn line_score(count: u32, open_ends: u32) -> i32 {
    match (count, open_ends) {
        (4.., _) => PatternScore::FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 2) => PatternScore::OPEN_ONE,
        _ => 0,
    }
}
