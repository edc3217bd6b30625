//! Game rules: win and draw detection
//!
//! Connect-five rules: the first side to align 5 or more stones along any
//! of the 4 axes wins; a full board with no winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_at, has_five_at, DIRECTIONS};
