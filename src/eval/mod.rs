//! Position evaluation and pattern scoring

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{line_score, PatternScore};
