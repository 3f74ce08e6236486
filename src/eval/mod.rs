//! Evaluation of candidate cells
//!
//! - [`line`]: run scanning in one direction
//! - [`patterns`]: line-shape score table
//! - [`heuristic`]: per-cell score over all directions and both colors

pub mod heuristic;
pub mod line;
pub mod patterns;

pub use heuristic::{color_score, position_score};
pub use line::{scan, LineScan};
pub use patterns::{line_score, PatternScore};
