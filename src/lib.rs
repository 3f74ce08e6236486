//! Gobang move suggestion engine
//!
//! Suggests the next move for a game of Gobang (five-in-a-row on a 15x15
//! board) from the ordered list of stones played so far:
//! - Black plays first; even history entries are Black, odd ones White
//! - Five or more in a row wins
//!
//! # Architecture
//!
//! - [`board`]: Board materialized from a placement history
//! - [`eval`]: Line scanning and the line-shape score table
//! - [`engine`]: Move selection over all empty cells
//! - [`rules`]: Five-in-a-row detection
//! - [`ui`]: egui front-end that keeps the history and plays the suggestions
//!
//! # Quick Start
//!
//! ```
//! use gobang::{suggest, EngineError, Pos};
//!
//! // Black opened in the center; suggest White's reply
//! let mut history = vec![Pos::new(7, 7)];
//! let reply = suggest(&history)?;
//! history.push(reply);
//! println!("White plays at ({}, {})", reply.x, reply.y);
//! # Ok::<(), EngineError>(())
//! ```
//!
//! # Evaluation
//!
//! Each empty cell is scored by the lines a stone of either color would form
//! there, so building one's own line and blocking the opponent's are weighed
//! alike. The earliest cell in row-major order wins ties.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{materialize, Board, Pos, Stone, BOARD_SIZE};
pub use engine::{suggest, suggest_with_stats, MoveResult};
pub use error::EngineError;
