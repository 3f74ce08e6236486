//! Move suggestion
//!
//! Every empty cell is scored with [`position_score`] and the best one is
//! returned. Cells are visited row-major (`x` outer, `y` inner) and only a
//! strictly higher score replaces the current best, so on ties the earliest
//! cell wins. There is no look-ahead.
//!
//! # Example
//!
//! ```
//! use gobang::{suggest, Pos};
//!
//! // Black has an open four on row 7; White to move
//! let history = [
//!     Pos::new(5, 7), Pos::new(0, 0),
//!     Pos::new(6, 7), Pos::new(14, 0),
//!     Pos::new(7, 7), Pos::new(0, 14),
//!     Pos::new(8, 7),
//! ];
//! assert_eq!(suggest(&history), Ok(Pos::new(4, 7)));
//! ```

use crate::board::{Board, Pos, Stone};
use crate::error::EngineError;
use crate::eval::position_score;
use std::time::Instant;

/// Result of a suggestion with the numbers behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Suggested cell
    pub best_move: Pos,
    /// Score of the suggested cell
    pub score: u32,
    /// Color that would play the suggestion
    pub color: Stone,
    /// Number of empty cells evaluated
    pub candidates: usize,
    /// Time taken in microseconds
    pub time_us: u64,
}

/// Suggest the next move for whichever side is to move in `history`.
///
/// # Errors
/// - [`EngineError::OutOfRange`] if a history entry is off the board
/// - [`EngineError::NoCandidate`] if the board is full
pub fn suggest(history: &[Pos]) -> Result<Pos, EngineError> {
    suggest_with_stats(history).map(|result| result.best_move)
}

/// Same as [`suggest`], also reporting score, candidate count and timing.
pub fn suggest_with_stats(history: &[Pos]) -> Result<MoveResult, EngineError> {
    let start = Instant::now();
    let board = Board::from_history(history)?;

    let (best_move, score, candidates) = select_move(&board)?;

    Ok(MoveResult {
        best_move,
        score,
        color: board.side_to_move(),
        candidates,
        time_us: start.elapsed().as_micros() as u64,
    })
}

/// Pick the highest-scoring empty cell of `board`.
///
/// Returns the cell, its score and how many cells were evaluated.
pub fn select_move(board: &Board) -> Result<(Pos, u32, usize), EngineError> {
    let mut best: Option<(Pos, u32)> = None;
    let mut candidates = 0;

    for pos in board.empty_cells() {
        candidates += 1;
        let score = position_score(board, pos);
        // Strict: ties keep the earlier cell
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, score)| (pos, score, candidates))
        .ok_or(EngineError::NoCandidate)
}
