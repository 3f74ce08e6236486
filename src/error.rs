//! Error conditions reported by the suggestion engine

use crate::board::BOARD_SIZE;

/// Errors that can occur while materializing a history or picking a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A history entry lies outside the board.
    #[error("move #{index} at ({x}, {y}) is outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfRange { index: usize, x: u8, y: u8 },

    /// Every cell is occupied.
    #[error("no empty cell left to suggest")]
    NoCandidate,
}
