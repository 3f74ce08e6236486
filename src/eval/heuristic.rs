//! Position scoring for candidate cells
//!
//! A candidate is scored by imagining a stone of each color on it and adding
//! up the line shapes it would form in all four directions. Both colors count
//! toward the same total, so a cell that extends one's own line and a cell
//! that cuts the opponent's line are rated the same way.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::line::scan;
use super::patterns::line_score;

/// Score of `pos` for a single color, summed over the four directions
#[must_use]
pub fn color_score(board: &Board, pos: Pos, color: Stone) -> u32 {
    DIRECTIONS
        .iter()
        .map(|&dir| line_score(scan(board, pos, color, dir)))
        .sum()
}

/// Score of an empty cell: Black's and White's line shapes through it, added.
#[must_use]
pub fn position_score(board: &Board, pos: Pos) -> u32 {
    color_score(board, pos, Stone::Black) + color_score(board, pos, Stone::White)
}
