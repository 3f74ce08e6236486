//! Win condition checking
//!
//! A game is won by five or more stones of one color in a row. Overlines count.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Find a five-in-a-row through `pos`.
///
/// Returns five consecutive positions of the line, starting from its first
/// stone, or `None` if the stone at `pos` is not part of one.
pub fn find_five(board: &Board, pos: Pos) -> Option<[Pos; 5]> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for dir in DIRECTIONS {
        let (dx, dy) = dir.step();

        // Back up to the first stone of the run
        let mut start = pos;
        while let Some(prev) = start.offset(dx, dy, -1) {
            if board.get(prev) != color {
                break;
            }
            start = prev;
        }

        let line: Vec<Pos> = (0..5)
            .map_while(|i| start.offset(dx, dy, i))
            .take_while(|&p| board.get(p) == color)
            .collect();

        if line.len() == 5 {
            return Some([line[0], line[1], line[2], line[3], line[4]]);
        }
    }

    None
}

/// Check whether the stone just placed at `last_move` wins the game.
///
/// Returns the winning color, `None` otherwise.
pub fn check_winner(board: &Board, last_move: Pos) -> Option<Stone> {
    find_five(board, last_move).map(|_| board.get(last_move))
}

/// Check if `pos` can be played on `board`
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    pos.is_on_board() && board.is_empty(pos)
}
