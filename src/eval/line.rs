//! Line scanning around a candidate cell

use crate::board::{Board, Direction, Pos, Stone};

/// Shape of the run through a candidate cell in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Stones in the run, including the hypothetical one at the origin
    pub count: u8,
    /// Ends capped by a stone or the board edge (0-2)
    pub blocked_ends: u8,
}

/// Scan the run of `color` through `origin` along `direction`.
///
/// The origin is treated as holding a `color` stone whatever it actually
/// contains. An end is capped when the first cell past the run is occupied or
/// lies off the board.
#[must_use]
pub fn scan(board: &Board, origin: Pos, color: Stone, direction: Direction) -> LineScan {
    let (dx, dy) = direction.step();
    let (near_run, near_blocked) = walk(board, origin, color, -dx, -dy);
    let (far_run, far_blocked) = walk(board, origin, color, dx, dy);

    LineScan {
        count: 1 + near_run + far_run,
        blocked_ends: near_blocked as u8 + far_blocked as u8,
    }
}

/// Count `color` stones stepping away from `origin`, and report whether the
/// cell that ended the run caps it.
#[inline]
fn walk(board: &Board, origin: Pos, color: Stone, dx: i32, dy: i32) -> (u8, bool) {
    let mut run = 0u8;
    let mut x = origin.x as i32 + dx;
    let mut y = origin.y as i32 + dy;

    loop {
        match board.get_checked(x, y) {
            Some(stone) if stone == color => {
                run += 1;
                x += dx;
                y += dy;
            }
            Some(Stone::Empty) => return (run, false),
            Some(_) | None => return (run, true),
        }
    }
}
