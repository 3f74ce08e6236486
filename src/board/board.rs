//! Dense board built from a placement history

use super::{Pos, Stone, BOARD_SIZE};
use crate::error::EngineError;

/// Game board materialized from an ordered placement history.
///
/// The grid is indexed `cells[x][y]`. A board is never edited after it is
/// built; a new history produces a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Stone; BOARD_SIZE]; BOARD_SIZE],
    side_to_move: Stone,
    stones: usize,
}

/// Build a board from `history`. Even indices are Black, odd indices White.
///
/// Fails on the first entry that lies off the board.
pub fn materialize(history: &[Pos]) -> Result<Board, EngineError> {
    Board::from_history(history)
}

impl Board {
    /// Empty board with Black to move
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE],
            side_to_move: Stone::Black,
            stones: 0,
        }
    }

    pub fn from_history(history: &[Pos]) -> Result<Self, EngineError> {
        let mut board = Self::new();

        for (index, &pos) in history.iter().enumerate() {
            if !pos.is_on_board() {
                return Err(EngineError::OutOfRange {
                    index,
                    x: pos.x,
                    y: pos.y,
                });
            }

            let cell = &mut board.cells[pos.x as usize][pos.y as usize];
            // Duplicate entries overwrite; only count fresh cells
            if *cell == Stone::Empty {
                board.stones += 1;
            }
            *cell = Stone::for_move(index);
        }

        board.side_to_move = Stone::for_move(history.len());
        Ok(board)
    }

    /// Board with the given stones placed directly, for tests that don't care
    /// about move order
    #[cfg(test)]
    pub(crate) fn from_stones(black: &[Pos], white: &[Pos]) -> Self {
        let mut board = Self::new();
        for (stones, color) in [(black, Stone::Black), (white, Stone::White)] {
            for &pos in stones {
                board.cells[pos.x as usize][pos.y as usize] = color;
            }
        }
        board.stones = black.len() + white.len();
        board.side_to_move = if black.len() > white.len() {
            Stone::White
        } else {
            Stone::Black
        };
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position. `pos` must be on the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.x as usize][pos.y as usize]
    }

    /// Get stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_checked(&self, x: i32, y: i32) -> Option<Stone> {
        if Pos::is_valid(x, y) {
            Some(self.cells[x as usize][y as usize])
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Color that places the next stone
    #[inline]
    pub fn side_to_move(&self) -> Stone {
        self.side_to_move
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == BOARD_SIZE * BOARD_SIZE
    }

    /// Empty cells in row-major order (`x` outer, `y` inner)
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..BOARD_SIZE).flat_map(move |x| {
            (0..BOARD_SIZE)
                .filter(move |&y| self.cells[x][y] == Stone::Empty)
                .map(move |y| Pos::new(x as u8, y as u8))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
