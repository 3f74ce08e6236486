//! Game rules for Gobang
//!
//! Free-style rules: any five or more in a row wins, and any empty cell may be
//! played.

pub mod win;

pub use win::{check_winner, find_five, is_valid_move};
