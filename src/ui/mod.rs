//! GUI module for the Gobang game
//!
//! This module provides a native Rust GUI using egui/eframe. It plays the
//! engine's suggestions as the opposing side, or shows them as hints.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GobangApp;
pub use game_state::{GameMode, GameResult, GameState, Settings};
