use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use gobang::ui::{GameMode, Settings};
use gobang::Stone;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "gobang")]
#[command(version = "0.1.0")]
#[command(about = "Gobang (five-in-a-row) against a pattern-scoring engine")]
pub struct Args {
    /// Play against the engine or hotseat with hints
    #[arg(short, long, value_enum, default_value_t = Mode::Pve)]
    pub mode: Mode,

    /// Color played by the human in PvE
    #[arg(long, value_enum, default_value_t = Color::Black)]
    pub human: Color,

    /// Pause before the engine's move is played, in milliseconds
    #[arg(short, long, default_value_t = 300)]
    pub think_ms: u64,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Write the log to this file instead of the terminal
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Pve,
    Pvp,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Args {
    pub fn settings(&self) -> Settings {
        let human_color = match self.human {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        };
        let mode = match self.mode {
            Mode::Pve => GameMode::PvE { human_color },
            Mode::Pvp => GameMode::PvP,
        };

        Settings {
            mode,
            think_delay: Duration::from_millis(self.think_ms),
        }
    }
}
