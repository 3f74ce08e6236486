//! Game state management for the Gobang GUI
//!
//! The state owns the placement history. The board shown on screen is
//! rebuilt from it after every change, and the engine is always handed the
//! full history.

use crate::rules::{check_winner, find_five, is_valid_move};
use crate::{suggest_with_stats, Board, EngineError, MoveResult, Pos, Stone};
use log::{debug, info, warn};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE {
        human_color: Stone,
    },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::Black }
    }
}

/// Front-end settings, filled from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub mode: GameMode,
    /// Pause before the engine's move is played in PvE
    pub think_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            think_delay: Duration::from_millis(300),
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, EngineError>>,
        start_time: Instant,
    },
}

/// Game result. `winner` is `None` for a draw on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<Stone>,
    pub winning_line: Option<[Pos; 5]>,
}

/// Main game state
pub struct GameState {
    pub history: Vec<Pos>,
    pub board: Board,
    pub mode: GameMode,
    pub game_over: Option<GameResult>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    think_delay: Duration,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        info!("New game: {:?}", settings.mode);
        Self {
            history: Vec::new(),
            board: Board::new(),
            mode: settings.mode,
            game_over: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            think_delay: settings.think_delay,
        }
    }

    /// Start over with a different mode, keeping the other settings
    pub fn restart(&mut self, mode: GameMode) {
        *self = Self::new(Settings {
            mode,
            think_delay: self.think_delay,
        });
    }

    pub fn reset(&mut self) {
        self.restart(self.mode);
    }

    /// Color that places the next stone
    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.board.side_to_move()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone for the human player
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !is_valid_move(&self.board, pos) {
            return Err("Invalid move (occupied)".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let color = self.current_turn();
        self.history.push(pos);

        match Board::from_history(&self.history) {
            Ok(board) => self.board = board,
            Err(err) => {
                warn!("Rejected move {:?}: {}", pos, err);
                self.history.pop();
                self.message = Some(err.to_string());
                return;
            }
        }

        info!("Move #{}: {:?} plays ({}, {})", self.history.len(), color, pos.x, pos.y);
        self.suggested_move = None;
        self.message = None;

        if let Some(winner) = check_winner(&self.board, pos) {
            info!("{:?} wins with five in a row", winner);
            self.game_over = Some(GameResult {
                winner: Some(winner),
                winning_line: find_five(&self.board, pos),
            });
        } else if self.board.is_full() {
            info!("Board full, game drawn");
            self.game_over = Some(GameResult {
                winner: None,
                winning_line: None,
            });
        }
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let history = self.history.clone();
        let delay = self.think_delay;
        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(delay);
            let result = suggest_with_stats(&history);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;

        match result {
            Ok(move_result) => {
                debug!(
                    "AI picked ({}, {}) score={} candidates={} in {}us",
                    move_result.best_move.x,
                    move_result.best_move.y,
                    move_result.score,
                    move_result.candidates,
                    move_result.time_us
                );
                self.last_ai_result = Some(move_result);
                self.execute_move(move_result.best_move);
            }
            Err(EngineError::NoCandidate) => {
                info!("AI has no move left, game drawn");
                self.game_over = Some(GameResult {
                    winner: None,
                    winning_line: None,
                });
            }
            Err(err) => {
                warn!("AI failed: {}", err);
                self.message = Some(format!("AI could not find a move: {}", err));
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request a move suggestion for the side to move
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        match suggest_with_stats(&self.history) {
            Ok(result) => {
                debug!(
                    "Hint for {:?}: ({}, {}) score={}",
                    result.color, result.best_move.x, result.best_move.y, result.score
                );
                self.suggested_move = Some(result.best_move);
                self.last_ai_result = Some(result);
            }
            Err(err) => {
                warn!("No hint available: {}", err);
                self.message = Some(err.to_string());
            }
        }
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // For PvE, undo two moves (human + AI)
        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.history.len() >= 2 => 2,
            _ => 1,
        };

        let keep = self.history.len() - undo_count;
        self.history.truncate(keep);
        // A prefix of a valid history is always valid
        self.board = Board::from_history(&self.history).unwrap_or_default();
        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        debug!("Undo {} move(s), {} left", undo_count, keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> GameState {
        GameState::new(Settings {
            mode: GameMode::PvP,
            think_delay: Duration::ZERO,
        })
    }

    fn wait_for_ai(state: &mut GameState) {
        for _ in 0..500 {
            state.check_ai_result();
            if !state.is_ai_thinking() {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("AI did not answer in time");
    }

    #[test]
    fn test_place_stone_alternates_colors() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.try_place_stone(Pos::new(8, 8)).unwrap();

        assert_eq!(state.board.get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(state.board.get(Pos::new(8, 8)), Stone::White);
        assert_eq!(state.current_turn(), Stone::Black);
        assert_eq!(state.last_move(), Some(Pos::new(8, 8)));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(state.try_place_stone(Pos::new(7, 7)).is_err());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_five_ends_game() {
        let mut state = pvp();
        for i in 0..4u8 {
            state.try_place_stone(Pos::new(3 + i, 5)).unwrap();
            state.try_place_stone(Pos::new(3 + i, 9)).unwrap();
        }
        state.try_place_stone(Pos::new(7, 5)).unwrap();

        let result = state.game_over.expect("Black should have won");
        assert_eq!(result.winner, Some(Stone::Black));
        assert_eq!(result.winning_line.map(|line| line[0]), Some(Pos::new(3, 5)));
        assert_eq!(state.try_place_stone(Pos::new(0, 0)), Err("Game is over".to_string()));
    }

    #[test]
    fn test_hint_matches_engine() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.request_suggestion();

        assert_eq!(state.suggested_move, Some(Pos::new(6, 6)));
        assert_eq!(state.last_ai_result.map(|r| r.color), Some(Stone::White));

        // Playing clears the hint
        state.try_place_stone(Pos::new(6, 6)).unwrap();
        assert_eq!(state.suggested_move, None);
    }

    #[test]
    fn test_undo_pvp_single_move() {
        let mut state = pvp();
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.try_place_stone(Pos::new(8, 8)).unwrap();
        state.undo();

        assert_eq!(state.history, vec![Pos::new(7, 7)]);
        assert!(state.board.is_empty(Pos::new(8, 8)));
        assert_eq!(state.current_turn(), Stone::White);
    }

    #[test]
    fn test_pve_ai_replies() {
        let mut state = GameState::new(Settings {
            mode: GameMode::PvE { human_color: Stone::Black },
            think_delay: Duration::ZERO,
        });
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place_stone(Pos::new(0, 0)), Err("Not your turn".to_string()));

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        wait_for_ai(&mut state);

        assert_eq!(state.history, vec![Pos::new(7, 7), Pos::new(6, 6)]);
        assert!(state.is_human_turn());

        // Undo takes back both the reply and the human move
        state.undo();
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_pve_ai_opens_as_black() {
        let mut state = GameState::new(Settings {
            mode: GameMode::PvE { human_color: Stone::White },
            think_delay: Duration::ZERO,
        });
        assert!(state.is_ai_turn());
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.history, vec![Pos::new(0, 0)]);
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut state = GameState::new(Settings {
            mode: GameMode::PvE { human_color: Stone::White },
            think_delay: Duration::from_millis(10),
        });
        state.reset();
        assert_eq!(state.mode, GameMode::PvE { human_color: Stone::White });
        assert!(state.history.is_empty());

        state.restart(GameMode::PvP);
        assert_eq!(state.mode, GameMode::PvP);
    }
}
