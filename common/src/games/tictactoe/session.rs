use std::fmt;
use std::time::Duration;

use crate::games::SessionRng;
use crate::{debug_log, log};
use super::bot_controller::select_move;
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{Difficulty, GameMode, Mark, MoveError, Outcome};

/// The bot always answers the human, who opens with X.
pub const BOT_MARK: Mark = Mark::O;

/// A bot move scheduled for one specific position. Any reset, mode change or
/// applied move bumps the session epoch and turns the ticket stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMoveTicket {
    epoch: u64,
    delay: Duration,
}

impl BotMoveTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotMoveError {
    Stale,
    NoMove,
    Rejected(MoveError),
}

impl fmt::Display for BotMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotMoveError::Stale => write!(f, "Bot move was scheduled for an earlier position"),
            BotMoveError::NoMove => write!(f, "Bot has no move to play"),
            BotMoveError::Rejected(e) => write!(f, "Bot move rejected: {}", e),
        }
    }
}

impl std::error::Error for BotMoveError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub index: usize,
    pub outcome: Outcome,
}

pub struct TicTacToeSession {
    game_state: TicTacToeGameState,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
    epoch: u64,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Self {
        log!(
            "New session: mode={}, difficulty={}, seed={}",
            settings.mode,
            settings.difficulty,
            rng.seed()
        );
        Self {
            game_state: TicTacToeGameState::new(),
            settings,
            rng,
            epoch: 0,
        }
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn is_bot_turn(&self) -> bool {
        self.settings.mode == GameMode::VsBot
            && !self.game_state.is_over()
            && self.game_state.current_mark() == BOT_MARK
    }

    pub fn place_human_mark(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if self.is_bot_turn() {
            return Err(MoveError::NotYourTurn);
        }

        let mark = self.game_state.current_mark();
        match self.game_state.place_mark(index) {
            Ok(outcome) => {
                self.epoch += 1;
                debug_log!("{} placed at {} -> {:?}", mark, index, outcome);
                Ok(outcome)
            }
            Err(e) => {
                debug_log!("{} failed to place at {}: {}", mark, index, e);
                Err(e)
            }
        }
    }

    pub fn schedule_bot_move(&self) -> Option<BotMoveTicket> {
        if !self.is_bot_turn() {
            return None;
        }
        Some(BotMoveTicket {
            epoch: self.epoch,
            delay: self.settings.bot_delay,
        })
    }

    pub fn play_bot_move(&mut self, ticket: BotMoveTicket) -> Result<BotMove, BotMoveError> {
        if ticket.epoch != self.epoch || !self.is_bot_turn() {
            debug_log!("Dropping stale bot move (ticket {}, epoch {})", ticket.epoch, self.epoch);
            return Err(BotMoveError::Stale);
        }

        let difficulty = self.settings.difficulty;
        let index = select_move(self.game_state.board(), difficulty, BOT_MARK, &mut self.rng)
            .ok_or(BotMoveError::NoMove)?;
        let outcome = self
            .game_state
            .place_mark(index)
            .map_err(BotMoveError::Rejected)?;
        self.epoch += 1;

        debug_log!("Bot ({}) placed {} at {} -> {:?}", difficulty, BOT_MARK, index, outcome);
        Ok(BotMove { index, outcome })
    }

    pub fn reset(&mut self) {
        self.game_state.reset();
        self.epoch += 1;
        log!("Game reset");
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        if self.settings.mode != mode {
            self.settings.mode = mode;
            self.epoch += 1;
            log!("Mode changed to {}", mode);
        }
    }

    /// Takes effect for the next bot move, including one already scheduled.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        log!("Difficulty changed to {}", difficulty);
    }
}
