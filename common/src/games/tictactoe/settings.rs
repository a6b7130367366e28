use std::time::Duration;

use crate::config::GameConfig;
use super::types::{Difficulty, GameMode};

pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub bot_delay: Duration,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::VsHuman,
            difficulty: Difficulty::Random,
            bot_delay: DEFAULT_BOT_DELAY,
        }
    }
}

impl From<&GameConfig> for TicTacToeSessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            mode: config.mode,
            difficulty: config.difficulty,
            bot_delay: Duration::from_millis(config.bot_delay_ms),
        }
    }
}
