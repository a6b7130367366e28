use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Classification of a board. Always derived from the cells, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    pub(crate) fn from_winner(mark: Mark) -> Option<Outcome> {
        match mark {
            Mark::X => Some(Outcome::XWon),
            Mark::O => Some(Outcome::OWon),
            Mark::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Random,
    Optimal,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "easy" | "facile" => Ok(Difficulty::Random),
            "optimal" | "hard" | "difficile" | "minimax" => Ok(Difficulty::Optimal),
            other => Err(format!("Unknown difficulty '{}', expected random or optimal", other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Random => write!(f, "random"),
            Difficulty::Optimal => write!(f, "optimal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    VsHuman,
    VsBot,
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vs-human" | "human" | "pvp" => Ok(GameMode::VsHuman),
            "vs-bot" | "bot" | "pve" => Ok(GameMode::VsBot),
            other => Err(format!("Unknown mode '{}', expected vs-human or vs-bot", other)),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::VsHuman => write!(f, "vs-human"),
            GameMode::VsBot => write!(f, "vs-bot"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds(usize),
    CellOccupied(usize),
    GameOver,
    EmptyMark,
    NotYourTurn,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds(index) => write!(f, "Cell {} is out of bounds", index),
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::EmptyMark => write!(f, "Cannot place an empty mark"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips_marks() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_difficulty_accepts_aliases() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Random));
        assert_eq!("Facile".parse::<Difficulty>(), Ok(Difficulty::Random));
        assert_eq!("difficile".parse::<Difficulty>(), Ok(Difficulty::Optimal));
        assert_eq!(" OPTIMAL ".parse::<Difficulty>(), Ok(Difficulty::Optimal));
        assert!("medium".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_mode_parses_display_form() {
        for mode in [GameMode::VsHuman, GameMode::VsBot] {
            assert_eq!(mode.to_string().parse::<GameMode>(), Ok(mode));
        }
        assert_eq!("bot".parse::<GameMode>(), Ok(GameMode::VsBot));
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::XWon.winner(), Some(Mark::X));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
    }
}
