use common::games::tictactoe::{CELL_COUNT, Difficulty, GameMode};

pub const HELP_TEXT: &str = "\
Commands:
  0-8                      place your mark (cells are numbered row by row)
  reset                    start a new game
  mode human|bot           play against a friend or against the bot
  difficulty random|optimal  choose the bot strength (easy/hard also work)
  help                     show this text
  quit                     leave the game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Place(usize),
    Reset,
    Mode(GameMode),
    Difficulty(Difficulty),
    Help,
    Quit,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err("Empty command, type 'help' for a list of commands".to_string());
        };
        let argument = words.next();
        if words.next().is_some() {
            return Err(format!("Too many arguments in '{}'", line.trim()));
        }

        match (head.to_ascii_lowercase().as_str(), argument) {
            ("reset" | "r" | "new", None) => Ok(ConsoleCommand::Reset),
            ("help" | "h" | "?", None) => Ok(ConsoleCommand::Help),
            ("quit" | "q" | "exit", None) => Ok(ConsoleCommand::Quit),
            ("mode", Some(mode)) => mode.parse().map(ConsoleCommand::Mode),
            ("difficulty" | "level", Some(level)) => level.parse().map(ConsoleCommand::Difficulty),
            (cell, None) if cell.chars().all(|c| c.is_ascii_digit()) => {
                match cell.parse::<usize>() {
                    Ok(index) if index < CELL_COUNT => Ok(ConsoleCommand::Place(index)),
                    _ => Err(format!("Cell must be between 0 and {}", CELL_COUNT - 1)),
                }
            }
            _ => Err(format!("Unknown command '{}', type 'help' for a list of commands", line.trim())),
        }
    }
}
