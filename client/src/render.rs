use common::games::tictactoe::{BOARD_SIDE, BOT_MARK, GameMode, Mark, Outcome, TicTacToeGameState, TicTacToeSession};

/// Empty cells show their index so the player knows what to type.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let winning_line = state.winning_line();
    let rows: Vec<String> = state
        .board()
        .cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, &mark)| {
                    let index = row * BOARD_SIDE + column;
                    match mark {
                        Mark::Empty => format!(" {} ", index),
                        _ if winning_line.is_some_and(|line| line.contains(index)) => {
                            format!("[{}]", mark)
                        }
                        _ => format!(" {} ", mark),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn status_line(session: &TicTacToeSession) -> String {
    let state = session.game_state();
    match state.outcome() {
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::XWon => winner_line(session, Mark::X),
        Outcome::OWon => winner_line(session, Mark::O),
        Outcome::InProgress if session.is_bot_turn() => {
            format!("Next move: {} (bot is thinking...)", state.current_mark())
        }
        Outcome::InProgress => format!("Next move: {}", state.current_mark()),
    }
}

fn winner_line(session: &TicTacToeSession, mark: Mark) -> String {
    if session.settings().mode == GameMode::VsBot && mark == BOT_MARK {
        format!("Player {} wins! The bot got you this time.", mark)
    } else {
        format!("Player {} wins!", mark)
    }
}
