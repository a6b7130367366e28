use std::pin::Pin;

use common::games::tictactoe::{BotMoveError, BotMoveTicket, TicTacToeSession};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Sleep, sleep};

use crate::commands::{ConsoleCommand, HELP_TEXT};
use crate::render::{render_board, status_line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue { message: Option<String>, cancel_bot: bool },
    Quit,
}

impl Step {
    fn message(message: impl Into<String>) -> Self {
        Step::Continue {
            message: Some(message.into()),
            cancel_bot: false,
        }
    }

    fn cancel(message: impl Into<String>) -> Self {
        Step::Continue {
            message: Some(message.into()),
            cancel_bot: true,
        }
    }
}

pub fn handle_command(session: &mut TicTacToeSession, command: ConsoleCommand) -> Step {
    match command {
        ConsoleCommand::Place(index) => match session.place_human_mark(index) {
            Ok(_) => Step::Continue {
                message: None,
                cancel_bot: false,
            },
            Err(e) => Step::message(e.to_string()),
        },
        ConsoleCommand::Reset => {
            session.reset();
            Step::cancel("New game")
        }
        ConsoleCommand::Mode(mode) => {
            session.set_mode(mode);
            Step::cancel(format!("Mode: {}", mode))
        }
        ConsoleCommand::Difficulty(difficulty) => {
            session.set_difficulty(difficulty);
            Step::message(format!("Difficulty: {}", difficulty))
        }
        ConsoleCommand::Help => Step::message(HELP_TEXT),
        ConsoleCommand::Quit => Step::Quit,
    }
}

struct PendingBotMove {
    ticket: BotMoveTicket,
    timer: Pin<Box<Sleep>>,
}

async fn wait_for_bot(pending: &mut Option<PendingBotMove>) -> BotMoveTicket {
    match pending {
        Some(pending) => {
            pending.timer.as_mut().await;
            pending.ticket
        }
        None => std::future::pending().await,
    }
}

fn print_state(session: &TicTacToeSession) {
    println!("\n{}\n{}", render_board(session.game_state()), status_line(session));
}

/// Reads commands from stdin until `quit` or end of input. At most one bot
/// move is pending at a time and it is dropped on reset or mode change.
pub async fn run_console(mut session: TicTacToeSession) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<PendingBotMove> = None;

    println!("{}", HELP_TEXT);
    print_state(&session);

    loop {
        if pending.is_none() {
            pending = session.schedule_bot_move().map(|ticket| PendingBotMove {
                ticket,
                timer: Box::pin(sleep(ticket.delay())),
            });
        }

        tokio::select! {
            ticket = wait_for_bot(&mut pending) => {
                pending = None;
                match session.play_bot_move(ticket) {
                    Ok(bot_move) => {
                        println!("Bot plays {}", bot_move.index);
                        print_state(&session);
                    }
                    Err(BotMoveError::Stale) => {}
                    Err(e) => log!("Bot move failed: {}", e),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let command = match ConsoleCommand::parse(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                match handle_command(&mut session, command) {
                    Step::Quit => break,
                    Step::Continue { message, cancel_bot } => {
                        if cancel_bot {
                            pending = None;
                        }
                        if let Some(message) = message {
                            println!("{}", message);
                        }
                        if command != ConsoleCommand::Help {
                            print_state(&session);
                        }
                    }
                }
            }
        }
    }

    log!("Console closed");
    Ok(())
}
