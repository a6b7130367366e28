mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT, get_available_moves};
pub use bot_controller::{calculate_minimax_move, calculate_random_move, minimax, select_move};
pub use game_state::TicTacToeGameState;
pub use session::{BOT_MARK, BotMove, BotMoveError, BotMoveTicket, TicTacToeSession};
pub use settings::{DEFAULT_BOT_DELAY, TicTacToeSessionSettings};
pub use types::{Difficulty, GameMode, Mark, MoveError, Outcome, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line, evaluate};
