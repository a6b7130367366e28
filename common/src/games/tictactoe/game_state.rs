use super::board::Board;
use super::types::{Mark, MoveError, Outcome, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// Board plus the explicit turn flag. The outcome is always recomputed from
/// the board, so it cannot drift from the cells.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_mark(&mut self, index: usize) -> Result<Outcome, MoveError> {
        self.board = self.board.apply_move(index, self.current_mark)?;
        self.last_move = Some(index);

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.switch_turn();
        }
        Ok(outcome)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}
