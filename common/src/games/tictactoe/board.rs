use super::types::{Mark, MoveError, Outcome};
use super::win_detector::evaluate;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// A 3x3 board stored row-major. Cells are write-once: `apply_move` never
/// overwrites a filled cell and returns a new board instead of mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// X moves first, so X is to move whenever both marks are equally represented.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(self)
    }

    pub fn apply_move(&self, index: usize, mark: Mark) -> Result<Board, MoveError> {
        if mark == Mark::Empty {
            return Err(MoveError::EmptyMark);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }
        if self.cells[index] != Mark::Empty {
            return Err(MoveError::CellOccupied(index));
        }
        if evaluate(self).is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut next = *self;
        next.cells[index] = mark;
        Ok(next)
    }

    // Scratch-board access for search; callers restore what they fill.
    pub(super) fn fill(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(super) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut cells = [Mark::Empty; CELL_COUNT];
    let marks = layout.chars().filter(|c| !c.is_whitespace());
    for (index, c) in marks.enumerate() {
        cells[index] = match c {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        };
    }
    Board::from_cells(cells)
}
