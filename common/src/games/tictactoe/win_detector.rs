use super::board::Board;
use super::types::{Mark, Outcome, WinningLine};

/// Rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

/// A completed triple wins even on a full board; only then is a full board a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(outcome) = check_win(board).and_then(Outcome::from_winner) {
        return outcome;
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::{CELL_COUNT, board_from_str};

    fn all_boards() -> impl Iterator<Item = Board> {
        (0..3usize.pow(CELL_COUNT as u32)).map(|mut code| {
            let mut cells = [Mark::Empty; CELL_COUNT];
            for cell in cells.iter_mut() {
                *cell = match code % 3 {
                    1 => Mark::X,
                    2 => Mark::O,
                    _ => Mark::Empty,
                };
                code /= 3;
            }
            Board::from_cells(cells)
        })
    }

    fn has_triple(board: &Board, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| board.cells()[i] == mark))
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
        assert_eq!(check_win_with_line(&Board::new()), None);
    }

    #[test]
    fn test_each_line_wins() {
        for line in LINES {
            let mut cells = [Mark::Empty; CELL_COUNT];
            for i in line {
                cells[i] = Mark::O;
            }
            let board = Board::from_cells(cells);
            assert_eq!(evaluate(&board), Outcome::OWon);
            assert_eq!(check_win_with_line(&board), Some(WinningLine::new(Mark::O, line)));
        }
    }

    #[test]
    fn test_full_winning_board_is_win_not_draw() {
        let board = board_from_str("XOX OXO OOX");
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::XWon);
    }

    #[test]
    fn test_full_board_without_triple_is_draw() {
        let board = board_from_str("XOX XOO OXX");
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_all_full_boards_without_triple_are_draws() {
        for board in all_boards().filter(|b| b.is_full()) {
            if !has_triple(&board, Mark::X) && !has_triple(&board, Mark::O) {
                assert_eq!(evaluate(&board), Outcome::Draw, "{:?}", board);
            }
        }
    }

    #[test]
    fn test_all_boards_with_single_winner_report_it() {
        for board in all_boards() {
            let x = has_triple(&board, Mark::X);
            let o = has_triple(&board, Mark::O);
            match (x, o) {
                (true, false) => assert_eq!(evaluate(&board), Outcome::XWon, "{:?}", board),
                (false, true) => assert_eq!(evaluate(&board), Outcome::OWon, "{:?}", board),
                (false, false) if !board.is_full() => {
                    assert_eq!(evaluate(&board), Outcome::InProgress, "{:?}", board)
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_first_line_in_scan_order_is_reported() {
        let board = board_from_str("XXX X.. X..");
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.cells, [0, 1, 2]);
    }
}
