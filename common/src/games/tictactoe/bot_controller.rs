use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::types::{Difficulty, Mark, Outcome};
use super::win_detector::{check_win, evaluate};

/// Picks the next cell for `mark_to_play`. Returns `None` when the board is
/// already decided or has no empty cell; the input board is never modified.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    mark_to_play: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Random => calculate_random_move(board, rng),
        Difficulty::Optimal => calculate_minimax_move(board, mark_to_play),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    if evaluate(board).is_terminal() {
        return None;
    }
    let available_moves = get_available_moves(board);
    rng.choose(&available_moves)
}

/// Exhaustive minimax scored from X's side: X win +1, O win -1, draw 0.
///
/// X keeps the highest child value and O the lowest. Among the best moves an
/// immediate win is taken first, otherwise the lowest index wins the tie.
pub fn calculate_minimax_move(board: &Board, mark_to_play: Mark) -> Option<usize> {
    let opponent_mark = mark_to_play.opponent()?;
    if evaluate(board).is_terminal() {
        return None;
    }

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }

    let mut scratch = *board;

    if let Some(index) = find_winning_move(&mut scratch, mark_to_play, &available_moves) {
        return Some(index);
    }

    let maximizing = mark_to_play == Mark::X;
    let mut best_move = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for &index in &available_moves {
        scratch.fill(index, mark_to_play);
        let score = minimax(&mut scratch, opponent_mark);
        scratch.clear(index);

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Value of `board` with `to_move` about to play.
pub fn minimax(board: &mut Board, to_move: Mark) -> i32 {
    match evaluate(board) {
        Outcome::XWon => return 1,
        Outcome::OWon => return -1,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let Some(next) = to_move.opponent() else {
        return 0;
    };

    let moves = get_available_moves(board);
    let maximizing = to_move == Mark::X;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in moves {
        board.fill(index, to_move);
        let score = minimax(board, next);
        board.clear(index);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board.fill(index, mark);
        let winner = check_win(board);
        board.clear(index);

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}
