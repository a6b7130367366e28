use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{Board, Difficulty, Mark, calculate_minimax_move, evaluate, select_move};

fn bench_minimax_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_empty_board_x", |b| {
        b.iter(|| calculate_minimax_move(black_box(&Board::new()), Mark::X));
    });
}

fn bench_minimax_after_opening(c: &mut Criterion) {
    c.bench_function("minimax_after_corner_opening_o", |b| {
        let board = Board::new().apply_move(0, Mark::X).unwrap();
        b.iter(|| calculate_minimax_move(black_box(&board), Mark::O));
    });
}

fn bench_full_optimal_game(c: &mut Criterion) {
    c.bench_function("minimax_full_self_play", |b| {
        let mut rng = SessionRng::new(0);
        b.iter(|| {
            let mut board = Board::new();
            let mut mark = Mark::X;
            while !evaluate(&board).is_terminal() {
                let Some(index) = select_move(&board, Difficulty::Optimal, mark, &mut rng) else {
                    break;
                };
                board = board.apply_move(index, mark).unwrap();
                mark = mark.opponent().unwrap();
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_minimax_empty_board,
    bench_minimax_after_opening,
    bench_full_optimal_game
);
criterion_main!(benches);
