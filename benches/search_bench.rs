use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictactoe_engine::agent::ai::minimax;
use tictactoe_engine::game_repr::{Board, Mark};

fn bench_search_empty_board(c: &mut Criterion) {
    let mut board = Board::new();
    c.bench_function("minimax empty board", |b| {
        b.iter(|| black_box(minimax(&mut board, 0, true, i32::MIN, i32::MAX)))
    });
}

fn bench_search_midgame(c: &mut Criterion) {
    let mut board = Board::new();
    board.apply_move(0, 0, Mark::X).unwrap();
    board.apply_move(1, 1, Mark::O).unwrap();
    board.apply_move(2, 2, Mark::X).unwrap();
    board.apply_move(0, 1, Mark::O).unwrap();
    c.bench_function("minimax midgame", |b| {
        b.iter(|| black_box(minimax(&mut board, 0, true, i32::MIN, i32::MAX)))
    });
}

criterion_group!(benches, bench_search_empty_board, bench_search_midgame);
criterion_main!(benches);
