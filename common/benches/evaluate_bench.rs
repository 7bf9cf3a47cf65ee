use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    Board, GameMode, Mark, Position, Ruleset, TicTacToeGameState, evaluate,
};

fn create_mid_game_board() -> Board {
    let mut board = Board::empty(10, 10);
    let moves = [
        (4, 4, Mark::X), (4, 5, Mark::O), (5, 4, Mark::X), (5, 5, Mark::O),
        (3, 3, Mark::X), (6, 6, Mark::O), (2, 2, Mark::X), (7, 7, Mark::O),
        (3, 5, Mark::X), (5, 3, Mark::O), (4, 6, Mark::X), (6, 4, Mark::O),
    ];
    for (row, col, mark) in moves {
        if let Some(next) = board.with_mark(Position::new(row, col), mark) {
            board = next;
        }
    }
    board
}

fn bench_random_game_10x10() {
    let ruleset = Ruleset::new(10, 10, 5, Mark::X);
    let Ok(mut game) = TicTacToeGameState::new(ruleset, GameMode::ComputerVsComputer) else {
        return;
    };
    let mut rng = SessionRng::new(42);
    while !game.is_over() && game.play_computer_turn(&mut rng).is_some() {}
}

fn evaluate_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let empty = Board::empty(10, 10);
    group.bench_function("empty_10x10", |b| {
        b.iter(|| evaluate(black_box(&empty), 5, Some(Mark::X)))
    });

    let mid_game = create_mid_game_board();
    group.bench_function("mid_game_10x10", |b| {
        b.iter(|| evaluate(black_box(&mid_game), 5, Some(Mark::X)))
    });

    group.bench_function("random_game_10x10", |b| {
        b.iter(bench_random_game_10x10)
    });

    group.finish();
}

criterion_group!(benches, evaluate_bench);
criterion_main!(benches);
