//! Benchmarks for move generation, attack detection and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_pawns::board::{choose_move, Board, Color, SearchParams, SearchState, Square};

const POSITIONS: [(&str, &str); 3] = [
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
    (
        "middlegame",
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
    ),
    ("endgame", "8/5k2/8/8/8/8/5K2/4R3"),
];

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in POSITIONS {
        let mut board = Board::from_fen(fen);
        group.bench_function(BenchmarkId::new("legal", name), |b| {
            b.iter(|| black_box(board.legal_moves(Color::White)))
        });
        group.bench_function(BenchmarkId::new("pseudo", name), |b| {
            b.iter(|| black_box(board.pseudo_moves(Color::White)))
        });
    }

    group.finish();
}

fn bench_attacks(c: &mut Criterion) {
    let mut group = c.benchmark_group("attacks");

    for (name, fen) in POSITIONS {
        let board = Board::from_fen(fen);
        group.bench_function(BenchmarkId::new("all_squares", name), |b| {
            b.iter(|| {
                Square::all()
                    .filter(|&sq| board.is_attacked(black_box(sq), Color::White))
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [2, 3] {
        for (name, fen) in POSITIONS {
            let board = Board::from_fen(fen);
            let params = SearchParams::fixed_depth(depth).with_seed(1);
            group.bench_with_input(BenchmarkId::new(name, depth), &depth, |b, _| {
                b.iter(|| {
                    let mut state = SearchState::new(params.seed);
                    choose_move(&board, Color::White, &mut state, &params)
                })
            });
        }
    }

    let board = Board::from_fen(POSITIONS[1].1);
    let params = SearchParams::fixed_depth(3).with_seed(1).with_threads(4);
    group.bench_function("middlegame_threads4", |b| {
        b.iter(|| {
            let mut state = SearchState::new(params.seed);
            choose_move(&board, Color::White, &mut state, &params)
        })
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    for (name, fen) in POSITIONS {
        let board = Board::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate(Color::White)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_movegen,
    bench_attacks,
    bench_search,
    bench_eval
);
criterion_main!(benches);
