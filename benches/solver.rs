//! Benchmarks for the n-puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use npuzzle::{solver, Board, Solver};

/// Princeton's standard 8-puzzle example (manhattan 10).
fn sample_board() -> Board {
    Board::new(vec![vec![8, 1, 3], vec![4, 0, 2], vec![7, 6, 5]]).unwrap()
}

/// Benchmark a full A* solve of the sample 8-puzzle.
fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve_8_puzzle", |b| {
        b.iter(|| Solver::new(black_box(sample_board())))
    });
}

/// Benchmark the Manhattan-distance heuristic.
fn bench_manhattan(c: &mut Criterion) {
    let board = sample_board();
    c.bench_function("manhattan", |b| b.iter(|| black_box(&board).manhattan()));
}

/// Benchmark neighbor generation.
fn bench_neighbors(c: &mut Criterion) {
    let board = sample_board();
    c.bench_function("neighbors", |b| b.iter(|| black_box(&board).neighbors()));
}

/// Benchmark the parity-based solvability test.
fn bench_is_solvable(c: &mut Criterion) {
    let board = sample_board();
    c.bench_function("is_solvable", |b| {
        b.iter(|| solver::is_solvable(black_box(&board)))
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_manhattan,
    bench_neighbors,
    bench_is_solvable
);
criterion_main!(benches);
