//! Coverage counter benchmarks
//!
//! Compares the three counting strategies on the same merged segment sets,
//! plus the full pipeline on the loop-heavy maximum-size input.
//!
//! Run: cargo bench -p gridwalk-core --bench strategies

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use gridwalk_core::{
    compute_coverage, merge_segments, trace_path, Direction, Move, Point, Strategy,
};

/// Deterministic pseudo-random walk of `len` moves with up to `max_steps` each.
fn gen_walk(len: usize, max_steps: i64, seed: u64) -> Vec<Move> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let direction = Direction::ALL[(state >> 62) as usize];
            let steps = ((state >> 20) % max_steps as u64) as i64;
            Move::new(direction, steps).expect("non-negative steps")
        })
        .collect()
}

/// Square loops drifting by one each lap; every lap adds new crossings.
fn gen_drifting_loops(laps: usize, side: i64) -> Vec<Move> {
    let block = [
        (Direction::East, side),
        (Direction::North, side),
        (Direction::West, side - 1),
        (Direction::South, side - 1),
    ];
    block
        .iter()
        .cycle()
        .take(laps * 4)
        .map(|&(d, s)| Move::new(d, s).expect("non-negative steps"))
        .collect()
}

fn bench_counters(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter");

    for &moves_len in &[100usize, 1_000, 4_000] {
        let moves = gen_walk(moves_len, 500, 42);
        let trace = trace_path(Point::new(0, 0), &moves).expect("bounded walk");
        let horizontal = merge_segments(trace.horizontal);
        let vertical = merge_segments(trace.vertical);

        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), moves_len),
                &(&horizontal, &vertical),
                |b, (h, v)| b.iter(|| strategy.counter().count(h, v)),
            );
        }
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    let moves = gen_drifting_loops(2_500, 99_999);
    group.bench_function("drifting_loops_10k", |b| {
        b.iter(|| {
            compute_coverage(
                Point::new(-100_000, -100_000),
                &moves,
                Strategy::BinarySearch.counter(),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_counters, bench_pipeline);
criterion_main!(benches);
