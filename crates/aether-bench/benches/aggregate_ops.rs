//! Criterion micro-benchmarks for aggregates over dense grids and views.

use std::hint::black_box;

use aether_bench::reference_grid;
use aether_grid::RegionExt;
use aether_model::{Aggregate, DenseGrid};

use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: total of the reference grid (~59K cells).
fn bench_total_dense_59k(c: &mut Criterion) {
    let grid = reference_grid(42).unwrap();

    c.bench_function("total_dense_59k", |b| {
        b.iter(|| black_box(grid.total()));
    });
}

/// Benchmark: extrema by parity over the reference grid.
fn bench_min_max_parity_59k(c: &mut Criterion) {
    let grid = reference_grid(42).unwrap();

    c.bench_function("min_max_parity_59k", |b| {
        b.iter(|| {
            black_box(grid.min_and_max_at_parity(true));
            black_box(grid.min_and_max_at_parity(false));
        });
    });
}

/// Benchmark: extrema over a clipped cross-section of the reference grid.
fn bench_min_max_cross_section(c: &mut Criterion) {
    let grid = reference_grid(42).unwrap();
    let view = (&grid).cross_section(2, 0).unwrap();

    c.bench_function("min_max_cross_section_6k", |b| {
        b.iter(|| black_box(view.min_and_max()));
    });
}

/// Benchmark: capture a clipped view of the reference grid into a new
/// dense grid.
fn bench_capture_clipped(c: &mut Criterion) {
    let grid = reference_grid(42).unwrap();
    let clipped = (&grid).subsection_5d([Some(0); 5], [Some(4); 5]).unwrap();

    c.bench_function("capture_clipped_3k", |b| {
        b.iter(|| {
            let captured: DenseGrid<i64> = DenseGrid::capture(&clipped).unwrap();
            black_box(captured.len());
        });
    });
}

criterion_group!(
    benches,
    bench_total_dense_59k,
    bench_min_max_parity_59k,
    bench_min_max_cross_section,
    bench_capture_clipped
);
criterion_main!(benches);
