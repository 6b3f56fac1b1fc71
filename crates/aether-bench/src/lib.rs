//! Benchmark profiles and utilities for Aether regions and views.
//!
//! Provides pre-built regions and value grids for benchmarking:
//!
//! - [`reference_wedge`]: 5D wedge of size 16 (~20K cells)
//! - [`reference_grid`]: 5D dense grid of 9^5 (~59K) hashed values
//! - [`partial_coords`]: deterministic partial coordinates for bound queries

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use aether_core::{GridError, PartialCoord};
use aether_grid::Wedge;
use aether_model::DenseGrid;

/// Build the reference 5D wedge `16 ≥ v ≥ w ≥ x ≥ y ≥ z ≥ 0`.
pub fn reference_wedge() -> Result<Wedge, GridError> {
    Wedge::new(5, 16)
}

/// Build the reference dense grid: `[-4, 4]` on five axes, one hashed
/// `i64` per cell.
pub fn reference_grid(seed: u64) -> Result<DenseGrid<i64>, GridError> {
    DenseGrid::from_fn(&[-4; 5], &[9; 5], |c| hash_cell(seed, c))
}

/// Deterministic pseudo-random value of a cell, in `[-1000, 1000)`.
pub fn hash_cell(seed: u64, coord: &[i32]) -> i64 {
    let h = coord.iter().fold(seed, |acc, &c| {
        acc.wrapping_mul(6364136223846793005)
            .wrapping_add(c as u64)
            .wrapping_add(1442695040888963407)
    });
    ((h >> 33) % 2000) as i64 - 1000
}

/// Generate `n` deterministic partial coordinates over `ndim` axes with
/// values in `[0, size]`.
///
/// Each axis is fixed with probability about one half.
pub fn partial_coords(ndim: usize, size: i32, n: usize, seed: u64) -> Vec<PartialCoord> {
    let span = size as u64 + 1;
    (0..n as u64)
        .map(|i| {
            let mut state = seed ^ i.wrapping_mul(2862933555777941757);
            PartialCoord::from_options((0..ndim).map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                let bits = state >> 33;
                (bits & 1 == 0).then(|| ((bits >> 1) % span) as i32)
            }))
        })
        .collect()
}
