//! Region trait compliance test helpers.
//!
//! These functions verify that a [`Region`] implementation satisfies the
//! bound contract on every one of its cells. Reused across the region and
//! view test modules (wedge, hypercube, pyramid, sub-regions,
//! cross-sections, diagonals).

use crate::iter::Cells;
use aether_core::{Coord, PartialCoord, Region};
use indexmap::IndexSet;

/// Fixed coordinates of `cell` on the axes selected by `mask`.
fn pinned(cell: &[i32], mask: u32) -> PartialCoord {
    PartialCoord::from_options(
        cell.iter()
            .enumerate()
            .map(|(axis, &c)| (mask & (1 << axis) != 0).then_some(c)),
    )
}

/// Every subset of the axes of an `ndim`-dimensional region, as bit masks.
fn subsets(ndim: usize) -> impl Iterator<Item = u32> {
    assert!(ndim <= 8, "exhaustive compliance only covers up to 8 axes");
    0..(1u32 << ndim)
}

fn cells(region: &dyn Region) -> Vec<Coord> {
    Cells::new(region).collect()
}

/// Assert that unconditional bounds are ordered on every axis of a
/// non-empty region.
pub fn assert_bounds_ordered(region: &dyn Region) {
    if Cells::new(region).next().is_none() {
        return;
    }
    for axis in 0..region.ndim() {
        let (lo, hi) = (region.min_coord(axis), region.max_coord(axis));
        assert!(lo <= hi, "axis {axis}: min {lo} > max {hi}");
    }
}

/// Assert that every enumerated cell satisfies `contains`.
pub fn assert_cells_contained(region: &dyn Region) {
    for cell in cells(region) {
        assert_eq!(cell.len(), region.ndim(), "cell {cell:?} has the wrong length");
        assert!(region.contains(&cell), "enumerated cell {cell:?} not contained");
    }
}

/// Assert that no cell is enumerated twice.
pub fn assert_cells_unique(region: &dyn Region) {
    let all = cells(region);
    let unique: IndexSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len(), "cell enumeration has duplicates");
}

/// Assert that every cell lies within the bounds of each axis conditioned
/// on any subset of its other coordinates, and within the unconditional
/// bounds.
pub fn assert_cells_within_bounds(region: &dyn Region) {
    let ndim = region.ndim();
    for cell in cells(region) {
        for axis in 0..ndim {
            let c = cell[axis];
            let (lo, hi) = (region.min_coord(axis), region.max_coord(axis));
            assert!(
                lo <= c && c <= hi,
                "cell {cell:?}: axis {axis} outside unconditional [{lo}, {hi}]"
            );
            for mask in subsets(ndim).filter(|m| m & (1 << axis) == 0) {
                let fixed = pinned(&cell, mask);
                let (lo, hi) = (region.min_coord_at(axis, &fixed), region.max_coord_at(axis, &fixed));
                assert!(
                    lo <= c && c <= hi,
                    "cell {cell:?}: axis {axis} outside [{lo}, {hi}] given {fixed}"
                );
            }
        }
    }
}

/// Assert that fixing one more axis never widens a range.
pub fn assert_monotonic(region: &dyn Region) {
    let ndim = region.ndim();
    for cell in cells(region) {
        for axis in 0..ndim {
            for mask in subsets(ndim).filter(|m| m & (1 << axis) == 0) {
                let fixed = pinned(&cell, mask);
                let lo = region.min_coord_at(axis, &fixed);
                let hi = region.max_coord_at(axis, &fixed);
                for extra in (0..ndim).filter(|&e| e != axis && mask & (1 << e) == 0) {
                    let more = pinned(&cell, mask | (1 << extra));
                    let more_lo = region.min_coord_at(axis, &more);
                    let more_hi = region.max_coord_at(axis, &more);
                    assert!(
                        more_lo >= lo && more_hi <= hi,
                        "axis {axis}: [{more_lo}, {more_hi}] given {more} wider than [{lo}, {hi}] given {fixed}"
                    );
                }
            }
        }
    }
}

/// Assert that two enumerations return the same cells in the same order.
pub fn assert_cells_deterministic(region: &dyn Region) {
    assert_eq!(cells(region), cells(region), "cell enumeration is non-deterministic");
}

/// Assert that axis labels are distinct, so export paths are unambiguous.
pub fn assert_labels_distinct(region: &dyn Region) {
    let labels: IndexSet<String> = (0..region.ndim()).map(|a| region.axis_label(a)).collect();
    assert_eq!(labels.len(), region.ndim(), "duplicate axis labels: {labels:?}");
}

/// Run all 7 compliance checks on a region.
pub fn run_full_compliance(region: &dyn Region) {
    assert_bounds_ordered(region);
    assert_cells_contained(region);
    assert_cells_unique(region);
    assert_cells_within_bounds(region);
    assert_monotonic(region);
    assert_cells_deterministic(region);
    assert_labels_distinct(region);
}
