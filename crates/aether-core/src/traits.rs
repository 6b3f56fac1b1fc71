//! Core abstraction traits: bounds, simulation lifecycle, and cell values.

use crate::axis::default_axis_label;
use crate::coord::PartialCoord;
use crate::error::GridError;
use crate::id::StepId;
use std::path::Path;

/// Bound-query surface of an N-dimensional integer region.
///
/// A region does not store its cells. It is characterised by the valid
/// range of each axis, optionally conditioned on fixed values of other
/// axes. The set of cells is the nested iteration
/// `for a0 in [min(0), max(0)] { for a1 in [min(1 | a0), max(1 | a0)] { … } }`
/// in axis order.
///
/// # Contract
///
/// - `min_coord_at(axis, fixed) <= max_coord_at(axis, fixed)` whenever the
///   fixed coordinates are themselves in bounds.
/// - Fixing more axes never widens a range: bounds are monotonically
///   non-expanding as entries of `fixed` are filled in.
/// - The entry of `fixed` for `axis` itself is ignored.
/// - `axis` must be below [`ndim`](Self::ndim); implementations may panic
///   otherwise. The checked 5D façade lives in `aether-grid`.
///
/// # Object Safety
///
/// This trait is designed for use as `dyn Region`; derived views hold
/// their source generically and also accept boxed trait objects.
pub trait Region {
    /// Number of axes.
    fn ndim(&self) -> usize;

    /// Unconditional lower bound of `axis`.
    fn min_coord(&self, axis: usize) -> i32;

    /// Unconditional upper bound of `axis`.
    fn max_coord(&self, axis: usize) -> i32;

    /// Lower bound of `axis` given the fixed entries of `fixed`.
    ///
    /// Default implementation ignores `fixed`, which is correct for
    /// hyperrectangular regions.
    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        let _ = fixed;
        self.min_coord(axis)
    }

    /// Upper bound of `axis` given the fixed entries of `fixed`.
    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        let _ = fixed;
        self.max_coord(axis)
    }

    /// Human-readable name of `axis`, used to build export paths.
    fn axis_label(&self, axis: usize) -> String {
        default_axis_label(self.ndim(), axis)
    }

    /// Whether `coord` is a cell of the region.
    ///
    /// Checks each axis in order against its bounds conditioned on the
    /// axes before it, mirroring the nested iteration that defines the
    /// region.
    fn contains(&self, coord: &[i32]) -> bool {
        if coord.len() != self.ndim() {
            return false;
        }
        let mut fixed = PartialCoord::free(coord.len());
        for (axis, &c) in coord.iter().enumerate() {
            if c < self.min_coord_at(axis, &fixed) || c > self.max_coord_at(axis, &fixed) {
                return false;
            }
            fixed.set(axis, Some(c));
        }
        true
    }

    /// Whether the fixed entries of `partial` can belong to a cell.
    ///
    /// Same chain as [`contains`](Self::contains) restricted to the fixed
    /// axes: each one is checked against its bounds conditioned on the
    /// fixed axes before it.
    fn contains_partial(&self, partial: &PartialCoord) -> bool {
        if partial.ndim() != self.ndim() {
            return false;
        }
        let mut pinned = PartialCoord::free(partial.ndim());
        for (axis, c) in partial.iter_fixed() {
            if c < self.min_coord_at(axis, &pinned) || c > self.max_coord_at(axis, &pinned) {
                return false;
            }
            pinned.set(axis, Some(c));
        }
        true
    }
}

/// Lifecycle of a simulation exposed as a region.
///
/// The simulation itself (its update rule and storage) lives outside this
/// workspace. Derived views forward every method to their source and add
/// their own re-validation to [`advance_step`](Self::advance_step).
pub trait Model: Region {
    /// Advance the simulation one step.
    ///
    /// Returns whether any cell changed. Derived views return
    /// [`GridError::Invalidated`] if they no longer fit the advanced source;
    /// such a view must be discarded.
    fn advance_step(&mut self) -> Result<bool, GridError>;

    /// Whether the last step changed any cell, `None` before the first step.
    fn is_changed(&self) -> Option<bool>;

    /// Current step index.
    fn step(&self) -> StepId;

    /// Name of the simulation.
    fn name(&self) -> String;

    /// Relative folder path identifying this model or view for export.
    fn subfolder_path(&self) -> String;

    /// Write a backup of the simulation state into `dir` under `name`.
    fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError>;
}

/// Per-cell values of type `T`.
///
/// Reading a position outside the region is not part of the contract:
/// implementations may panic or return an arbitrary value. Callers only
/// query cells they obtained from the region's bounds.
pub trait CellValues<T>: Region {
    /// Value of the cell at `coord`.
    fn value_at(&self, coord: &[i32]) -> T;
}

/// A model with per-cell values, usable as `Box<dyn ValueModel<T>>`.
pub trait ValueModel<T>: Model + CellValues<T> {}

impl<T, M: Model + CellValues<T> + ?Sized> ValueModel<T> for M {}

// ── Forwarding impls for references and boxes ────────────────────────

macro_rules! forward_region {
    () => {
        fn ndim(&self) -> usize {
            (**self).ndim()
        }
        fn min_coord(&self, axis: usize) -> i32 {
            (**self).min_coord(axis)
        }
        fn max_coord(&self, axis: usize) -> i32 {
            (**self).max_coord(axis)
        }
        fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
            (**self).min_coord_at(axis, fixed)
        }
        fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
            (**self).max_coord_at(axis, fixed)
        }
        fn axis_label(&self, axis: usize) -> String {
            (**self).axis_label(axis)
        }
    };
}

macro_rules! forward_model {
    () => {
        fn advance_step(&mut self) -> Result<bool, GridError> {
            (**self).advance_step()
        }
        fn is_changed(&self) -> Option<bool> {
            (**self).is_changed()
        }
        fn step(&self) -> StepId {
            (**self).step()
        }
        fn name(&self) -> String {
            (**self).name()
        }
        fn subfolder_path(&self) -> String {
            (**self).subfolder_path()
        }
        fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError> {
            (**self).back_up(dir, name)
        }
    };
}

impl<R: Region + ?Sized> Region for &R {
    forward_region!();
}

impl<R: Region + ?Sized> Region for &mut R {
    forward_region!();
}

impl<R: Region + ?Sized> Region for Box<R> {
    forward_region!();
}

impl<M: Model + ?Sized> Model for &mut M {
    forward_model!();
}

impl<M: Model + ?Sized> Model for Box<M> {
    forward_model!();
}

impl<T, R: CellValues<T> + ?Sized> CellValues<T> for &R {
    fn value_at(&self, coord: &[i32]) -> T {
        (**self).value_at(coord)
    }
}

impl<T, R: CellValues<T> + ?Sized> CellValues<T> for &mut R {
    fn value_at(&self, coord: &[i32]) -> T {
        (**self).value_at(coord)
    }
}

impl<T, R: CellValues<T> + ?Sized> CellValues<T> for Box<R> {
    fn value_at(&self, coord: &[i32]) -> T {
        (**self).value_at(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Triangle `0 <= y <= x <= 3`.
    struct Triangle;

    impl Region for Triangle {
        fn ndim(&self) -> usize {
            2
        }
        fn min_coord(&self, _axis: usize) -> i32 {
            0
        }
        fn max_coord(&self, _axis: usize) -> i32 {
            3
        }
        fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
            match axis {
                0 => fixed.get(1).unwrap_or(0),
                _ => 0,
            }
        }
        fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
            match axis {
                1 => fixed.get(0).unwrap_or(3),
                _ => 3,
            }
        }
    }

    #[test]
    fn contains_follows_conditional_bounds() {
        assert!(Triangle.contains(&[2, 2]));
        assert!(Triangle.contains(&[3, 0]));
        assert!(!Triangle.contains(&[1, 2]));
        assert!(!Triangle.contains(&[4, 0]));
        assert!(!Triangle.contains(&[1]));
    }

    #[test]
    fn contains_partial_checks_fixed_axes_only() {
        assert!(Triangle.contains_partial(&PartialCoord::free(2).with(1, 3)));
        assert!(!Triangle.contains_partial(&PartialCoord::free(2).with(0, 1).with(1, 2)));
        assert!(Triangle.contains_partial(&PartialCoord::free(2)));
    }

    #[test]
    fn default_labels_and_forwarding() {
        let boxed: Box<dyn Region> = Box::new(Triangle);
        assert_eq!(boxed.axis_label(0), "x");
        assert_eq!(boxed.axis_label(1), "y");
        let by_ref = &boxed;
        assert_eq!(by_ref.max_coord_at(1, &PartialCoord::free(2).with(0, 2)), 2);
    }
}
