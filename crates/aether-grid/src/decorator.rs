//! Pass-through wrappers.
//!
//! [`Decorator`] forwards every query to its source unchanged; it is the
//! base for wrappers that override only a few methods. [`As5D`] is a
//! decorator that pins the dimensionality to five and adds accessors typed
//! by [`Axis5`].

use aether_core::{Axis5, CellValues, GridError, Model, PartialCoord, Region, StepId};
use std::path::Path;

use crate::symmetric::SymmetricRegion;

/// Forwards every [`Region`], [`SymmetricRegion`], [`Model`] and
/// [`CellValues`] method to `S`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decorator<S> {
    source: S,
}

impl<S> Decorator<S> {
    /// Wrap `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the wrapped source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Region> Region for Decorator<S> {
    fn ndim(&self) -> usize {
        self.source.ndim()
    }

    fn min_coord(&self, axis: usize) -> i32 {
        self.source.min_coord(axis)
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.source.max_coord(axis)
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.source.min_coord_at(axis, fixed)
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.source.max_coord_at(axis, fixed)
    }

    fn axis_label(&self, axis: usize) -> String {
        self.source.axis_label(axis)
    }

    fn contains(&self, coord: &[i32]) -> bool {
        self.source.contains(coord)
    }

    fn contains_partial(&self, partial: &PartialCoord) -> bool {
        self.source.contains_partial(partial)
    }
}

impl<S: SymmetricRegion> SymmetricRegion for Decorator<S> {
    fn asymmetric_min_coord(&self, axis: usize) -> i32 {
        self.source.asymmetric_min_coord(axis)
    }

    fn asymmetric_max_coord(&self, axis: usize) -> i32 {
        self.source.asymmetric_max_coord(axis)
    }

    fn asymmetric_min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.source.asymmetric_min_coord_at(axis, fixed)
    }

    fn asymmetric_max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.source.asymmetric_max_coord_at(axis, fixed)
    }
}

impl<S: Model> Model for Decorator<S> {
    fn advance_step(&mut self) -> Result<bool, GridError> {
        self.source.advance_step()
    }

    fn is_changed(&self) -> Option<bool> {
        self.source.is_changed()
    }

    fn step(&self) -> StepId {
        self.source.step()
    }

    fn name(&self) -> String {
        self.source.name()
    }

    fn subfolder_path(&self) -> String {
        self.source.subfolder_path()
    }

    fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError> {
        self.source.back_up(dir, name)
    }
}

impl<T, S: CellValues<T>> CellValues<T> for Decorator<S> {
    fn value_at(&self, coord: &[i32]) -> T {
        self.source.value_at(coord)
    }
}

// ── As5D ────────────────────────────────────────────────────────────

/// A five-dimensional region with [`Axis5`]-typed accessors.
///
/// ```
/// use aether_core::{Axis5, PartialCoord};
/// use aether_grid::{As5D, IsotropicHypercube};
///
/// let grid = As5D::new(IsotropicHypercube::new(5, 2).unwrap()).unwrap();
/// assert_eq!(grid.min(Axis5::Y), -2);
/// assert!(As5D::new(IsotropicHypercube::new(3, 2).unwrap()).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct As5D<S> {
    inner: Decorator<S>,
}

impl<S: Region> As5D<S> {
    /// Wrap `source`, which must have exactly five axes.
    ///
    /// Returns `Err(GridError::DimensionMismatch)` otherwise.
    pub fn new(source: S) -> Result<Self, GridError> {
        if source.ndim() != 5 {
            return Err(GridError::DimensionMismatch {
                expected: 5,
                actual: source.ndim(),
            });
        }
        Ok(Self {
            inner: Decorator::new(source),
        })
    }

    /// Unconditional lower bound of `axis`.
    pub fn min(&self, axis: Axis5) -> i32 {
        self.inner.min_coord(axis.index())
    }

    /// Unconditional upper bound of `axis`.
    pub fn max(&self, axis: Axis5) -> i32 {
        self.inner.max_coord(axis.index())
    }

    /// Lower bound of `axis` given `fixed`.
    pub fn min_at(&self, axis: Axis5, fixed: &PartialCoord) -> i32 {
        self.inner.min_coord_at(axis.index(), fixed)
    }

    /// Upper bound of `axis` given `fixed`.
    pub fn max_at(&self, axis: Axis5, fixed: &PartialCoord) -> i32 {
        self.inner.max_coord_at(axis.index(), fixed)
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        self.inner.source()
    }

    /// Mutable access to the wrapped source.
    pub fn source_mut(&mut self) -> &mut S {
        self.inner.source_mut()
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

impl<S> As5D<S> {
    /// Value of the cell `(v, w, x, y, z)`.
    pub fn value<T>(&self, v: i32, w: i32, x: i32, y: i32, z: i32) -> T
    where
        S: CellValues<T>,
    {
        self.inner.value_at(&[v, w, x, y, z])
    }
}

impl<S: Region> Region for As5D<S> {
    fn ndim(&self) -> usize {
        5
    }

    fn min_coord(&self, axis: usize) -> i32 {
        self.inner.min_coord(axis)
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.inner.max_coord(axis)
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.inner.min_coord_at(axis, fixed)
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.inner.max_coord_at(axis, fixed)
    }

    fn axis_label(&self, axis: usize) -> String {
        self.inner.axis_label(axis)
    }
}

impl<S: SymmetricRegion> SymmetricRegion for As5D<S> {
    fn asymmetric_min_coord(&self, axis: usize) -> i32 {
        self.inner.asymmetric_min_coord(axis)
    }

    fn asymmetric_max_coord(&self, axis: usize) -> i32 {
        self.inner.asymmetric_max_coord(axis)
    }

    fn asymmetric_min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.inner.asymmetric_min_coord_at(axis, fixed)
    }

    fn asymmetric_max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.inner.asymmetric_max_coord_at(axis, fixed)
    }
}

impl<S: Model> Model for As5D<S> {
    fn advance_step(&mut self) -> Result<bool, GridError> {
        self.inner.advance_step()
    }

    fn is_changed(&self) -> Option<bool> {
        self.inner.is_changed()
    }

    fn step(&self) -> StepId {
        self.inner.step()
    }

    fn name(&self) -> String {
        self.inner.name()
    }

    fn subfolder_path(&self) -> String {
        self.inner.subfolder_path()
    }

    fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError> {
        self.inner.back_up(dir, name)
    }
}

impl<T, S: CellValues<T>> CellValues<T> for As5D<S> {
    fn value_at(&self, coord: &[i32]) -> T {
        self.inner.value_at(coord)
    }
}
