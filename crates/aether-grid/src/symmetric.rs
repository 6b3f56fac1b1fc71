//! Regions with a canonical asymmetric section.
//!
//! A symmetric simulation only needs to store one representative of each
//! symmetry class. [`SymmetricRegion`] exposes the bounds of that
//! representative section next to the full bounds; [`AsymmetricSection`]
//! turns it into a region of its own and [`WholeGrid`] goes the other way,
//! unfolding a wedge back into the full isotropic grid.

use aether_core::{CellValues, Coord, GridError, Model, PartialCoord, Region, StepId};
use smallvec::SmallVec;
use std::path::Path;

use crate::isotropic::{wedge_max_coord, wedge_min_coord};

/// A region whose cells are determined by an asymmetric section.
///
/// The asymmetric bounds follow the same contract as the ordinary
/// [`Region`] bounds.
pub trait SymmetricRegion: Region {
    /// Unconditional lower bound of `axis` within the asymmetric section.
    fn asymmetric_min_coord(&self, axis: usize) -> i32;

    /// Unconditional upper bound of `axis` within the asymmetric section.
    fn asymmetric_max_coord(&self, axis: usize) -> i32;

    /// Conditional lower bound of `axis` within the asymmetric section.
    fn asymmetric_min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        let _ = fixed;
        self.asymmetric_min_coord(axis)
    }

    /// Conditional upper bound of `axis` within the asymmetric section.
    fn asymmetric_max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        let _ = fixed;
        self.asymmetric_max_coord(axis)
    }

    /// The asymmetric section as a region of its own.
    fn asymmetric_section(self) -> AsymmetricSection<Self>
    where
        Self: Sized,
    {
        AsymmetricSection { source: self }
    }
}

impl<R: SymmetricRegion + ?Sized> SymmetricRegion for &R {
    fn asymmetric_min_coord(&self, axis: usize) -> i32 {
        (**self).asymmetric_min_coord(axis)
    }
    fn asymmetric_max_coord(&self, axis: usize) -> i32 {
        (**self).asymmetric_max_coord(axis)
    }
    fn asymmetric_min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        (**self).asymmetric_min_coord_at(axis, fixed)
    }
    fn asymmetric_max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        (**self).asymmetric_max_coord_at(axis, fixed)
    }
}

impl<R: SymmetricRegion + ?Sized> SymmetricRegion for Box<R> {
    fn asymmetric_min_coord(&self, axis: usize) -> i32 {
        (**self).asymmetric_min_coord(axis)
    }
    fn asymmetric_max_coord(&self, axis: usize) -> i32 {
        (**self).asymmetric_max_coord(axis)
    }
    fn asymmetric_min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        (**self).asymmetric_min_coord_at(axis, fixed)
    }
    fn asymmetric_max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        (**self).asymmetric_max_coord_at(axis, fixed)
    }
}

// ── AsymmetricSection ───────────────────────────────────────────────

/// View exposing the asymmetric section of a [`SymmetricRegion`].
///
/// Coordinates are shared with the source, so values and the whole model
/// lifecycle pass through unchanged.
#[derive(Clone, Debug)]
pub struct AsymmetricSection<S> {
    source: S,
}

impl<S> AsymmetricSection<S> {
    /// The symmetric source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: SymmetricRegion> Region for AsymmetricSection<S> {
    fn ndim(&self) -> usize {
        self.source.ndim()
    }

    fn min_coord(&self, axis: usize) -> i32 {
        self.source.asymmetric_min_coord(axis)
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.source.asymmetric_max_coord(axis)
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.source.asymmetric_min_coord_at(axis, fixed)
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.source.asymmetric_max_coord_at(axis, fixed)
    }

    fn axis_label(&self, axis: usize) -> String {
        self.source.axis_label(axis)
    }
}

impl<S: SymmetricRegion + Model> Model for AsymmetricSection<S> {
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

impl<T, S: SymmetricRegion + CellValues<T>> CellValues<T> for AsymmetricSection<S> {
    fn value_at(&self, coord: &[i32]) -> T {
        self.source.value_at(coord)
    }
}

// ── WholeGrid ───────────────────────────────────────────────────────

/// Unfolds a wedge-shaped source into the full isotropic grid.
///
/// The source must be a canonical wedge `a0 ≥ a1 ≥ … ≥ 0` (for example a
/// simulation that only stores its asymmetric section). The whole grid
/// spans `[-size, size]` on every axis, where `size` is the source's upper
/// bound on its first axis, re-read on every query so it follows the source
/// as it grows. A cell's value is the source value at its absolute
/// coordinates sorted in descending order.
///
/// ```
/// use aether_core::{CellValues, PartialCoord, Region};
/// use aether_grid::{Wedge, WholeGrid};
///
/// struct Sum(Wedge);
/// impl Region for Sum {
///     fn ndim(&self) -> usize { self.0.ndim() }
///     fn min_coord(&self, a: usize) -> i32 { self.0.min_coord(a) }
///     fn max_coord(&self, a: usize) -> i32 { self.0.max_coord(a) }
///     fn min_coord_at(&self, a: usize, f: &PartialCoord) -> i32 { self.0.min_coord_at(a, f) }
///     fn max_coord_at(&self, a: usize, f: &PartialCoord) -> i32 { self.0.max_coord_at(a, f) }
/// }
/// impl CellValues<i32> for Sum {
///     fn value_at(&self, c: &[i32]) -> i32 { 10 * c[0] + c[1] }
/// }
///
/// let whole = WholeGrid::new(Sum(Wedge::new(2, 3).unwrap()));
/// assert_eq!(whole.min_coord(1), -3);
/// assert_eq!(whole.value_at(&[-1, 2]), 21);
/// ```
#[derive(Clone, Debug)]
pub struct WholeGrid<S> {
    source: S,
}

impl<S: Region> WholeGrid<S> {
    /// Wrap a wedge-shaped source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Current half-width of the unfolded grid.
    pub fn half_width(&self) -> i32 {
        self.source.max_coord(0)
    }

    /// The wedge coordinate holding the value of `coord`.
    pub fn representative(coord: &[i32]) -> Coord {
        let mut folded: Coord = coord.iter().map(|c| c.abs()).collect::<SmallVec<_>>();
        folded.sort_unstable_by(|a, b| b.cmp(a));
        folded
    }

    /// The wedge-shaped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Region> Region for WholeGrid<S> {
    fn ndim(&self) -> usize {
        self.source.ndim()
    }

    fn min_coord(&self, _axis: usize) -> i32 {
        -self.half_width()
    }

    fn max_coord(&self, _axis: usize) -> i32 {
        self.half_width()
    }

    fn axis_label(&self, axis: usize) -> String {
        self.source.axis_label(axis)
    }
}

impl<S: Region> SymmetricRegion for WholeGrid<S> {
    fn asymmetric_min_coord(&self, _axis: usize) -> i32 {
        0
    }

    fn asymmetric_max_coord(&self, _axis: usize) -> i32 {
        self.half_width()
    }

    fn asymmetric_min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        wedge_min_coord(axis, fixed)
    }

    fn asymmetric_max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        wedge_max_coord(axis, fixed, self.half_width())
    }
}

impl<S: Model> Model for WholeGrid<S> {
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

impl<T, S: CellValues<T>> CellValues<T> for WholeGrid<S> {
    fn value_at(&self, coord: &[i32]) -> T {
        self.source.value_at(&Self::representative(coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::isotropic::{IsotropicHypercube, Wedge};
    use crate::iter::Cells;
    use proptest::prelude::*;

    /// Wedge with values `100*a0 + 10*a1 + a2`.
    struct Digits(Wedge);

    impl Region for Digits {
        fn ndim(&self) -> usize {
            self.0.ndim()
        }
        fn min_coord(&self, axis: usize) -> i32 {
            self.0.min_coord(axis)
        }
        fn max_coord(&self, axis: usize) -> i32 {
            self.0.max_coord(axis)
        }
        fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
            self.0.min_coord_at(axis, fixed)
        }
        fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
            self.0.max_coord_at(axis, fixed)
        }
    }

    impl CellValues<i32> for Digits {
        fn value_at(&self, coord: &[i32]) -> i32 {
            assert!(self.contains(coord), "read outside wedge: {coord:?}");
            coord.iter().fold(0, |acc, c| acc * 10 + c)
        }
    }

    #[test]
    fn asymmetric_section_of_cube_is_wedge() {
        let cube = IsotropicHypercube::new(4, 3).unwrap();
        let wedge = Wedge::new(4, 3).unwrap();
        let section = cube.asymmetric_section();
        let a: Vec<_> = Cells::new(&section).collect();
        let b: Vec<_> = Cells::new(&wedge).collect();
        assert_eq!(a, b);
        compliance::run_full_compliance(&section);
    }

    #[test]
    fn asymmetric_section_keeps_labels() {
        let section = IsotropicHypercube::new(5, 1).unwrap().asymmetric_section();
        assert_eq!(section.axis_label(0), "v");
        assert_eq!(section.axis_label(4), "z");
    }

    #[test]
    fn whole_grid_reads_representative() {
        let whole = WholeGrid::new(Digits(Wedge::new(3, 3).unwrap()));
        assert_eq!(whole.value_at(&[-1, 3, 0]), 310);
        assert_eq!(whole.value_at(&[2, -2, -3]), 322);
        assert_eq!(Cells::new(&whole).count(), 7 * 7 * 7);
    }

    #[test]
    fn whole_grid_round_trips_to_wedge() {
        let whole = WholeGrid::new(Wedge::new(3, 2).unwrap());
        let folded: Vec<_> = Cells::new(&whole.asymmetric_section()).collect();
        let wedge: Vec<_> = Cells::new(&Wedge::new(3, 2).unwrap()).collect();
        assert_eq!(folded, wedge);
    }

    proptest! {
        #[test]
        fn whole_grid_value_is_symmetric(
            coord in proptest::collection::vec(-3i32..=3, 3),
            flip in proptest::collection::vec(any::<bool>(), 3),
            rotate in 0usize..3,
        ) {
            let whole = WholeGrid::new(Digits(Wedge::new(3, 3).unwrap()));
            let mut image: Vec<i32> = coord
                .iter()
                .zip(&flip)
                .map(|(&c, &f)| if f { -c } else { c })
                .collect();
            image.rotate_left(rotate);
            prop_assert_eq!(whole.value_at(&coord), whole.value_at(&image));
        }
    }
}
