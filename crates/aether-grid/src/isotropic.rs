//! Isotropic hypercubic regions and their canonical asymmetric section.
//!
//! An isotropic hypercubic region is symmetric under every permutation and
//! sign flip of its axes, so a single non-negative half-width describes it:
//! every axis spans `[-half_width, half_width]`. One representative of each
//! symmetry class lies in the *wedge* `a0 ≥ a1 ≥ … ≥ a(n-1) ≥ 0`, whose
//! bounds are pure functions of the ordering invariant:
//!
//! - every fixed axis value is a lower bound for the axes before it and an
//!   upper bound for the axes after it;
//! - only the nearest fixed neighbour on each side matters;
//! - an axis with no fixed neighbour on a side falls back to `0` (below)
//!   or the size (above).
//!
//! [`wedge_min_coord`] and [`wedge_max_coord`] implement that rule for
//! simulations that embed it in their own [`Region`] impls.

use crate::symmetric::SymmetricRegion;
use aether_core::{GridError, PartialCoord, Region};

/// Lower bound of `axis` in a wedge given `fixed`.
///
/// The value of the nearest fixed axis after `axis`, or `0`.
///
/// ```
/// use aether_core::PartialCoord;
/// use aether_grid::wedge_min_coord;
///
/// // v ≥ w ≥ x ≥ y ≥ z ≥ 0 with x = 2 fixed: w is at least 2.
/// let fixed = PartialCoord::free(5).with(2, 2);
/// assert_eq!(wedge_min_coord(1, &fixed), 2);
/// assert_eq!(wedge_min_coord(3, &fixed), 0);
/// ```
pub fn wedge_min_coord(axis: usize, fixed: &PartialCoord) -> i32 {
    (axis + 1..fixed.ndim())
        .find_map(|a| fixed.get(a))
        .unwrap_or(0)
}

/// Upper bound of `axis` in a wedge of the given `size` given `fixed`.
///
/// The value of the nearest fixed axis before `axis`, or `size`.
pub fn wedge_max_coord(axis: usize, fixed: &PartialCoord, size: i32) -> i32 {
    (0..axis.min(fixed.ndim()))
        .rev()
        .find_map(|a| fixed.get(a))
        .unwrap_or(size)
}

fn check_shape(ndim: usize, extent: i32, name: &str) -> Result<(), GridError> {
    if ndim == 0 {
        return Err(GridError::InvalidShape {
            reason: "a region needs at least one axis".into(),
        });
    }
    if extent < 0 {
        return Err(GridError::InvalidShape {
            reason: format!("{name} must be non-negative, got {extent}"),
        });
    }
    Ok(())
}

/// Bounds of an isotropic hypercubic region centred on the origin.
///
/// Simulations with isotropic symmetry embed one of these and delegate
/// their [`Region`] and [`SymmetricRegion`] impls to it, updating the
/// half-width as they grow.
///
/// # Examples
///
/// ```
/// use aether_core::{PartialCoord, Region};
/// use aether_grid::{IsotropicHypercube, SymmetricRegion};
///
/// let cube = IsotropicHypercube::new(5, 3).unwrap();
/// assert_eq!((cube.min_coord(2), cube.max_coord(2)), (-3, 3));
///
/// // In the wedge, w is bounded above by v.
/// let at_v = PartialCoord::free(5).with(0, 2);
/// assert_eq!(cube.asymmetric_max_coord_at(1, &at_v), 2);
/// assert_eq!(cube.asymmetric_min_coord_at(1, &at_v), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IsotropicHypercube {
    ndim: usize,
    half_width: i32,
}

impl IsotropicHypercube {
    /// An `ndim`-dimensional hypercube spanning `[-half_width, half_width]`
    /// on every axis.
    ///
    /// Returns `Err(GridError::InvalidShape)` if `ndim == 0` or
    /// `half_width < 0`.
    pub fn new(ndim: usize, half_width: i32) -> Result<Self, GridError> {
        check_shape(ndim, half_width, "half-width")?;
        Ok(Self { ndim, half_width })
    }

    /// Coordinate-wise bound of the canonical wedge.
    pub fn half_width(&self) -> i32 {
        self.half_width
    }
}

impl Region for IsotropicHypercube {
    fn ndim(&self) -> usize {
        self.ndim
    }

    fn min_coord(&self, _axis: usize) -> i32 {
        -self.half_width
    }

    fn max_coord(&self, _axis: usize) -> i32 {
        self.half_width
    }
}

impl SymmetricRegion for IsotropicHypercube {
    fn asymmetric_min_coord(&self, _axis: usize) -> i32 {
        0
    }

    fn asymmetric_max_coord(&self, _axis: usize) -> i32 {
        self.half_width
    }

    fn asymmetric_min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        wedge_min_coord(axis, fixed)
    }

    fn asymmetric_max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        wedge_max_coord(axis, fixed, self.half_width)
    }
}

/// The canonical wedge `a0 ≥ a1 ≥ … ≥ a(n-1) ≥ 0` as a region of its own.
///
/// Same invariant as the asymmetric section of an
/// [`IsotropicHypercube`], with `size` as the bound of the first axis. All
/// bounds are non-negative.
///
/// ```
/// use aether_core::{PartialCoord, Region};
/// use aether_grid::Wedge;
///
/// let wedge = Wedge::new(5, 3).unwrap();
/// let at_vx = PartialCoord::free(5).with(0, 3).with(2, 1);
/// // Between v = 3 and x = 1.
/// assert_eq!(wedge.min_coord_at(1, &at_vx), 1);
/// assert_eq!(wedge.max_coord_at(1, &at_vx), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wedge {
    ndim: usize,
    size: i32,
}

impl Wedge {
    /// A wedge of `ndim` axes whose first axis spans `[0, size]`.
    pub fn new(ndim: usize, size: i32) -> Result<Self, GridError> {
        check_shape(ndim, size, "size")?;
        Ok(Self { ndim, size })
    }

    /// Upper bound of the first axis.
    pub fn size(&self) -> i32 {
        self.size
    }
}

impl Region for Wedge {
    fn ndim(&self) -> usize {
        self.ndim
    }

    fn min_coord(&self, _axis: usize) -> i32 {
        0
    }

    fn max_coord(&self, _axis: usize) -> i32 {
        self.size
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        wedge_min_coord(axis, fixed)
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        wedge_max_coord(axis, fixed, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::iter::Cells;
    use proptest::prelude::*;

    // ── Wedge rule, worked examples ─────────────────────────────

    #[test]
    fn wedge_rule_examples_5d() {
        let hw = 7;
        let free = PartialCoord::free(5);
        // No neighbours fixed: [0, hw].
        assert_eq!(wedge_min_coord(0, &free), 0);
        assert_eq!(wedge_max_coord(0, &free, hw), hw);

        // minW at VX = x, maxX at VW = w, maxW at V = v, minV at W = w.
        let vx = free.clone().with(0, 5).with(2, 2);
        assert_eq!(wedge_min_coord(1, &vx), 2);
        let vw = free.clone().with(0, 5).with(1, 4);
        assert_eq!(wedge_max_coord(2, &vw, hw), 4);
        let v = free.clone().with(0, 5);
        assert_eq!(wedge_max_coord(1, &v, hw), 5);
        let w = free.clone().with(1, 3);
        assert_eq!(wedge_min_coord(0, &w), 3);
        assert_eq!(wedge_max_coord(0, &w, hw), hw);
    }

    #[test]
    fn nearest_fixed_neighbour_wins() {
        let fixed = PartialCoord::free(5).with(0, 6).with(1, 5).with(3, 2).with(4, 1);
        assert_eq!(wedge_max_coord(2, &fixed, 9), 5);
        assert_eq!(wedge_min_coord(2, &fixed), 2);
    }

    #[test]
    fn own_entry_is_ignored() {
        let fixed = PartialCoord::free(3).with(1, 2);
        assert_eq!(wedge_min_coord(1, &fixed), 0);
        assert_eq!(wedge_max_coord(1, &fixed, 4), 4);
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn negative_size_rejected() {
        assert!(matches!(
            Wedge::new(5, -1),
            Err(GridError::InvalidShape { .. })
        ));
        assert!(matches!(
            IsotropicHypercube::new(0, 2),
            Err(GridError::InvalidShape { .. })
        ));
    }

    #[test]
    fn hypercube_full_bounds() {
        let cube = IsotropicHypercube::new(3, 4).unwrap();
        for axis in 0..3 {
            assert_eq!(cube.min_coord(axis), -4);
            assert_eq!(cube.max_coord(axis), 4);
            assert_eq!(cube.asymmetric_min_coord(axis), 0);
            assert_eq!(cube.asymmetric_max_coord(axis), 4);
        }
        assert_eq!(Cells::new(&cube).count(), 9 * 9 * 9);
    }

    #[test]
    fn wedge_cell_count_is_multiset_count() {
        // Non-increasing 3-tuples over {0..=3}: C(3 + 4 - 1, 3) = 20.
        let wedge = Wedge::new(3, 3).unwrap();
        assert_eq!(Cells::new(&wedge).count(), 20);
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_wedge_and_cube() {
        compliance::run_full_compliance(&Wedge::new(4, 3).unwrap());
        compliance::run_full_compliance(&IsotropicHypercube::new(3, 2).unwrap());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn wedge_cells_are_sorted_descending(size in 0i32..5, ndim in 1usize..6) {
            let wedge = Wedge::new(ndim, size).unwrap();
            for cell in Cells::new(&wedge) {
                prop_assert!(cell[0] <= size);
                prop_assert!(cell.windows(2).all(|p| p[0] >= p[1]));
                prop_assert!(cell[ndim - 1] >= 0);
            }
        }

        #[test]
        fn pinning_more_axes_never_widens(
            size in 0i32..6,
            values in proptest::collection::vec(0i32..6, 5),
            order in Just([3usize, 0, 4, 1, 2]),
            axis in 0usize..5,
        ) {
            let wedge = Wedge::new(5, size).unwrap();
            let mut sorted = values.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            let cell: Vec<i32> = sorted.iter().map(|&c| c.min(size)).collect();
            let mut fixed = PartialCoord::free(5);
            let mut lo = wedge.min_coord(axis);
            let mut hi = wedge.max_coord(axis);
            for &other in order.iter().filter(|&&a| a != axis) {
                fixed.set(other, Some(cell[other]));
                let next_lo = wedge.min_coord_at(axis, &fixed);
                let next_hi = wedge.max_coord_at(axis, &fixed);
                prop_assert!(next_lo >= lo && next_hi <= hi);
                prop_assert!(next_lo <= cell[axis] && cell[axis] <= next_hi);
                lo = next_lo;
                hi = next_hi;
            }
        }
    }
}
