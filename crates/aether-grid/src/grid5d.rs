//! Checked bound queries for 5D regions.
//!
//! [`Region`] methods take raw axis indices and may panic on bad input.
//! [`Grid5D`] is the validating entry point for callers holding a region
//! whose dimensionality is only known at run time.

use aether_core::{GridError, PartialCoord, Region};

const NDIM: usize = 5;

fn check(region: &(impl Region + ?Sized), axis: usize) -> Result<(), GridError> {
    if region.ndim() != NDIM {
        return Err(GridError::DimensionMismatch {
            expected: NDIM,
            actual: region.ndim(),
        });
    }
    if axis >= NDIM {
        return Err(GridError::AxisOutOfRange { axis, ndim: NDIM });
    }
    Ok(())
}

fn check_fixed(region: &(impl Region + ?Sized), axis: usize, fixed: &PartialCoord) -> Result<(), GridError> {
    check(region, axis)?;
    if fixed.ndim() != NDIM {
        return Err(GridError::DimensionMismatch {
            expected: NDIM,
            actual: fixed.ndim(),
        });
    }
    Ok(())
}

/// Validating bound queries over the axes `v, w, x, y, z`.
///
/// Blanket-implemented for every [`Region`].
///
/// ```
/// use aether_core::{GridError, PartialCoord};
/// use aether_grid::{Grid5D, Wedge};
///
/// let wedge = Wedge::new(5, 4).unwrap();
/// let at_v = PartialCoord::free(5).with(0, 2);
/// assert_eq!(wedge.max_bound_at(1, &at_v), Ok(2));
/// assert!(matches!(wedge.min_bound(5), Err(GridError::AxisOutOfRange { .. })));
/// ```
pub trait Grid5D: Region {
    /// Unconditional lower bound of `axis`.
    fn min_bound(&self, axis: usize) -> Result<i32, GridError> {
        check(self, axis)?;
        Ok(self.min_coord(axis))
    }

    /// Unconditional upper bound of `axis`.
    fn max_bound(&self, axis: usize) -> Result<i32, GridError> {
        check(self, axis)?;
        Ok(self.max_coord(axis))
    }

    /// Lower bound of `axis` given `fixed`.
    fn min_bound_at(&self, axis: usize, fixed: &PartialCoord) -> Result<i32, GridError> {
        check_fixed(self, axis, fixed)?;
        Ok(self.min_coord_at(axis, fixed))
    }

    /// Upper bound of `axis` given `fixed`.
    fn max_bound_at(&self, axis: usize, fixed: &PartialCoord) -> Result<i32, GridError> {
        check_fixed(self, axis, fixed)?;
        Ok(self.max_coord_at(axis, fixed))
    }
}

impl<R: Region + ?Sized> Grid5D for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyperrect::Hyperrectangle;
    use crate::isotropic::Wedge;

    #[test]
    fn rejects_wrong_dimensionality() {
        let rect = Hyperrectangle::new(&[0, 0], &[1, 1]).unwrap();
        assert_eq!(
            rect.min_bound(0),
            Err(GridError::DimensionMismatch {
                expected: 5,
                actual: 2
            })
        );
    }

    #[test]
    fn rejects_short_partial() {
        let wedge = Wedge::new(5, 3).unwrap();
        assert_eq!(
            wedge.max_bound_at(2, &PartialCoord::free(4)),
            Err(GridError::DimensionMismatch {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn every_fixed_subset_of_the_wedge() {
        // All 5 * 2^4 (axis, fixed-subset) combinations agree with the
        // nearest-neighbour rule on the cell (4, 3, 3, 1, 0).
        let cell = [4, 3, 3, 1, 0];
        let wedge = Wedge::new(5, 6).unwrap();
        for axis in 0..5 {
            for mask in 0u32..32 {
                if mask & (1 << axis) != 0 {
                    continue;
                }
                let mut fixed = PartialCoord::free(5);
                for a in (0..5).filter(|a| mask & (1 << a) != 0) {
                    fixed.set(a, Some(cell[a]));
                }
                let lo = (axis + 1..5).find(|a| mask & (1 << a) != 0).map_or(0, |a| cell[a]);
                let hi = (0..axis).rev().find(|a| mask & (1 << a) != 0).map_or(6, |a| cell[a]);
                assert_eq!(wedge.min_bound_at(axis, &fixed), Ok(lo));
                assert_eq!(wedge.max_bound_at(axis, &fixed), Ok(hi));
            }
        }
    }

    #[test]
    fn works_on_trait_objects() {
        let boxed: Box<dyn Region> = Box::new(Wedge::new(5, 2).unwrap());
        assert_eq!(boxed.max_bound(4), Ok(2));
        assert_eq!(boxed.as_ref().min_bound(0), Ok(0));
    }
}
