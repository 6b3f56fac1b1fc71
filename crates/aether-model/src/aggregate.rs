//! Aggregates over every cell of a region with values.
//!
//! Each aggregate walks the region with [`Cells`], so it visits exactly
//! the cells the bound queries describe, in axis order. Derived views
//! aggregate over their own cells only.

use std::iter::Sum;

use aether_core::CellValues;
use aether_grid::Cells;

/// Totals and extrema, blanket-implemented for every [`CellValues`]
/// region.
///
/// ```
/// use aether_grid::RegionExt;
/// use aether_model::{Aggregate, DenseGrid};
///
/// let grid = DenseGrid::from_fn(&[0, 0], &[3, 3], |c| c[0] * 3 + c[1]).unwrap();
/// assert_eq!(grid.total(), 36);
/// assert_eq!(grid.min_and_max(), Some((0, 8)));
///
/// let row = (&grid).cross_section(0, 1).unwrap();
/// assert_eq!(row.total(), 3 + 4 + 5);
/// // Parity follows the view's own coordinates: y = 0 and y = 2.
/// assert_eq!(row.min_and_max_at_parity(true), Some((3, 5)));
/// ```
pub trait Aggregate<T>: CellValues<T> {
    /// Sum of every cell value.
    ///
    /// Overflow behaves as `T`'s [`Sum`] does; use
    /// [`total_as`](Self::total_as) to sum in a wider type.
    fn total(&self) -> T
    where
        T: Sum,
    {
        Cells::new(self).map(|cell| self.value_at(&cell)).sum()
    }

    /// Sum of every cell value, each converted to `U` first.
    fn total_as<U>(&self) -> U
    where
        T: Into<U>,
        U: Sum,
    {
        Cells::new(self).map(|cell| self.value_at(&cell).into()).sum()
    }

    /// Smallest and largest cell value, or `None` for an empty region.
    fn min_and_max(&self) -> Option<(T, T)>
    where
        T: PartialOrd + Clone,
    {
        extrema(Cells::new(self).map(|cell| self.value_at(&cell)))
    }

    /// Smallest and largest value over the cells whose coordinate sum is
    /// even (`even == true`) or odd, or `None` if no cell has that parity.
    fn min_and_max_at_parity(&self, even: bool) -> Option<(T, T)>
    where
        T: PartialOrd + Clone,
    {
        extrema(
            Cells::new(self)
                .filter(|cell| {
                    let sum: i64 = cell.iter().map(|&c| i64::from(c)).sum();
                    (sum.rem_euclid(2) == 0) == even
                })
                .map(|cell| self.value_at(&cell)),
        )
    }
}

impl<T, R: CellValues<T> + ?Sized> Aggregate<T> for R {}

fn extrema<T: PartialOrd + Clone>(mut values: impl Iterator<Item = T>) -> Option<(T, T)> {
    let first = values.next()?;
    Some(values.fold((first.clone(), first), |(lo, hi), v| {
        if v < lo {
            (v, hi)
        } else if v > hi {
            (lo, v)
        } else {
            (lo, hi)
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseGrid;
    use aether_core::{PartialCoord, Region};
    use aether_grid::{RegionExt, Wedge};
    use proptest::prelude::*;

    /// Wedge whose cells hold `a0 - 2*a1 + a2`.
    struct Signed(Wedge);

    impl Region for Signed {
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

    impl CellValues<i32> for Signed {
        fn value_at(&self, coord: &[i32]) -> i32 {
            coord
                .iter()
                .enumerate()
                .map(|(i, &c)| if i % 2 == 0 { c } else { -2 * c })
                .sum()
        }
    }

    #[test]
    fn wedge_aggregates() {
        let region = Signed(Wedge::new(3, 2).unwrap());
        // Cells of 2 ≥ x ≥ y ≥ z ≥ 0, values x - 2y + z.
        let values: Vec<i32> = Cells::new(&region).map(|c| region.value_at(&c)).collect();
        assert_eq!(values.len(), 10);
        assert_eq!(region.total(), values.iter().sum::<i32>());
        assert_eq!(region.min_and_max(), Some((-2, 2)));
    }

    #[test]
    fn parity_uses_coordinate_sum() {
        let grid = DenseGrid::from_fn(&[-1, 0], &[2, 2], |c| c[0] * 10 + c[1]).unwrap();
        // (-1,0) odd, (-1,1) even, (0,0) even, (0,1) odd.
        assert_eq!(grid.min_and_max_at_parity(true), Some((-9, 0)));
        assert_eq!(grid.min_and_max_at_parity(false), Some((-10, 1)));
    }

    #[test]
    fn parity_without_matching_cells_is_none() {
        let grid = DenseGrid::from_vec(&[1, 0], &[1, 1], vec![7]).unwrap();
        assert_eq!(grid.min_and_max_at_parity(false), Some((7, 7)));
        assert_eq!(grid.min_and_max_at_parity(true), None);
    }

    #[test]
    fn total_as_widens() {
        let grid = DenseGrid::from_vec(&[0], &[3], vec![i32::MAX; 3]).unwrap();
        assert_eq!(grid.total_as::<i64>(), 3 * i64::from(i32::MAX));
    }

    #[test]
    fn aggregates_follow_views() {
        let region = Signed(Wedge::new(3, 3).unwrap());
        let clipped = (&region)
            .subsection(PartialCoord::free(3).with(1, 2), PartialCoord::free(3))
            .unwrap();
        let expected: Vec<i32> = Cells::new(&region)
            .filter(|c| c[1] >= 2)
            .map(|c| region.value_at(&c))
            .collect();
        assert_eq!(clipped.total(), expected.iter().sum::<i32>());
        assert_eq!(
            clipped.min_and_max(),
            Some((*expected.iter().min().unwrap(), *expected.iter().max().unwrap()))
        );
    }

    #[test]
    fn floats_compare_partially() {
        let grid = DenseGrid::from_vec(&[0], &[3], vec![0.5f64, -1.5, 2.0]).unwrap();
        assert_eq!(grid.min_and_max(), Some((-1.5, 2.0)));
        assert_eq!(grid.total(), 1.0);
    }

    proptest! {
        #[test]
        fn extrema_match_values(
            shape in proptest::collection::vec(1u32..4, 1..4),
            seed in any::<i32>(),
        ) {
            let origin = vec![-1; shape.len()];
            let grid = DenseGrid::from_fn(&origin, &shape, |c| {
                c.iter().fold(seed, |acc, &x| acc.wrapping_mul(31).wrapping_add(x))
            })
            .unwrap();
            let values = grid.as_slice();
            let lo = *values.iter().min().unwrap();
            let hi = *values.iter().max().unwrap();
            prop_assert_eq!(grid.min_and_max(), Some((lo, hi)));
            prop_assert_eq!(
                grid.total_as::<i64>(),
                values.iter().map(|&v| i64::from(v)).sum::<i64>()
            );
        }
    }
}
