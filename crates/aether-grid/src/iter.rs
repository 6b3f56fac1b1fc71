//! Cell enumeration in nested axis order.

use aether_core::{Coord, PartialCoord, Region};
use smallvec::smallvec;
use std::iter::FusedIterator;

/// Iterator over the cells of a region.
///
/// Visits cells in lexicographic order with axis 0 outermost, which is the
/// nested iteration that defines a region. Each axis range is conditioned
/// on the axes before it only. Empty sub-ranges are skipped by
/// backtracking to the previous axis, so the iterator never yields a cell
/// outside the region.
///
/// A region with zero axes has exactly one cell, the empty coordinate.
///
/// ```
/// use aether_grid::{Cells, Wedge};
///
/// let cells: Vec<Vec<i32>> = Cells::new(Wedge::new(2, 1).unwrap())
///     .map(|c| c.to_vec())
///     .collect();
/// assert_eq!(cells, vec![vec![0, 0], vec![1, 0], vec![1, 1]]);
/// ```
#[derive(Clone, Debug)]
pub struct Cells<R> {
    region: R,
    current: Coord,
    /// Entries for axes before the one being ranged; later axes stay free.
    fixed: PartialCoord,
    started: bool,
    done: bool,
}

impl<R: Region> Cells<R> {
    /// Enumerate the cells of `region`.
    pub fn new(region: R) -> Self {
        let ndim = region.ndim();
        Self {
            region,
            current: smallvec![0; ndim],
            fixed: PartialCoord::free(ndim),
            started: false,
            done: false,
        }
    }

    /// Set axes `axis..` to their lowest values, backtracking on empty
    /// ranges. Returns `false` once the region is exhausted.
    fn seek(&mut self, mut axis: usize) -> bool {
        let ndim = self.current.len();
        while axis < ndim {
            let lo = self.region.min_coord_at(axis, &self.fixed);
            let hi = self.region.max_coord_at(axis, &self.fixed);
            if lo <= hi {
                self.current[axis] = lo;
                self.fixed.set(axis, Some(lo));
                axis += 1;
            } else {
                match self.bump(axis) {
                    Some(bumped) => axis = bumped + 1,
                    None => return false,
                }
            }
        }
        true
    }

    /// Increment the deepest axis below `limit` that still has room,
    /// freeing every axis after it. Returns the incremented axis.
    fn bump(&mut self, limit: usize) -> Option<usize> {
        for axis in (0..limit).rev() {
            self.fixed.set(axis, None);
            let hi = self.region.max_coord_at(axis, &self.fixed);
            if let Some(next) = self.current[axis].checked_add(1).filter(|&n| n <= hi) {
                self.current[axis] = next;
                self.fixed.set(axis, Some(next));
                return Some(axis);
            }
        }
        None
    }
}

impl<R: Region> Iterator for Cells<R> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.done {
            return None;
        }
        let found = if self.started {
            let ndim = self.current.len();
            match self.bump(ndim) {
                Some(axis) => self.seek(axis + 1),
                None => false,
            }
        } else {
            self.started = true;
            self.seek(0)
        };
        if found {
            Some(self.current.clone())
        } else {
            self.done = true;
            None
        }
    }
}

impl<R: Region> FusedIterator for Cells<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyperrect::Hyperrectangle;

    /// `0 <= a0 <= 3`, `a1 ∈ [a0, 2]`: rows with `a0 = 3` are empty.
    struct Ragged;

    impl Region for Ragged {
        fn ndim(&self) -> usize {
            3
        }
        fn min_coord(&self, _axis: usize) -> i32 {
            0
        }
        fn max_coord(&self, axis: usize) -> i32 {
            if axis == 2 {
                0
            } else {
                3
            }
        }
        fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
            match axis {
                1 => fixed.get(0).unwrap_or(0),
                _ => 0,
            }
        }
        fn max_coord_at(&self, axis: usize, _fixed: &PartialCoord) -> i32 {
            match axis {
                1 => 2,
                2 => 0,
                _ => 3,
            }
        }
    }

    /// Inverted bounds on every axis.
    struct Empty;

    impl Region for Empty {
        fn ndim(&self) -> usize {
            2
        }
        fn min_coord(&self, _axis: usize) -> i32 {
            1
        }
        fn max_coord(&self, _axis: usize) -> i32 {
            0
        }
    }

    struct Point;

    impl Region for Point {
        fn ndim(&self) -> usize {
            0
        }
        fn min_coord(&self, _axis: usize) -> i32 {
            0
        }
        fn max_coord(&self, _axis: usize) -> i32 {
            0
        }
    }

    fn collect<R: Region>(region: R) -> Vec<Vec<i32>> {
        Cells::new(region).map(|c| c.to_vec()).collect()
    }

    #[test]
    fn lexicographic_order() {
        let rect = Hyperrectangle::new(&[0, -1], &[1, 0]).unwrap();
        assert_eq!(
            collect(&rect),
            vec![vec![0, -1], vec![0, 0], vec![1, -1], vec![1, 0]]
        );
    }

    #[test]
    fn skips_empty_rows() {
        let cells = collect(Ragged);
        assert_eq!(cells.len(), 3 + 2 + 1);
        assert!(cells.iter().all(|c| c[0] < 3 && c[1] >= c[0]));
        assert_eq!(cells.last(), Some(&vec![2, 2, 0]));
    }

    #[test]
    fn empty_region_yields_nothing() {
        assert_eq!(Cells::new(Empty).count(), 0);
    }

    #[test]
    fn zero_axes_yield_one_empty_cell() {
        assert_eq!(collect(Point), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut cells = Cells::new(Point);
        assert!(cells.next().is_some());
        assert!(cells.next().is_none());
        assert!(cells.next().is_none());
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let rect = Hyperrectangle::new(&[i32::MAX - 1], &[i32::MAX]).unwrap();
        assert_eq!(collect(&rect), vec![vec![i32::MAX - 1], vec![i32::MAX]]);
    }

    #[test]
    fn works_through_trait_objects() {
        let boxed: Box<dyn Region> = Box::new(Ragged);
        assert_eq!(Cells::new(&*boxed).count(), 6);
    }
}
