//! Axis-aligned boxes with fixed bounds.

use aether_core::{Coord, GridError, Region};

/// An axis-aligned hyperrectangle `[min[i], max[i]]` on every axis.
///
/// Conditional bounds equal the unconditional ones, so the default
/// [`Region`] methods apply.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hyperrectangle {
    min: Coord,
    max: Coord,
}

impl Hyperrectangle {
    /// A box from inclusive corner coordinates.
    ///
    /// Returns `Err(GridError::DimensionMismatch)` if the corners differ in
    /// length, `Err(GridError::InvalidShape)` if they are empty, and
    /// `Err(GridError::InvertedBounds)` if `min[i] > max[i]` on some axis.
    pub fn new(min: &[i32], max: &[i32]) -> Result<Self, GridError> {
        if min.len() != max.len() {
            return Err(GridError::DimensionMismatch {
                expected: min.len(),
                actual: max.len(),
            });
        }
        if min.is_empty() {
            return Err(GridError::InvalidShape {
                reason: "a region needs at least one axis".into(),
            });
        }
        if let Some(axis) = (0..min.len()).find(|&a| min[a] > max[a]) {
            return Err(GridError::InvertedBounds {
                axis,
                min: min[axis],
                max: max[axis],
            });
        }
        Ok(Self {
            min: min.iter().copied().collect(),
            max: max.iter().copied().collect(),
        })
    }

    /// A box starting at `origin` with `shape[i]` cells along axis `i`.
    ///
    /// ```
    /// use aether_core::Region;
    /// use aether_grid::Hyperrectangle;
    ///
    /// let rect = Hyperrectangle::from_origin_and_shape(&[-1, 4], &[3, 2]).unwrap();
    /// assert_eq!((rect.min_coord(0), rect.max_coord(0)), (-1, 1));
    /// assert_eq!((rect.min_coord(1), rect.max_coord(1)), (4, 5));
    /// ```
    pub fn from_origin_and_shape(origin: &[i32], shape: &[u32]) -> Result<Self, GridError> {
        if origin.len() != shape.len() {
            return Err(GridError::DimensionMismatch {
                expected: origin.len(),
                actual: shape.len(),
            });
        }
        let mut max = Coord::with_capacity(origin.len());
        for (axis, (&o, &s)) in origin.iter().zip(shape).enumerate() {
            if s == 0 {
                return Err(GridError::InvalidShape {
                    reason: format!("axis {axis} has zero length"),
                });
            }
            let end = i64::from(o) + i64::from(s) - 1;
            let end = i32::try_from(end).map_err(|_| GridError::InvalidShape {
                reason: format!("axis {axis} extends past i32::MAX"),
            })?;
            max.push(end);
        }
        Self::new(origin, &max)
    }

    /// Lower corner.
    pub fn min(&self) -> &[i32] {
        &self.min
    }

    /// Upper corner.
    pub fn max(&self) -> &[i32] {
        &self.max
    }

    /// Number of cells, saturating at `u64::MAX`.
    pub fn cell_count(&self) -> u64 {
        self.min
            .iter()
            .zip(&self.max)
            .map(|(&lo, &hi)| (i64::from(hi) - i64::from(lo) + 1) as u64)
            .fold(1u64, u64::saturating_mul)
    }
}

impl Region for Hyperrectangle {
    fn ndim(&self) -> usize {
        self.min.len()
    }

    fn min_coord(&self, axis: usize) -> i32 {
        self.min[axis]
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.max[axis]
    }
}
