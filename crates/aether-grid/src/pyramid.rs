//! Hypercubic pyramids standing on an axis-aligned base.

use aether_core::{Coord, GridError, PartialCoord, Region};

/// A step pyramid with a hypercubic base.
///
/// The base is the hypercube of odd side `base_side` centred on
/// `base_center` in the hyperplane `height_axis = base_center[height_axis]`.
/// Each layer above shrinks by one cell on both sides of every other axis,
/// so a cell belongs to the pyramid iff
/// `0 <= h - h0` and `|a - c| <= half - (h - h0)` for every other axis,
/// where `half = (base_side - 1) / 2`.
///
/// ```
/// use aether_core::{PartialCoord, Region};
/// use aether_grid::HypercubicPyramid;
///
/// let pyramid = HypercubicPyramid::new(&[0, 0, 0], 5, 2).unwrap();
/// assert_eq!(pyramid.max_coord(2), 2);
/// // One step up, the footprint shrinks to [-1, 1].
/// let layer = PartialCoord::free(3).with(2, 1);
/// assert_eq!(pyramid.min_coord_at(0, &layer), -1);
/// assert_eq!(pyramid.max_coord_at(0, &layer), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HypercubicPyramid {
    base_center: Coord,
    half: i32,
    height_axis: usize,
}

impl HypercubicPyramid {
    /// A pyramid with the given base centre, odd base side and height axis.
    ///
    /// Returns `Err(GridError::InvalidShape)` for an even or zero base side
    /// or for a pyramid reaching past the `i32` range, and
    /// `Err(GridError::AxisOutOfRange)` if `height_axis` is not an axis of
    /// `base_center`.
    pub fn new(base_center: &[i32], base_side: u32, height_axis: usize) -> Result<Self, GridError> {
        if height_axis >= base_center.len() {
            return Err(GridError::AxisOutOfRange {
                axis: height_axis,
                ndim: base_center.len(),
            });
        }
        if base_side % 2 == 0 {
            return Err(GridError::InvalidShape {
                reason: format!("pyramid base side must be odd, got {base_side}"),
            });
        }
        let half = i32::try_from((base_side - 1) / 2).map_err(|_| GridError::InvalidShape {
            reason: format!("pyramid base side {base_side} is too large"),
        })?;
        for (axis, &c) in base_center.iter().enumerate() {
            let fits = if axis == height_axis {
                c.checked_add(half).is_some()
            } else {
                c.checked_add(half).is_some() && c.checked_sub(half).is_some()
            };
            if !fits {
                return Err(GridError::InvalidShape {
                    reason: format!("pyramid leaves the i32 range on axis {axis}"),
                });
            }
        }
        Ok(Self {
            base_center: base_center.iter().copied().collect(),
            half,
            height_axis,
        })
    }

    /// Axis along which the pyramid rises.
    pub fn height_axis(&self) -> usize {
        self.height_axis
    }

    /// Centre of the base layer.
    pub fn base_center(&self) -> &[i32] {
        &self.base_center
    }

    /// Number of layers, equal to `(base_side + 1) / 2`.
    pub fn height(&self) -> i32 {
        self.half + 1
    }

    /// Largest offset from the centre among the fixed non-height axes.
    fn max_offset(&self, fixed: &PartialCoord) -> i64 {
        fixed
            .iter_fixed()
            .filter(|&(a, _)| a != self.height_axis && a < self.base_center.len())
            .map(|(a, c)| (i64::from(c) - i64::from(self.base_center[a])).abs())
            .max()
            .unwrap_or(0)
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Region for HypercubicPyramid {
    fn ndim(&self) -> usize {
        self.base_center.len()
    }

    fn min_coord(&self, axis: usize) -> i32 {
        if axis == self.height_axis {
            self.base_center[axis]
        } else {
            self.base_center[axis] - self.half
        }
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.base_center[axis] + self.half
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        if axis == self.height_axis {
            return self.min_coord(axis);
        }
        let rise = fixed.get(self.height_axis).map_or(0, |h| {
            i64::from(h) - i64::from(self.base_center[self.height_axis])
        });
        saturate(i64::from(self.base_center[axis]) - i64::from(self.half) + rise.max(0))
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        let c = i64::from(self.base_center[axis]);
        let half = i64::from(self.half);
        if axis == self.height_axis {
            return saturate(c + half - self.max_offset(fixed));
        }
        let rise = fixed
            .get(self.height_axis)
            .map_or(0, |h| i64::from(h) - i64::from(self.base_center[self.height_axis]));
        saturate(c + half - rise.max(0))
    }
}
