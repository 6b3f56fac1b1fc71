//! Dense row-major storage for hyperrectangular blocks of cells.

use aether_core::{CellValues, GridError, Region};
use aether_grid::{Cells, Hyperrectangle};

/// Values for every cell of a [`Hyperrectangle`], stored row-major with
/// the last axis contiguous.
///
/// The box is given as an origin (its lowest corner) and a shape; every
/// side must be non-zero and `origin + side - 1` must fit in `i32`.
///
/// ```
/// use aether_core::{CellValues, Region};
/// use aether_model::DenseGrid;
///
/// let grid = DenseGrid::from_fn(&[-1, 0], &[3, 2], |c| c[0] * 10 + c[1]).unwrap();
/// assert_eq!((grid.min_coord(0), grid.max_coord(0)), (-1, 1));
/// assert_eq!(grid.value_at(&[1, 1]), 11);
/// assert_eq!(grid.as_slice(), &[-10, -9, 0, 1, 10, 11]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DenseGrid<T> {
    bounds: Hyperrectangle,
    strides: Vec<usize>,
    data: Vec<T>,
}

/// Row-major strides of a box, or `InvalidShape` if its cell count does
/// not fit in memory indices.
fn strides_of(bounds: &Hyperrectangle) -> Result<(Vec<usize>, usize), GridError> {
    let mut strides = vec![0; bounds.ndim()];
    let mut len = 1usize;
    for axis in (0..bounds.ndim()).rev() {
        strides[axis] = len;
        let side = i64::from(bounds.max_coord(axis)) - i64::from(bounds.min_coord(axis)) + 1;
        len = usize::try_from(side)
            .ok()
            .and_then(|side| len.checked_mul(side))
            .ok_or_else(|| GridError::InvalidShape {
                reason: format!("{} cells do not fit in memory", bounds.cell_count()),
            })?;
    }
    Ok((strides, len))
}

impl<T> DenseGrid<T> {
    /// A grid over `origin`/`shape` whose cells are computed by `f`.
    ///
    /// `f` is called once per cell in axis order.
    pub fn from_fn(
        origin: &[i32],
        shape: &[u32],
        mut f: impl FnMut(&[i32]) -> T,
    ) -> Result<Self, GridError> {
        let bounds = Hyperrectangle::from_origin_and_shape(origin, shape)?;
        let (strides, len) = strides_of(&bounds)?;
        let mut data = Vec::with_capacity(len);
        data.extend(Cells::new(&bounds).map(|cell| f(&cell)));
        Ok(Self {
            bounds,
            strides,
            data,
        })
    }

    /// A grid over `origin`/`shape` taking ownership of row-major `data`.
    ///
    /// Returns `Err(GridError::InvalidShape)` if `data` does not hold
    /// exactly one value per cell.
    pub fn from_vec(origin: &[i32], shape: &[u32], data: Vec<T>) -> Result<Self, GridError> {
        let bounds = Hyperrectangle::from_origin_and_shape(origin, shape)?;
        let (strides, len) = strides_of(&bounds)?;
        if data.len() != len {
            return Err(GridError::InvalidShape {
                reason: format!("expected {len} values, got {}", data.len()),
            });
        }
        Ok(Self {
            bounds,
            strides,
            data,
        })
    }

    /// The box covered by the grid.
    pub fn bounds(&self) -> &Hyperrectangle {
        &self.bounds
    }

    /// All values in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: &[i32]) -> Option<&T> {
        self.index_of(coord).map(|i| &self.data[i])
    }

    /// Mutable value at `coord`, or `None` outside the grid.
    pub fn get_mut(&mut self, coord: &[i32]) -> Option<&mut T> {
        self.index_of(coord).map(|i| &mut self.data[i])
    }

    /// Overwrite the value at `coord`.
    ///
    /// Returns `Err(GridError::DimensionMismatch)` for a coordinate of the
    /// wrong length and `Err(GridError::CoordinateOutOfBounds)` naming the
    /// first axis outside the grid.
    pub fn set(&mut self, coord: &[i32], value: T) -> Result<(), GridError> {
        if coord.len() != self.bounds.ndim() {
            return Err(GridError::DimensionMismatch {
                expected: self.bounds.ndim(),
                actual: coord.len(),
            });
        }
        for (axis, &c) in coord.iter().enumerate() {
            let (min, max) = (self.bounds.min_coord(axis), self.bounds.max_coord(axis));
            if c < min || c > max {
                return Err(GridError::CoordinateOutOfBounds {
                    axis,
                    coordinate: c,
                    min,
                    max,
                });
            }
        }
        if let Some(slot) = self.get_mut(coord) {
            *slot = value;
        }
        Ok(())
    }

    fn index_of(&self, coord: &[i32]) -> Option<usize> {
        if coord.len() != self.strides.len() {
            return None;
        }
        coord
            .iter()
            .zip(self.bounds.min().iter().zip(self.bounds.max()))
            .zip(&self.strides)
            .try_fold(0usize, |index, ((&c, (&lo, &hi)), &stride)| {
                if c < lo || c > hi {
                    return None;
                }
                let offset = usize::try_from(i64::from(c) - i64::from(lo)).ok()?;
                Some(index + offset * stride)
            })
    }
}

impl<T: Clone + Default> DenseGrid<T> {
    /// Copy the values of every cell of `source` into a grid over its
    /// unconditional bounding box.
    ///
    /// Positions of the box outside the region hold `T::default()`.
    pub fn capture<R: CellValues<T> + ?Sized>(source: &R) -> Result<Self, GridError> {
        let ndim = source.ndim();
        let min: Vec<i32> = (0..ndim).map(|a| source.min_coord(a)).collect();
        let max: Vec<i32> = (0..ndim).map(|a| source.max_coord(a)).collect();
        let bounds = Hyperrectangle::new(&min, &max)?;
        let (strides, len) = strides_of(&bounds)?;
        let mut grid = Self {
            bounds,
            strides,
            data: vec![T::default(); len],
        };
        let mut captured = 0usize;
        for cell in Cells::new(source) {
            if let Some(slot) = grid.get_mut(&cell) {
                *slot = source.value_at(&cell);
                captured += 1;
            }
        }
        tracing::debug!(ndim, cells = captured, len, "dense grid captured");
        Ok(grid)
    }
}

impl<T> Region for DenseGrid<T> {
    fn ndim(&self) -> usize {
        self.bounds.ndim()
    }

    fn min_coord(&self, axis: usize) -> i32 {
        self.bounds.min_coord(axis)
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.bounds.max_coord(axis)
    }
}

impl<T: Clone> CellValues<T> for DenseGrid<T> {
    /// # Panics
    ///
    /// If `coord` lies outside the grid.
    fn value_at(&self, coord: &[i32]) -> T {
        match self.get(coord) {
            Some(value) => value.clone(),
            None => panic!("{coord:?} lies outside the grid"),
        }
    }
}
