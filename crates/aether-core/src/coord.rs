//! Full and partial grid coordinates.

use smallvec::SmallVec;
use std::fmt;

/// A full coordinate in grid space, one entry per axis.
///
/// Uses `SmallVec<[i32; 5]>` to avoid heap allocation for grids up to
/// five dimensions. Higher-dimensional grids spill to the heap
/// transparently.
pub type Coord = SmallVec<[i32; 5]>;

/// A sparse assignment of fixed coordinates.
///
/// Holds one optional entry per axis: `Some(c)` pins the axis to `c`,
/// `None` leaves it free. Bound queries such as
/// [`Region::min_coord_at`](crate::Region::min_coord_at) read only the
/// entries they need, which replaces one accessor per subset of fixed axes
/// with a single routine per axis.
///
/// # Examples
///
/// ```
/// use aether_core::PartialCoord;
///
/// let fixed = PartialCoord::free(5).with(0, 3).with(2, 1);
/// assert_eq!(fixed.get(0), Some(3));
/// assert_eq!(fixed.get(1), None);
/// assert_eq!(fixed.fixed_count(), 2);
/// assert_eq!(fixed.to_string(), "[3, _, 1, _, _]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PartialCoord(SmallVec<[Option<i32>; 5]>);

impl PartialCoord {
    /// A partial coordinate of `ndim` axes with every axis free.
    pub fn free(ndim: usize) -> Self {
        Self(SmallVec::from_elem(None, ndim))
    }

    /// A partial coordinate with every axis of `coord` fixed.
    pub fn from_coord(coord: &[i32]) -> Self {
        Self(coord.iter().copied().map(Some).collect())
    }

    /// Build from per-axis optional values.
    pub fn from_options<I: IntoIterator<Item = Option<i32>>>(values: I) -> Self {
        Self(values.into_iter().collect())
    }

    /// Number of axes (fixed or free).
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// The fixed value of `axis`, or `None` if it is free or out of range.
    #[inline]
    pub fn get(&self, axis: usize) -> Option<i32> {
        self.0.get(axis).copied().flatten()
    }

    /// Whether `axis` is fixed.
    #[inline]
    pub fn is_fixed(&self, axis: usize) -> bool {
        self.get(axis).is_some()
    }

    /// Fix or free `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.ndim()`.
    pub fn set(&mut self, axis: usize, value: Option<i32>) {
        self.0[axis] = value;
    }

    /// Free `axis`. Out-of-range axes are ignored.
    pub fn clear(&mut self, axis: usize) {
        if let Some(entry) = self.0.get_mut(axis) {
            *entry = None;
        }
    }

    /// Builder form of [`set`](Self::set) that fixes `axis` to `value`.
    pub fn with(mut self, axis: usize, value: i32) -> Self {
        self.set(axis, Some(value));
        self
    }

    /// Number of fixed axes.
    pub fn fixed_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }

    /// Per-axis entries in axis order.
    pub fn as_slice(&self) -> &[Option<i32>] {
        &self.0
    }

    /// Fixed `(axis, value)` pairs in ascending axis order.
    pub fn iter_fixed(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(axis, c)| c.map(|c| (axis, c)))
    }

    /// A copy with a new axis inserted at position `axis`.
    ///
    /// Entries at `axis` and above shift up by one. Used to lift a query on
    /// a cross-section back to its source.
    pub fn insert_axis(&self, axis: usize, value: Option<i32>) -> Self {
        let mut lifted = self.0.clone();
        lifted.insert(axis, value);
        Self(lifted)
    }

    /// A copy with the entry at `axis` removed.
    pub fn remove_axis(&self, axis: usize) -> Self {
        let mut lowered = self.0.clone();
        lowered.remove(axis);
        Self(lowered)
    }
}

impl From<Vec<Option<i32>>> for PartialCoord {
    fn from(values: Vec<Option<i32>>) -> Self {
        Self(SmallVec::from_vec(values))
    }
}

impl<const N: usize> From<[Option<i32>; N]> for PartialCoord {
    fn from(values: [Option<i32>; N]) -> Self {
        Self::from_options(values)
    }
}

impl fmt::Display for PartialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match c {
                Some(c) => write!(f, "{c}")?,
                None => f.write_str("_")?,
            }
        }
        f.write_str("]")
    }
}
