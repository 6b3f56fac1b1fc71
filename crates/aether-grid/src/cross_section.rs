//! Axis-aligned cross-sections: one axis fixed to a constant.

use aether_core::{CellValues, Coord, GridError, Model, PartialCoord, Region, StepId, ViewId};
use std::path::Path;

/// An (N-1)-dimensional view of a source with axis `k` fixed.
///
/// Reduced axis `i` is source axis `i` below `k` and `i + 1` from `k` on;
/// labels come from the source. Every bound query is the source's query
/// with the fixed coordinate inserted, so the reduced unconditional bounds
/// are the source's bounds conditioned on `k`.
///
/// ```
/// use aether_core::Region;
/// use aether_grid::{CrossSection, Wedge};
///
/// // v = 2 in the wedge v ≥ w ≥ x ≥ y ≥ z ≥ 0.
/// let section = CrossSection::new(Wedge::new(5, 3).unwrap(), 0, 2).unwrap();
/// assert_eq!(section.ndim(), 4);
/// assert_eq!(section.axis_label(0), "w");
/// assert_eq!((section.min_coord(0), section.max_coord(0)), (0, 2));
/// assert_eq!(section.path_suffix(), "/v=2");
/// ```
#[derive(Clone, Debug)]
pub struct CrossSection<S> {
    source: S,
    axis: usize,
    coordinate: i32,
    id: ViewId,
    invalidated: bool,
}

fn check_coordinate<S: Region + ?Sized>(source: &S, axis: usize, coordinate: i32) -> Result<(), GridError> {
    let (min, max) = (source.min_coord(axis), source.max_coord(axis));
    if coordinate < min || coordinate > max {
        return Err(GridError::CoordinateOutOfBounds {
            axis,
            coordinate,
            min,
            max,
        });
    }
    Ok(())
}

impl<S: Region> CrossSection<S> {
    /// Fix `axis` of `source` to `coordinate`.
    ///
    /// Returns `Err(GridError::AxisOutOfRange)` for a bad axis and
    /// `Err(GridError::CoordinateOutOfBounds)` if `coordinate` lies outside
    /// the source's unconditional bound on that axis.
    pub fn new(source: S, axis: usize, coordinate: i32) -> Result<Self, GridError> {
        if axis >= source.ndim() {
            return Err(GridError::AxisOutOfRange {
                axis,
                ndim: source.ndim(),
            });
        }
        check_coordinate(&source, axis, coordinate)?;
        let section = Self {
            source,
            axis,
            coordinate,
            id: ViewId::next(),
            invalidated: false,
        };
        tracing::debug!(view = %section.id, axis, coordinate, "cross-section built");
        Ok(section)
    }

    /// The fixed source axis.
    pub fn fixed_axis(&self) -> usize {
        self.axis
    }

    /// The fixed coordinate.
    pub fn coordinate(&self) -> i32 {
        self.coordinate
    }

    /// Whether a step has invalidated this view.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// The sliced source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Source axis of reduced axis `axis`.
    pub fn source_axis(&self, axis: usize) -> usize {
        if axis < self.axis {
            axis
        } else {
            axis + 1
        }
    }

    /// Lift a reduced partial coordinate to the source, fixing `k`.
    pub fn lift(&self, fixed: &PartialCoord) -> PartialCoord {
        let mut lifted = PartialCoord::free(self.source.ndim()).with(self.axis, self.coordinate);
        for (axis, c) in fixed.iter_fixed().filter(|&(a, _)| a < self.ndim()) {
            lifted.set(self.source_axis(axis), Some(c));
        }
        lifted
    }

    /// Export-path segment `/{label}={coordinate}`.
    pub fn path_suffix(&self) -> String {
        format!("/{}={}", self.source.axis_label(self.axis), self.coordinate)
    }
}

impl<S: Region> Region for CrossSection<S> {
    fn ndim(&self) -> usize {
        self.source.ndim() - 1
    }

    fn min_coord(&self, axis: usize) -> i32 {
        self.min_coord_at(axis, &PartialCoord::free(self.ndim()))
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.max_coord_at(axis, &PartialCoord::free(self.ndim()))
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.source.min_coord_at(self.source_axis(axis), &self.lift(fixed))
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.source.max_coord_at(self.source_axis(axis), &self.lift(fixed))
    }

    fn axis_label(&self, axis: usize) -> String {
        self.source.axis_label(self.source_axis(axis))
    }
}

impl<S: Model> Model for CrossSection<S> {
    fn advance_step(&mut self) -> Result<bool, GridError> {
        if self.invalidated {
            return Err(GridError::Invalidated {
                view: self.subfolder_path(),
                reason: "invalidated by an earlier step".into(),
            });
        }
        let changed = self.source.advance_step()?;
        if let Err(err) = check_coordinate(&self.source, self.axis, self.coordinate) {
            self.invalidated = true;
            let err = err.invalidated(self.subfolder_path());
            tracing::warn!(view = %self.id, step = %self.source.step(), %err, "cross-section invalidated");
            return Err(err);
        }
        tracing::debug!(view = %self.id, step = %self.source.step(), "cross-section revalidated");
        Ok(changed)
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
        self.source.subfolder_path() + &self.path_suffix()
    }

    fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError> {
        self.source.back_up(dir, name)
    }
}

impl<T, S: CellValues<T>> CellValues<T> for CrossSection<S> {
    fn value_at(&self, coord: &[i32]) -> T {
        let mut lifted: Coord = coord.iter().copied().collect();
        lifted.insert(self.axis, self.coordinate);
        self.source.value_at(&lifted)
    }
}
