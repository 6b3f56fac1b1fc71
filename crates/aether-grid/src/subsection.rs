//! Sub-regions: a source clipped to explicit, possibly open, bounds.

use aether_core::{CellValues, GridError, Model, PartialCoord, Region, StepId, ViewId};
use std::path::Path;

/// A source region clipped per axis to requested bounds.
///
/// Each axis may be clipped from below, above, both or not at all. The
/// effective bounds are recomputed on every query by clamping the source's
/// (conditional) bound, so the view follows the source as it evolves.
/// Clipping one axis never affects another.
///
/// Coordinates are the source's, so values pass through unchanged.
///
/// # Examples
///
/// ```
/// use aether_core::{PartialCoord, Region};
/// use aether_grid::{Subsection, Wedge};
///
/// let wedge = Wedge::new(5, 6).unwrap();
/// let min = PartialCoord::free(5).with(0, 2);
/// let max = PartialCoord::free(5).with(0, 4).with(4, 1);
/// let sub = Subsection::new(wedge, min, max).unwrap();
/// assert_eq!((sub.min_coord(0), sub.max_coord(0)), (2, 4));
/// assert_eq!(sub.max_coord(4), 1);
/// assert_eq!(sub.path_suffix(), "/v[2,4]_z(-inf,1]");
/// ```
#[derive(Clone, Debug)]
pub struct Subsection<S> {
    source: S,
    min: PartialCoord,
    max: PartialCoord,
    id: ViewId,
    invalidated: bool,
}

impl<S: Region> Subsection<S> {
    /// Clip `source` to `min`/`max`; `None` entries leave that side open.
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if `min` or `max` do not have one entry per
    ///   source axis.
    /// - `UnboundedSubsection` if every entry is `None`.
    /// - `InvertedBounds` if `min[i] > max[i]` for some axis.
    /// - `EmptyIntersection` if the clip does not overlap the source's
    ///   current bounds on some axis.
    pub fn new(source: S, min: PartialCoord, max: PartialCoord) -> Result<Self, GridError> {
        check_clip(source.ndim(), &min, &max)?;
        check_overlap(&source, &min, &max)?;
        let sub = Self {
            source,
            min,
            max,
            id: ViewId::next(),
            invalidated: false,
        };
        tracing::debug!(view = %sub.id, suffix = %sub.path_suffix(), "subsection built");
        Ok(sub)
    }

    /// Requested lower bounds.
    pub fn requested_min(&self) -> &PartialCoord {
        &self.min
    }

    /// Requested upper bounds.
    pub fn requested_max(&self) -> &PartialCoord {
        &self.max
    }

    /// Whether a step has invalidated this view.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }

    /// The clipped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Unwrap the source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Export-path segment appended to the source's path, one
    /// `label[min,max]` entry per clipped axis joined by `_`.
    pub fn path_suffix(&self) -> String {
        let entries: Vec<String> = (0..self.source.ndim())
            .filter_map(|axis| {
                let label = self.source.axis_label(axis);
                match (self.min.get(axis), self.max.get(axis)) {
                    (Some(lo), Some(hi)) => Some(format!("{label}[{lo},{hi}]")),
                    (Some(lo), None) => Some(format!("{label}[{lo},inf)")),
                    (None, Some(hi)) => Some(format!("{label}(-inf,{hi}]")),
                    (None, None) => None,
                }
            })
            .collect();
        format!("/{}", entries.join("_"))
    }

    fn clamp_min(&self, axis: usize, source_min: i32) -> i32 {
        self.min.get(axis).map_or(source_min, |lo| lo.max(source_min))
    }

    fn clamp_max(&self, axis: usize, source_max: i32) -> i32 {
        self.max.get(axis).map_or(source_max, |hi| hi.min(source_max))
    }
}

/// Validate a clip request for a source of `ndim` axes without building
/// the view.
///
/// Runs every check of [`Subsection::new`] that does not need the source's
/// bounds.
pub fn check_clip(ndim: usize, min: &PartialCoord, max: &PartialCoord) -> Result<(), GridError> {
    for bounds in [min, max] {
        if bounds.ndim() != ndim {
            return Err(GridError::DimensionMismatch {
                expected: ndim,
                actual: bounds.ndim(),
            });
        }
    }
    if min.fixed_count() == 0 && max.fixed_count() == 0 {
        return Err(GridError::UnboundedSubsection);
    }
    for axis in 0..ndim {
        if let (Some(lo), Some(hi)) = (min.get(axis), max.get(axis)) {
            if lo > hi {
                return Err(GridError::InvertedBounds {
                    axis,
                    min: lo,
                    max: hi,
                });
            }
        }
    }
    Ok(())
}

fn check_overlap<S: Region + ?Sized>(
    source: &S,
    min: &PartialCoord,
    max: &PartialCoord,
) -> Result<(), GridError> {
    for axis in 0..source.ndim() {
        let lo = min.get(axis).map_or(source.min_coord(axis), |m| m.max(source.min_coord(axis)));
        let hi = max.get(axis).map_or(source.max_coord(axis), |m| m.min(source.max_coord(axis)));
        if lo > hi {
            return Err(GridError::EmptyIntersection { axis, min: lo, max: hi });
        }
    }
    Ok(())
}

impl<S: Region> Region for Subsection<S> {
    fn ndim(&self) -> usize {
        self.source.ndim()
    }

    fn min_coord(&self, axis: usize) -> i32 {
        self.clamp_min(axis, self.source.min_coord(axis))
    }

    fn max_coord(&self, axis: usize) -> i32 {
        self.clamp_max(axis, self.source.max_coord(axis))
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.clamp_min(axis, self.source.min_coord_at(axis, fixed))
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        self.clamp_max(axis, self.source.max_coord_at(axis, fixed))
    }

    fn axis_label(&self, axis: usize) -> String {
        self.source.axis_label(axis)
    }
}

impl<S: Model> Model for Subsection<S> {
    /// Advance the source, then check the original request against its new
    /// bounds.
    ///
    /// Fails with [`GridError::Invalidated`] once the clip no longer
    /// overlaps the source; every later call fails the same way without
    /// stepping the source again.
    fn advance_step(&mut self) -> Result<bool, GridError> {
        if self.invalidated {
            return Err(GridError::Invalidated {
                view: self.subfolder_path(),
                reason: "invalidated by an earlier step".into(),
            });
        }
        let changed = self.source.advance_step()?;
        if let Err(err) = check_overlap(&self.source, &self.min, &self.max) {
            self.invalidated = true;
            let err = err.invalidated(self.subfolder_path());
            tracing::warn!(view = %self.id, step = %self.source.step(), %err, "subsection invalidated");
            return Err(err);
        }
        tracing::debug!(view = %self.id, step = %self.source.step(), "subsection revalidated");
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

impl<T, S: CellValues<T>> CellValues<T> for Subsection<S> {
    fn value_at(&self, coord: &[i32]) -> T {
        self.source.value_at(coord)
    }
}
