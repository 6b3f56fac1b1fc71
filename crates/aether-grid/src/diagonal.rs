//! Diagonal cross-sections: two axes tied by `second = ±first + offset`.
//!
//! The view is parameterised by the lower of the two axes, which keeps its
//! position and label; the higher axis is eliminated. The range of the
//! parameter is found by scanning the source along the line, starting at
//! the source's lower bound of the parameter axis, and cached together
//! with the envelope of every other axis over the scanned interval. The
//! cache is rebuilt whenever the source advances a step.
//!
//! The scan keeps the first contiguous run of valid parameter values. For
//! sources whose intersection with the line is not contiguous, later runs
//! are not part of the view.
//!
//! A conditional query with no feasible parameter value returns the empty
//! pair `(i32::MAX, i32::MIN)`.

use aether_core::{CellValues, Coord, GridError, Model, PartialCoord, Region, StepId, ViewId};
use smallvec::smallvec;
use std::path::Path;

/// Cached result of scanning the source along the diagonal.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Scan {
    param_min: i32,
    param_max: i32,
    /// Envelope of every source axis over the scanned interval, indexed by
    /// source axis. Entries for the two diagonal axes are unused.
    lo: Coord,
    hi: Coord,
    /// Source step the scan was computed for; `None` before any step.
    step: Option<StepId>,
}

fn line(slope: i32, offset: i32, a: i32) -> Option<i32> {
    slope.checked_mul(a)?.checked_add(offset)
}

fn scan<S: Region + ?Sized>(
    source: &S,
    first: usize,
    second: usize,
    slope: i32,
    offset: i32,
) -> Result<Scan, GridError> {
    let ndim = source.ndim();
    let mut found: Option<Scan> = None;
    for a in source.min_coord(first)..=source.max_coord(first) {
        let at_a = PartialCoord::free(ndim).with(first, a);
        let valid = line(slope, offset, a).filter(|&b| {
            b >= source.min_coord_at(second, &at_a) && b <= source.max_coord_at(second, &at_a)
        });
        tracing::trace!(a, b = ?valid, "diagonal scan");
        let Some(b) = valid else {
            if found.is_some() {
                break;
            }
            continue;
        };
        let on_line = at_a.with(second, b);
        let scan = found.get_or_insert_with(|| Scan {
            param_min: a,
            param_max: a,
            lo: smallvec![i32::MAX; ndim],
            hi: smallvec![i32::MIN; ndim],
            step: None,
        });
        scan.param_max = a;
        for axis in (0..ndim).filter(|&x| x != first && x != second) {
            scan.lo[axis] = scan.lo[axis].min(source.min_coord_at(axis, &on_line));
            scan.hi[axis] = scan.hi[axis].max(source.max_coord_at(axis, &on_line));
        }
    }
    found.ok_or(GridError::DiagonalMiss {
        first,
        second,
        slope,
        offset,
    })
}

/// An (N-1)-dimensional view of a source along `second = slope·first + offset`.
///
/// # Examples
///
/// ```
/// use aether_core::Region;
/// use aether_grid::{DiagonalCrossSection, Wedge};
///
/// // w = v through the wedge v ≥ w ≥ x ≥ y ≥ z ≥ 0.
/// let diagonal = DiagonalCrossSection::new(Wedge::new(5, 3).unwrap(), 0, 1, true, 0).unwrap();
/// assert_eq!((diagonal.min_coord(0), diagonal.max_coord(0)), (0, 3));
/// assert_eq!(diagonal.path_suffix(), "/w=v");
/// ```
#[derive(Clone, Debug)]
pub struct DiagonalCrossSection<S> {
    source: S,
    first: usize,
    second: usize,
    slope: i32,
    offset: i32,
    scan: Scan,
    id: ViewId,
    invalidated: bool,
}

impl<S: Region> DiagonalCrossSection<S> {
    /// Tie `axis_b` to `axis_a` by `axis_b = ±axis_a + offset`.
    ///
    /// The lower axis becomes the parameter. When `axis_a > axis_b` the
    /// relation is re-expressed with `axis_b` as the parameter: the offset
    /// is negated for a positive slope and kept for a negative one.
    ///
    /// # Errors
    ///
    /// - `AxisOutOfRange` if either axis is not an axis of the source.
    /// - `EqualAxes` if `axis_a == axis_b`.
    /// - `InvalidShape` if the offset cannot be negated.
    /// - `DiagonalMiss` if no point of the line lies in the source.
    pub fn new(
        source: S,
        axis_a: usize,
        axis_b: usize,
        positive_slope: bool,
        offset: i32,
    ) -> Result<Self, GridError> {
        let ndim = source.ndim();
        for axis in [axis_a, axis_b] {
            if axis >= ndim {
                return Err(GridError::AxisOutOfRange { axis, ndim });
            }
        }
        if axis_a == axis_b {
            return Err(GridError::EqualAxes { axis: axis_a });
        }
        let slope = if positive_slope { 1 } else { -1 };
        let (first, second, offset) = if axis_a < axis_b {
            (axis_a, axis_b, offset)
        } else if positive_slope {
            let negated = offset.checked_neg().ok_or_else(|| GridError::InvalidShape {
                reason: format!("diagonal offset {offset} cannot be negated"),
            })?;
            (axis_b, axis_a, negated)
        } else {
            (axis_b, axis_a, offset)
        };
        let scan = scan(&source, first, second, slope, offset)?;
        let diagonal = Self {
            source,
            first,
            second,
            slope,
            offset,
            scan,
            id: ViewId::next(),
            invalidated: false,
        };
        tracing::debug!(
            view = %diagonal.id,
            first,
            second,
            slope,
            offset,
            param_min = diagonal.scan.param_min,
            param_max = diagonal.scan.param_max,
            "diagonal cross-section built"
        );
        Ok(diagonal)
    }

    /// The parameter axis, as a source axis.
    pub fn first_axis(&self) -> usize {
        self.first
    }

    /// The eliminated source axis.
    pub fn second_axis(&self) -> usize {
        self.second
    }

    /// `1` or `-1`.
    pub fn slope(&self) -> i32 {
        self.slope
    }

    /// Offset of the normalised relation.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Cached parameter interval.
    pub fn param_range(&self) -> (i32, i32) {
        (self.scan.param_min, self.scan.param_max)
    }

    /// Source step the cached interval was computed for, `None` if it has
    /// not been recomputed since construction.
    pub fn cached_step(&self) -> Option<StepId> {
        self.scan.step
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
        if axis < self.second {
            axis
        } else {
            axis + 1
        }
    }

    /// Export-path segment, e.g. `/w=-v-2` for `w = -v - 2`.
    pub fn path_suffix(&self) -> String {
        let sign = if self.slope < 0 { "-" } else { "" };
        let offset = match self.offset {
            0 => String::new(),
            o if o > 0 => format!("+{o}"),
            o => o.to_string(),
        };
        format!(
            "/{}={sign}{}{offset}",
            self.source.axis_label(self.second),
            self.source.axis_label(self.first)
        )
    }

    fn lift(&self, fixed: &PartialCoord) -> PartialCoord {
        let mut lifted = PartialCoord::free(self.source.ndim());
        for (axis, c) in fixed.iter_fixed().filter(|&(a, _)| a < self.ndim()) {
            lifted.set(self.source_axis(axis), Some(c));
        }
        lifted
    }

    /// `lifted` pinned to the diagonal point at `a`, with `free_axis`
    /// cleared, if the fixed coordinates can belong to a source cell.
    ///
    /// `free_axis` is never the parameter axis: the parameter's own
    /// constraints must be part of the check.
    fn feasible_at(
        &self,
        lifted: &PartialCoord,
        a: i32,
        free_axis: Option<usize>,
    ) -> Option<PartialCoord> {
        let b = line(self.slope, self.offset, a)?;
        let mut pinned = lifted.clone().with(self.first, a).with(self.second, b);
        if let Some(axis) = free_axis {
            pinned.clear(axis);
        }
        self.source.contains_partial(&pinned).then_some(pinned)
    }

    fn params(&self) -> std::ops::RangeInclusive<i32> {
        self.scan.param_min..=self.scan.param_max
    }
}

impl<S: Region> Region for DiagonalCrossSection<S> {
    fn ndim(&self) -> usize {
        self.source.ndim() - 1
    }

    fn min_coord(&self, axis: usize) -> i32 {
        match self.source_axis(axis) {
            a if a == self.first => self.scan.param_min,
            a => self.scan.lo[a],
        }
    }

    fn max_coord(&self, axis: usize) -> i32 {
        match self.source_axis(axis) {
            a if a == self.first => self.scan.param_max,
            a => self.scan.hi[a],
        }
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        let target = self.source_axis(axis);
        let lifted = self.lift(fixed);
        if target == self.first {
            return self
                .params()
                .find(|&a| self.feasible_at(&lifted, a, None).is_some())
                .unwrap_or(i32::MAX);
        }
        if let Some(a) = lifted.get(self.first) {
            return match line(self.slope, self.offset, a) {
                Some(b) => self.source.min_coord_at(target, &lifted.with(self.second, b)),
                None => i32::MAX,
            };
        }
        self.params()
            .filter_map(|a| self.feasible_at(&lifted, a, Some(target)))
            .map(|pinned| self.source.min_coord_at(target, &pinned))
            .min()
            .unwrap_or(i32::MAX)
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        let target = self.source_axis(axis);
        let lifted = self.lift(fixed);
        if target == self.first {
            return self
                .params()
                .rev()
                .find(|&a| self.feasible_at(&lifted, a, None).is_some())
                .unwrap_or(i32::MIN);
        }
        if let Some(a) = lifted.get(self.first) {
            return match line(self.slope, self.offset, a) {
                Some(b) => self.source.max_coord_at(target, &lifted.with(self.second, b)),
                None => i32::MIN,
            };
        }
        self.params()
            .filter_map(|a| self.feasible_at(&lifted, a, Some(target)))
            .map(|pinned| self.source.max_coord_at(target, &pinned))
            .max()
            .unwrap_or(i32::MIN)
    }

    fn axis_label(&self, axis: usize) -> String {
        self.source.axis_label(self.source_axis(axis))
    }
}

impl<S: Model> Model for DiagonalCrossSection<S> {
    /// Advance the source and rescan the diagonal against its new bounds.
    fn advance_step(&mut self) -> Result<bool, GridError> {
        if self.invalidated {
            return Err(GridError::Invalidated {
                view: self.subfolder_path(),
                reason: "invalidated by an earlier step".into(),
            });
        }
        let changed = self.source.advance_step()?;
        match scan(&self.source, self.first, self.second, self.slope, self.offset) {
            Ok(scan) => {
                self.scan = Scan {
                    step: Some(self.source.step()),
                    ..scan
                };
                tracing::debug!(
                    view = %self.id,
                    step = %self.source.step(),
                    param_min = self.scan.param_min,
                    param_max = self.scan.param_max,
                    "diagonal cross-section rescanned"
                );
                Ok(changed)
            }
            Err(err) => {
                self.invalidated = true;
                let err = err.invalidated(self.subfolder_path());
                tracing::warn!(view = %self.id, step = %self.source.step(), %err, "diagonal cross-section invalidated");
                Err(err)
            }
        }
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

impl<T, S: CellValues<T>> CellValues<T> for DiagonalCrossSection<S> {
    fn value_at(&self, coord: &[i32]) -> T {
        let a = coord[self.first];
        let b = self.slope.saturating_mul(a).saturating_add(self.offset);
        let mut lifted: Coord = coord.iter().copied().collect();
        lifted.insert(self.second, b);
        self.source.value_at(&lifted)
    }
}
