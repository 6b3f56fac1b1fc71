//! Derived views described as data.
//!
//! A [`ViewSpec`] names one derived view without building it, so a chain
//! of views can be configured, validated against the source's
//! dimensionality and only then applied. [`ViewPipeline`] applies a list
//! of specs in order to a boxed model or region.

use aether_core::{CellValues, GridError, Model, PartialCoord, Region, StepId, ValueModel};
use std::path::Path;

use crate::cross_section::CrossSection;
use crate::diagonal::DiagonalCrossSection;
use crate::subsection::{check_clip, Subsection};

/// One derived view, as configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewSpec {
    /// Clip to per-axis bounds; `None` leaves a side open.
    Subsection {
        /// Lower bounds.
        min: PartialCoord,
        /// Upper bounds.
        max: PartialCoord,
    },
    /// Fix one axis to a constant.
    CrossSection {
        /// The fixed axis.
        axis: usize,
        /// Its value.
        coordinate: i32,
    },
    /// Tie `axis_b = ±axis_a + offset`.
    Diagonal {
        /// First axis as passed by the caller.
        axis_a: usize,
        /// Second axis as passed by the caller.
        axis_b: usize,
        /// Slope `+1` if true, `-1` otherwise.
        positive_slope: bool,
        /// Offset of the relation.
        offset: i32,
    },
}

impl ViewSpec {
    /// Check the spec against a source of `ndim` axes.
    ///
    /// Catches every error that does not depend on the source's bounds.
    pub fn validate(&self, ndim: usize) -> Result<(), GridError> {
        match self {
            Self::Subsection { min, max } => check_clip(ndim, min, max),
            Self::CrossSection { axis, .. } => {
                if *axis >= ndim {
                    return Err(GridError::AxisOutOfRange { axis: *axis, ndim });
                }
                Ok(())
            }
            Self::Diagonal { axis_a, axis_b, .. } => {
                for &axis in [axis_a, axis_b] {
                    if axis >= ndim {
                        return Err(GridError::AxisOutOfRange { axis, ndim });
                    }
                }
                if axis_a == axis_b {
                    return Err(GridError::EqualAxes { axis: *axis_a });
                }
                Ok(())
            }
        }
    }

    /// Number of axes of the view built on a source of `ndim` axes.
    pub fn output_ndim(&self, ndim: usize) -> usize {
        match self {
            Self::Subsection { .. } => ndim,
            Self::CrossSection { .. } | Self::Diagonal { .. } => ndim.saturating_sub(1),
        }
    }

    /// Build the view on `source`.
    pub fn apply<S: Region>(&self, source: S) -> Result<View<S>, GridError> {
        match self {
            Self::Subsection { min, max } => {
                Subsection::new(source, min.clone(), max.clone()).map(View::Subsection)
            }
            Self::CrossSection { axis, coordinate } => {
                CrossSection::new(source, *axis, *coordinate).map(View::CrossSection)
            }
            Self::Diagonal {
                axis_a,
                axis_b,
                positive_slope,
                offset,
            } => DiagonalCrossSection::new(source, *axis_a, *axis_b, *positive_slope, *offset)
                .map(View::Diagonal),
        }
    }
}

/// A view built from a [`ViewSpec`].
#[derive(Clone, Debug)]
pub enum View<S> {
    /// See [`Subsection`].
    Subsection(Subsection<S>),
    /// See [`CrossSection`].
    CrossSection(CrossSection<S>),
    /// See [`DiagonalCrossSection`].
    Diagonal(DiagonalCrossSection<S>),
}

macro_rules! dispatch {
    ($self:expr, $view:ident => $body:expr) => {
        match $self {
            View::Subsection($view) => $body,
            View::CrossSection($view) => $body,
            View::Diagonal($view) => $body,
        }
    };
}

impl<S: Region> View<S> {
    /// Export-path segment of the underlying view.
    pub fn path_suffix(&self) -> String {
        dispatch!(self, v => v.path_suffix())
    }

    /// Whether a step has invalidated the underlying view.
    pub fn is_invalidated(&self) -> bool {
        dispatch!(self, v => v.is_invalidated())
    }
}

impl<S: Region> Region for View<S> {
    fn ndim(&self) -> usize {
        dispatch!(self, v => v.ndim())
    }

    fn min_coord(&self, axis: usize) -> i32 {
        dispatch!(self, v => v.min_coord(axis))
    }

    fn max_coord(&self, axis: usize) -> i32 {
        dispatch!(self, v => v.max_coord(axis))
    }

    fn min_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        dispatch!(self, v => v.min_coord_at(axis, fixed))
    }

    fn max_coord_at(&self, axis: usize, fixed: &PartialCoord) -> i32 {
        dispatch!(self, v => v.max_coord_at(axis, fixed))
    }

    fn axis_label(&self, axis: usize) -> String {
        dispatch!(self, v => v.axis_label(axis))
    }
}

impl<S: Model> Model for View<S> {
    fn advance_step(&mut self) -> Result<bool, GridError> {
        dispatch!(self, v => v.advance_step())
    }

    fn is_changed(&self) -> Option<bool> {
        dispatch!(self, v => v.is_changed())
    }

    fn step(&self) -> StepId {
        dispatch!(self, v => v.step())
    }

    fn name(&self) -> String {
        dispatch!(self, v => v.name())
    }

    fn subfolder_path(&self) -> String {
        dispatch!(self, v => v.subfolder_path())
    }

    fn back_up(&self, dir: &Path, name: &str) -> Result<(), GridError> {
        dispatch!(self, v => v.back_up(dir, name))
    }
}

impl<T, S: CellValues<T>> CellValues<T> for View<S> {
    fn value_at(&self, coord: &[i32]) -> T {
        dispatch!(self, v => v.value_at(coord))
    }
}

/// An ordered chain of [`ViewSpec`]s.
///
/// ```
/// use aether_core::{PartialCoord, Region};
/// use aether_grid::{ViewPipeline, ViewSpec, Wedge};
///
/// let pipeline = ViewPipeline::new()
///     .with(ViewSpec::CrossSection { axis: 0, coordinate: 3 })
///     .with(ViewSpec::Subsection {
///         min: PartialCoord::free(4).with(0, 1),
///         max: PartialCoord::free(4),
///     });
/// assert_eq!(pipeline.validate(5), Ok(4));
///
/// let view = pipeline.apply_region(Box::new(Wedge::new(5, 3).unwrap())).unwrap();
/// assert_eq!(view.min_coord(0), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewPipeline {
    specs: Vec<ViewSpec>,
}

impl ViewPipeline {
    /// An empty pipeline; applying it returns the source unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a spec.
    pub fn with(mut self, spec: ViewSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Append a spec in place.
    pub fn push(&mut self, spec: ViewSpec) {
        self.specs.push(spec);
    }

    /// The specs in application order.
    pub fn specs(&self) -> &[ViewSpec] {
        &self.specs
    }

    /// Validate every spec against the dimensionality it will see.
    ///
    /// Returns the dimensionality of the final view.
    pub fn validate(&self, ndim: usize) -> Result<usize, GridError> {
        self.specs.iter().try_fold(ndim, |ndim, spec| {
            spec.validate(ndim)?;
            Ok(spec.output_ndim(ndim))
        })
    }

    /// Apply every spec in order to a model.
    ///
    /// The whole chain is validated before any view is built.
    pub fn apply<T: 'static>(
        &self,
        source: Box<dyn ValueModel<T>>,
    ) -> Result<Box<dyn ValueModel<T>>, GridError> {
        self.validate(source.ndim())?;
        let view = self.specs.iter().try_fold(source, |current, spec| {
            spec.apply(current)
                .map(|view| Box::new(view) as Box<dyn ValueModel<T>>)
        })?;
        tracing::debug!(views = self.specs.len(), path = %view.subfolder_path(), "view pipeline applied");
        Ok(view)
    }

    /// Apply every spec in order to a bounds-only region.
    pub fn apply_region(&self, source: Box<dyn Region>) -> Result<Box<dyn Region>, GridError> {
        self.validate(source.ndim())?;
        let view = self.specs.iter().try_fold(source, |current, spec| {
            spec.apply(current).map(|view| Box::new(view) as Box<dyn Region>)
        })?;
        tracing::debug!(views = self.specs.len(), ndim = view.ndim(), "view pipeline applied");
        Ok(view)
    }
}
