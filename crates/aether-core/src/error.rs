//! Error types for region queries, derived views and the model lifecycle.
//!
//! Every failure is immediate and synchronous. [`GridError::kind`] sorts
//! the variants into the three classes callers care about: bad arguments
//! at construction, views invalidated by a simulation step, and failures
//! of the external simulation itself.

use std::error::Error;
use std::fmt;

/// Broad classification of a [`GridError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed an argument the region cannot satisfy.
    InvalidArgument,
    /// A previously valid view no longer fits its source after a step.
    /// The view must be discarded.
    Invalidated,
    /// The simulation behind a model failed.
    Collaborator,
}

/// Errors arising from region construction, derived views or models.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// An axis index is outside `[0, ndim)`.
    AxisOutOfRange {
        /// The offending axis index.
        axis: usize,
        /// Dimensionality of the region.
        ndim: usize,
    },
    /// A diagonal cross-section was requested on a single axis.
    EqualAxes {
        /// The axis passed twice.
        axis: usize,
    },
    /// The region or coordinate has the wrong number of axes.
    DimensionMismatch {
        /// Expected number of axes.
        expected: usize,
        /// Number of axes actually supplied.
        actual: usize,
    },
    /// A requested lower bound exceeds the requested upper bound.
    InvertedBounds {
        /// Axis of the inverted pair.
        axis: usize,
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
    /// A sub-region request leaves every axis unbounded.
    UnboundedSubsection,
    /// A sub-region request does not overlap its source on some axis.
    EmptyIntersection {
        /// Axis with no overlap.
        axis: usize,
        /// Effective lower bound after clamping.
        min: i32,
        /// Effective upper bound after clamping.
        max: i32,
    },
    /// A cross-section coordinate lies outside the source's bounds.
    CoordinateOutOfBounds {
        /// The fixed axis.
        axis: usize,
        /// The requested coordinate.
        coordinate: i32,
        /// Source lower bound on that axis.
        min: i32,
        /// Source upper bound on that axis.
        max: i32,
    },
    /// A diagonal `second = slope * first + offset` misses the source.
    DiagonalMiss {
        /// Parameter axis of the diagonal.
        first: usize,
        /// Eliminated axis of the diagonal.
        second: usize,
        /// Slope, `1` or `-1`.
        slope: i32,
        /// Offset of the diagonal.
        offset: i32,
    },
    /// A region parameter is invalid (negative size, empty shape, ...).
    InvalidShape {
        /// What went wrong.
        reason: String,
    },
    /// A derived view was invalidated by its source advancing a step.
    Invalidated {
        /// Description of the view, usually its export path.
        view: String,
        /// The condition that no longer holds.
        reason: String,
    },
    /// The simulation failed while advancing a step.
    Simulation {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// Writing a backup failed.
    Backup {
        /// Destination directory of the backup.
        path: String,
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl GridError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Invalidated { .. } => ErrorKind::Invalidated,
            Self::Simulation { .. } | Self::Backup { .. } => ErrorKind::Collaborator,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Re-express a construction-time condition found after a step.
    ///
    /// Invalid-argument errors become [`GridError::Invalidated`] for
    /// `view`; other errors pass through unchanged so that simulation
    /// failures keep their original meaning.
    pub fn invalidated(self, view: impl Into<String>) -> Self {
        match self.kind() {
            ErrorKind::InvalidArgument => Self::Invalidated {
                view: view.into(),
                reason: self.to_string(),
            },
            _ => self,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AxisOutOfRange { axis, ndim } => {
                write!(f, "axis {axis} out of range for a {ndim}D region")
            }
            Self::EqualAxes { axis } => write!(f, "the axes cannot be equal (both {axis})"),
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "expected {expected} axes, got {actual}")
            }
            Self::InvertedBounds { axis, min, max } => {
                write!(f, "min ({min}) > max ({max}) on axis {axis}")
            }
            Self::UnboundedSubsection => {
                write!(f, "a subsection needs at least one bound")
            }
            Self::EmptyIntersection { axis, min, max } => write!(
                f,
                "subsection does not overlap its source on axis {axis} ([{min}, {max}])"
            ),
            Self::CoordinateOutOfBounds {
                axis,
                coordinate,
                min,
                max,
            } => write!(
                f,
                "coordinate {coordinate} on axis {axis} outside source bounds [{min}, {max}]"
            ),
            Self::DiagonalMiss {
                first,
                second,
                slope,
                offset,
            } => write!(
                f,
                "diagonal axis{second} = {slope}*axis{first} + {offset} misses the source"
            ),
            Self::InvalidShape { reason } => write!(f, "invalid shape: {reason}"),
            Self::Invalidated { view, reason } => {
                write!(f, "view '{view}' invalidated: {reason}")
            }
            Self::Simulation { reason } => write!(f, "simulation failed: {reason}"),
            Self::Backup { path, reason } => write!(f, "backup to '{path}' failed: {reason}"),
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            GridError::EqualAxes { axis: 1 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            GridError::Simulation {
                reason: "boom".into()
            }
            .kind(),
            ErrorKind::Collaborator
        );
        assert_eq!(
            GridError::Invalidated {
                view: "/v=1".into(),
                reason: "gone".into()
            }
            .kind(),
            ErrorKind::Invalidated
        );
    }

    #[test]
    fn invalidated_wraps_argument_errors_only() {
        let err = GridError::CoordinateOutOfBounds {
            axis: 0,
            coordinate: 7,
            min: 0,
            max: 3,
        }
        .invalidated("/v=7");
        assert_eq!(err.kind(), ErrorKind::Invalidated);
        assert!(err.to_string().contains("/v=7"));

        let sim = GridError::Simulation {
            reason: "disk full".into(),
        };
        assert_eq!(sim.clone().invalidated("/v=7"), sim);
    }
}
