//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing simulation step counter.
///
/// Incremented each time the simulation behind a model advances one step.
/// Derived views report the step of their source unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The step after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Counter for unique [`ViewId`] allocation.
static VIEW_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a derived view.
///
/// Allocated from a monotonic atomic counter via [`ViewId::next`]. Two
/// views built from the same source with the same parameters still get
/// different IDs, which keeps their log lines apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    /// Allocate a fresh, unique view ID.
    pub fn next() -> Self {
        Self(VIEW_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}
