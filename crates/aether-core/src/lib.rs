//! Core types and traits for Aether grids.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Aether workspace:
//! coordinates, axis names, identifiers, error types, and the [`Region`],
//! [`Model`] and [`CellValues`] traits that every grid and every derived
//! view implements.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod coord;
pub mod error;
pub mod id;
pub mod traits;

pub use axis::{default_axis_label, Axis5};
pub use coord::{Coord, PartialCoord};
pub use error::{ErrorKind, GridError};
pub use id::{StepId, ViewId};
pub use traits::{CellValues, Model, Region, ValueModel};
