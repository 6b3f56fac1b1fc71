//! Typed cell values for Aether regions.
//!
//! Regions describe bounds only. This crate adds the value side:
//!
//! - [`DenseGrid`]: row-major storage for a hyperrectangular block of
//!   cells, usable as a [`CellValues`](aether_core::CellValues) source
//!   for every derived view in `aether-grid`.
//! - [`Aggregate`]: totals and extrema over every cell of any region with
//!   values, driven entirely by the region's bound queries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod dense;

pub use aggregate::Aggregate;
pub use dense::DenseGrid;
