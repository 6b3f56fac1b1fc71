//! Aether: symmetric regions, sub-regions and cross-sections for
//! N-dimensional cellular automaton grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Aether sub-crates. For most users, adding `aether` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use aether::prelude::*;
//!
//! // The wedge v ≥ w ≥ x ≥ y ≥ z ≥ 0 of a hypercube of half-width 3.
//! let cube = IsotropicHypercube::new(5, 3).unwrap();
//! let wedge = cube.asymmetric_section();
//!
//! // Fix v = 3, then tie x to w along x = w - 1.
//! let view = (&wedge)
//!     .cross_section_at(Axis5::V, 3)
//!     .unwrap()
//!     .diagonal_cross_section(0, 1, true, -1)
//!     .unwrap();
//! assert_eq!(view.ndim(), 3);
//! assert_eq!(view.path_suffix(), "/x=w-1");
//!
//! // Values live in a dense grid; aggregates walk any view of it.
//! let grid = DenseGrid::from_fn(&[0, 0], &[4, 4], |c| c[0] + c[1]).unwrap();
//! let clipped = (&grid)
//!     .subsection(PartialCoord::from([Some(2), None]), PartialCoord::free(2))
//!     .unwrap();
//! assert_eq!(clipped.path_suffix(), "/x[2,inf)");
//! assert_eq!(clipped.min_and_max(), Some((2, 6)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `aether-core` | Coordinates, axis names, IDs, errors, region traits |
//! | [`grid`] | `aether-grid` | Region shapes, symmetry, sub-regions, cross-sections, pipelines |
//! | [`model`] | `aether-model` | Dense value storage and aggregates |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`aether-core`).
///
/// Contains coordinates, axis names, error types, and the fundamental
/// traits ([`types::Region`], [`types::Model`], [`types::CellValues`]).
pub use aether_core as types;

/// Regions and derived views (`aether-grid`).
///
/// Provides the concrete shapes ([`grid::IsotropicHypercube`],
/// [`grid::Wedge`], [`grid::Hyperrectangle`], [`grid::HypercubicPyramid`])
/// and the views built on them ([`grid::Subsection`],
/// [`grid::CrossSection`], [`grid::DiagonalCrossSection`]).
pub use aether_grid as grid;

/// Dense value storage and aggregates (`aether-model`).
pub use aether_model as model;

/// Common imports for typical Aether usage.
///
/// ```rust
/// use aether::prelude::*;
/// ```
///
/// This imports the region traits, coordinate types, the concrete region
/// shapes, the view builders and the aggregate trait.
pub mod prelude {
    // Core types and traits
    pub use aether_core::{
        Axis5, CellValues, Coord, GridError, Model, PartialCoord, Region, StepId, ValueModel,
    };

    // Regions
    pub use aether_grid::{
        Hyperrectangle, HypercubicPyramid, IsotropicHypercube, SymmetricRegion, Wedge, WholeGrid,
    };

    // Views
    pub use aether_grid::{
        As5D, Cells, CrossSection, DiagonalCrossSection, Grid5D, RegionExt, Subsection,
        ViewPipeline, ViewSpec,
    };

    // Values
    pub use aether_model::{Aggregate, DenseGrid};
}
