//! Regions and derived views for Aether grids.
//!
//! This crate builds on the [`Region`](aether_core::Region) bound-query
//! contract from `aether-core`: concrete region shapes, symmetry sections,
//! and the derived views that clip, slice or decorate a source region
//! while following it as the simulation behind it advances.
//!
//! # Regions
//!
//! - [`IsotropicHypercube`]: `[-h, h]` on every axis, with the canonical
//!   wedge as its asymmetric section
//! - [`Wedge`]: the canonical wedge `a0 ≥ a1 ≥ … ≥ 0` on its own
//! - [`Hyperrectangle`]: an axis-aligned box
//! - [`HypercubicPyramid`]: a step pyramid on a hypercubic base
//! - [`WholeGrid`]: a wedge-shaped source unfolded into the full grid
//!
//! # Derived views
//!
//! | View | Axes | Export path segment |
//! |------|------|---------------------|
//! | [`Subsection`] | N | `/v[0,5]_z(-inf,3]` |
//! | [`CrossSection`] | N-1 | `/x=2` |
//! | [`DiagonalCrossSection`] | N-1 | `/w=-v-2` |
//! | [`AsymmetricSection`] | N | none |
//! | [`Decorator`], [`As5D`] | N | none |
//!
//! Views own their source. Build them on `&region` or `&mut region` to
//! keep the source, or chain them through [`RegionExt`]. A view whose
//! source evolves out from under it fails its next
//! [`advance_step`](aether_core::Model::advance_step) with
//! [`GridError::Invalidated`](aether_core::GridError::Invalidated) and
//! must be discarded.
//!
//! [`ViewSpec`] and [`ViewPipeline`] describe chains of views as data that
//! is validated before anything is built.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cross_section;
pub mod decorator;
pub mod diagonal;
pub mod ext;
pub mod grid5d;
pub mod hyperrect;
pub mod isotropic;
pub mod iter;
pub mod pyramid;
pub mod subsection;
pub mod symmetric;
pub mod view;

#[cfg(test)]
pub(crate) mod compliance;

pub use cross_section::CrossSection;
pub use decorator::{As5D, Decorator};
pub use diagonal::DiagonalCrossSection;
pub use ext::RegionExt;
pub use grid5d::Grid5D;
pub use hyperrect::Hyperrectangle;
pub use isotropic::{wedge_max_coord, wedge_min_coord, IsotropicHypercube, Wedge};
pub use iter::Cells;
pub use pyramid::HypercubicPyramid;
pub use subsection::{check_clip, Subsection};
pub use symmetric::{AsymmetricSection, SymmetricRegion, WholeGrid};
pub use view::{View, ViewPipeline, ViewSpec};
