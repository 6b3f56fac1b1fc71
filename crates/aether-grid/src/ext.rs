//! Builder methods for derived views on any region.

use aether_core::{Axis5, GridError, PartialCoord, Region};

use crate::cross_section::CrossSection;
use crate::decorator::{As5D, Decorator};
use crate::diagonal::DiagonalCrossSection;
use crate::iter::Cells;
use crate::subsection::Subsection;

/// Derived-view constructors, blanket-implemented for every sized
/// [`Region`].
///
/// Each builder consumes the region; pass `&region` (or `&mut region` to
/// step it through the view) to keep ownership.
///
/// ```
/// use aether_core::{Axis5, Region};
/// use aether_grid::{RegionExt, Wedge};
///
/// let wedge = Wedge::new(5, 4).unwrap();
/// let view = (&wedge)
///     .cross_section_at(Axis5::V, 3)
///     .unwrap()
///     .diagonal_cross_section(0, 1, true, -1)
///     .unwrap();
/// assert_eq!(view.ndim(), 3);
/// assert_eq!(view.path_suffix(), "/x=w-1");
/// // x = w - 1 for w in [1, 3], then 3 ≥ w ≥ x ≥ y ≥ z.
/// assert_eq!(view.cells().count(), 1 + 3 + 6);
/// ```
pub trait RegionExt: Region + Sized {
    /// Clip to `min`/`max`; see [`Subsection::new`].
    fn subsection(self, min: PartialCoord, max: PartialCoord) -> Result<Subsection<Self>, GridError> {
        Subsection::new(self, min, max)
    }

    /// Clip a 5D region with one optional bound per side and axis.
    fn subsection_5d(
        self,
        min: [Option<i32>; 5],
        max: [Option<i32>; 5],
    ) -> Result<Subsection<Self>, GridError> {
        Subsection::new(self, PartialCoord::from(min), PartialCoord::from(max))
    }

    /// Fix `axis` to `coordinate`; see [`CrossSection::new`].
    fn cross_section(self, axis: usize, coordinate: i32) -> Result<CrossSection<Self>, GridError> {
        CrossSection::new(self, axis, coordinate)
    }

    /// Fix a named axis of a 5D region.
    fn cross_section_at(self, axis: Axis5, coordinate: i32) -> Result<CrossSection<Self>, GridError> {
        if self.ndim() != 5 {
            return Err(GridError::DimensionMismatch {
                expected: 5,
                actual: self.ndim(),
            });
        }
        CrossSection::new(self, axis.index(), coordinate)
    }

    /// Tie two axes along a diagonal; see [`DiagonalCrossSection::new`].
    fn diagonal_cross_section(
        self,
        axis_a: usize,
        axis_b: usize,
        positive_slope: bool,
        offset: i32,
    ) -> Result<DiagonalCrossSection<Self>, GridError> {
        DiagonalCrossSection::new(self, axis_a, axis_b, positive_slope, offset)
    }

    /// Pin the dimensionality to five; see [`As5D::new`].
    fn as_5d(self) -> Result<As5D<Self>, GridError> {
        As5D::new(self)
    }

    /// Wrap in a pass-through [`Decorator`].
    fn decorated(self) -> Decorator<Self> {
        Decorator::new(self)
    }

    /// Iterate over every cell in axis order.
    fn cells(&self) -> Cells<&Self> {
        Cells::new(self)
    }
}

impl<R: Region> RegionExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyperrect::Hyperrectangle;
    use crate::isotropic::{IsotropicHypercube, Wedge};
    use crate::symmetric::SymmetricRegion;

    #[test]
    fn subsection_5d_matches_partial_form() {
        let wedge = Wedge::new(5, 4).unwrap();
        let a = (&wedge)
            .subsection_5d([Some(1), None, None, None, None], [None, None, None, Some(2), None])
            .unwrap();
        let b = (&wedge)
            .subsection(
                PartialCoord::free(5).with(0, 1),
                PartialCoord::free(5).with(3, 2),
            )
            .unwrap();
        assert_eq!(a.cells().collect::<Vec<_>>(), b.cells().collect::<Vec<_>>());
        assert_eq!(a.path_suffix(), "/v[1,inf)_y(-inf,2]");
    }

    #[test]
    fn named_cross_section_requires_5d() {
        let rect = Hyperrectangle::new(&[0; 3], &[2; 3]).unwrap();
        assert!(matches!(
            rect.cross_section_at(Axis5::V, 0),
            Err(GridError::DimensionMismatch { .. })
        ));
        let cube = IsotropicHypercube::new(5, 2).unwrap();
        let section = cube.cross_section_at(Axis5::Z, -2).unwrap();
        assert_eq!(section.path_suffix(), "/z=-2");
    }

    #[test]
    fn chained_views_compose_paths_and_bounds() {
        let cube = IsotropicHypercube::new(5, 3).unwrap();
        let view = cube
            .asymmetric_section()
            .cross_section(0, 3)
            .unwrap()
            .subsection(PartialCoord::free(4).with(0, 1), PartialCoord::free(4))
            .unwrap();
        // w ∈ [1, 3] under v = 3.
        assert_eq!((view.min_coord(0), view.max_coord(0)), (1, 3));
        assert_eq!(view.path_suffix(), "/w[1,inf)");
    }

    #[test]
    fn as_5d_and_decorated() {
        let wedge = Wedge::new(5, 2).unwrap();
        let typed = (&wedge).decorated().as_5d().unwrap();
        assert_eq!(typed.max(Axis5::W), 2);
        assert!(Wedge::new(4, 2).unwrap().as_5d().is_err());
    }
}
