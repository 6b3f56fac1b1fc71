//! Axis names for the five-dimensional grid and default labels for others.

use crate::error::GridError;
use std::fmt;

/// The five axes of a 5D grid, in canonical order.
///
/// The canonical order is also the nesting order of every cell iteration
/// (`v` outermost, `z` innermost) and the order of the wedge invariant
/// `v ≥ w ≥ x ≥ y ≥ z ≥ 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis5 {
    /// First axis.
    V = 0,
    /// Second axis.
    W = 1,
    /// Third axis.
    X = 2,
    /// Fourth axis.
    Y = 3,
    /// Fifth axis.
    Z = 4,
}

impl Axis5 {
    /// All five axes in canonical order.
    pub const ALL: [Axis5; 5] = [Axis5::V, Axis5::W, Axis5::X, Axis5::Y, Axis5::Z];

    /// Index of the axis (0 for `V` through 4 for `Z`).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Default lowercase label of the axis.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Axis5::V => "v",
            Axis5::W => "w",
            Axis5::X => "x",
            Axis5::Y => "y",
            Axis5::Z => "z",
        }
    }
}

impl TryFrom<usize> for Axis5 {
    type Error = GridError;

    fn try_from(axis: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(axis)
            .copied()
            .ok_or(GridError::AxisOutOfRange { axis, ndim: 5 })
    }
}

impl fmt::Display for Axis5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Default label of `axis` in a grid of `ndim` dimensions.
///
/// Grids of up to three dimensions use `x, y, z`; 4D grids prepend `w`
/// and 5D grids prepend `v, w`. Higher dimensions fall back to `x0, x1, …`.
pub fn default_axis_label(ndim: usize, axis: usize) -> String {
    const LETTERS: [&str; 5] = ["v", "w", "x", "y", "z"];
    match ndim {
        1..=3 => LETTERS[2 + axis].to_string(),
        4 | 5 => LETTERS[5 - ndim + axis].to_string(),
        _ => format!("x{axis}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_roundtrips_through_index() {
        for axis in Axis5::ALL {
            assert_eq!(Axis5::try_from(axis.index()).unwrap(), axis);
        }
    }

    #[test]
    fn axis_out_of_range_rejected() {
        assert_eq!(
            Axis5::try_from(5),
            Err(GridError::AxisOutOfRange { axis: 5, ndim: 5 })
        );
    }

    #[test]
    fn default_labels_by_dimension() {
        let labels = |n: usize| (0..n).map(|a| default_axis_label(n, a)).collect::<Vec<_>>();
        assert_eq!(labels(1), ["x"]);
        assert_eq!(labels(2), ["x", "y"]);
        assert_eq!(labels(3), ["x", "y", "z"]);
        assert_eq!(labels(4), ["w", "x", "y", "z"]);
        assert_eq!(labels(5), ["v", "w", "x", "y", "z"]);
        assert_eq!(labels(6), ["x0", "x1", "x2", "x3", "x4", "x5"]);
    }

    #[test]
    fn label_matches_display() {
        assert_eq!(Axis5::Y.to_string(), "y");
        assert_eq!(Axis5::V.label(), default_axis_label(5, 0));
    }
}
