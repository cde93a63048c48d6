//! Contains implementations of owned and borrowed coordinates.

mod flat;

use std::ops::{Deref, DerefMut};

use geo_traits::CoordTrait;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use flat::FlatCoord;

use crate::layout::Layout;

/// An owned coordinate: X, Y and, depending on the layout, Z and/or M.
///
/// A `Coord` returned by this crate never aliases the geometry it was read from.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord(Vec<f64>);

impl Coord {
    /// Create a coordinate from its ordinate values.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// A coordinate of the given layout with every ordinate set to NaN.
    pub fn nan(layout: Layout) -> Self {
        Self(vec![f64::NAN; layout.stride()])
    }

    /// The X ordinate.
    ///
    /// # Panics
    ///
    /// If the coordinate is empty.
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    /// The Y ordinate.
    ///
    /// # Panics
    ///
    /// If the coordinate has fewer than two ordinates.
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// The Z ordinate, if `layout` has one.
    pub fn z(&self, layout: Layout) -> Option<f64> {
        layout.z_index().and_then(|i| self.0.get(i).copied())
    }

    /// The M ordinate, if `layout` has one.
    pub fn m(&self, layout: Layout) -> Option<f64> {
        layout.m_index().and_then(|i| self.0.get(i).copied())
    }

    /// Compares the first `layout.stride()` ordinates of `self` and `other`.
    ///
    /// Unlike `==`, two NaN ordinates compare equal here.
    pub fn equal(&self, layout: Layout, other: &[f64]) -> bool {
        let stride = layout.stride();
        if self.0.len() < stride || other.len() < stride {
            return false;
        }
        self.0[..stride]
            .iter()
            .zip(&other[..stride])
            .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
    }

    /// Overwrite this coordinate with the values in `other`.
    pub fn set(&mut self, other: &[f64]) {
        self.0.clear();
        self.0.extend_from_slice(other);
    }

    /// Return `true` if every ordinate is NaN.
    pub fn is_nan(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|v| v.is_nan())
    }

    /// Consume the coordinate and return its ordinate values.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Coord {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Coord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<[f64]> for Coord {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Coord {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

impl From<&[f64]> for Coord {
    fn from(value: &[f64]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Coord {
    fn from(value: [f64; N]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Coord {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl PartialEq<[f64]> for Coord {
    fn eq(&self, other: &[f64]) -> bool {
        self.0.as_slice() == other
    }
}

impl CoordTrait for Coord {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Unknown(self.0.len())
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        self.0[n]
    }

    fn x(&self) -> Self::T {
        self.0[0]
    }

    fn y(&self) -> Self::T {
        self.0[1]
    }
}

impl CoordTrait for &Coord {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Unknown(self.0.len())
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        self.0[n]
    }

    fn x(&self) -> Self::T {
        self.0[0]
    }

    fn y(&self) -> Self::T {
        self.0[1]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordinates_by_layout() {
        let c = Coord::from([1., 2., 3., 4.]);
        assert_eq!(c.x(), 1.);
        assert_eq!(c.y(), 2.);
        assert_eq!(c.z(Layout::XYZM), Some(3.));
        assert_eq!(c.m(Layout::XYZM), Some(4.));
        assert_eq!(c.z(Layout::XYM), None);
        assert_eq!(c.m(Layout::XYM), Some(3.));
    }

    #[test]
    fn equal_treats_nan_as_equal() {
        let nan = Coord::nan(Layout::XY);
        assert!(nan.is_nan());
        assert_ne!(nan, Coord::nan(Layout::XY));
        assert!(nan.equal(Layout::XY, &[f64::NAN, f64::NAN]));
        assert!(!nan.equal(Layout::XY, &[f64::NAN, 0.]));
    }

    #[test]
    fn equal_only_looks_at_layout_ordinates() {
        let c = Coord::from([1., 2., 3.]);
        assert!(c.equal(Layout::XY, &[1., 2., 99.]));
        assert!(!c.equal(Layout::XYZ, &[1., 2., 99.]));
        assert!(!c.equal(Layout::XYZM, &[1., 2., 3.]));
    }

    #[test]
    fn set_replaces_values() {
        let mut c = Coord::from([1., 2.]);
        c.set(&[5., 6., 7.]);
        assert_eq!(c, [5., 6., 7.]);
    }
}
