use geo_traits::CoordTrait;

use crate::coord::Coord;
use crate::layout::Layout;

/// A borrowed coordinate inside a flat buffer.
///
/// This implements [CoordTrait], which you can use to extract data.
#[derive(Debug, Clone, Copy)]
pub struct FlatCoord<'a> {
    pub(crate) coords: &'a [f64],
    pub(crate) i: usize,
    pub(crate) layout: Layout,
}

impl<'a> FlatCoord<'a> {
    /// Borrow coordinate `i` of a flat buffer laid out with `layout`.
    ///
    /// # Panics
    ///
    /// If coordinate `i` lies outside the buffer.
    pub fn new(coords: &'a [f64], i: usize, layout: Layout) -> Self {
        assert!((i + 1) * layout.stride() <= coords.len());
        Self { coords, i, layout }
    }

    /// The values of this coordinate.
    pub fn as_slice(&self) -> &'a [f64] {
        let stride = self.layout.stride();
        &self.coords[self.i * stride..(self.i + 1) * stride]
    }

    /// The layout of the buffer this coordinate lives in.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Return `true` if all values in the coordinate are f64::NAN
    pub fn is_nan(&self) -> bool {
        (0..self.layout.stride()).all(|n| self.nth_or_panic(n).is_nan())
    }
}

impl PartialEq for FlatCoord<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.layout == other.layout && self.as_slice() == other.as_slice()
    }
}

impl From<FlatCoord<'_>> for Coord {
    fn from(value: FlatCoord<'_>) -> Self {
        Coord::from(value.as_slice())
    }
}

impl From<FlatCoord<'_>> for geo_types::Coord {
    fn from(value: FlatCoord<'_>) -> Self {
        geo_types::Coord {
            x: value.x(),
            y: value.y(),
        }
    }
}

impl CoordTrait for FlatCoord<'_> {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        self.layout.into()
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        debug_assert!(n < self.layout.stride());
        self.coords[self.i * self.layout.stride() + n]
    }

    fn x(&self) -> Self::T {
        self.coords[self.i * self.layout.stride()]
    }

    fn y(&self) -> Self::T {
        self.coords[self.i * self.layout.stride() + 1]
    }
}

impl CoordTrait for &FlatCoord<'_> {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        self.layout.into()
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        debug_assert!(n < self.layout.stride());
        self.coords[self.i * self.layout.stride() + n]
    }

    fn x(&self) -> Self::T {
        self.coords[self.i * self.layout.stride()]
    }

    fn y(&self) -> Self::T {
        self.coords[self.i * self.layout.stride() + 1]
    }
}
