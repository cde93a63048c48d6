#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo_traits::CoordTrait;

use crate::coord::{Coord, FlatCoord};
use crate::error::Result;
use crate::flat::{
    deflate_coord_trait, deflate_coords, inflate_coords, length, reverse_coords, verify_coords,
};
use crate::geometry::impl_geometry_common;
use crate::layout::Layout;
use crate::scalar::{LineStringMut, LineStringRef};
use crate::trait_::FlatGeometry;

/// A single unbroken path through zero or more coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineString {
    pub(crate) layout: Layout,
    pub(crate) flat_coords: Vec<f64>,
    pub(crate) srid: i32,
}

impl LineString {
    /// Create an empty line string with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: vec![],
            srid: 0,
        }
    }

    /// Create a line string from its flat coordinates.
    pub fn try_new(layout: Layout, flat_coords: Vec<f64>) -> Result<Self> {
        verify_coords(layout, &flat_coords)?;
        Ok(Self {
            layout,
            flat_coords,
            srid: 0,
        })
    }

    /// Like [`LineString::try_new`], panicking on invalid input.
    pub fn new_flat(layout: Layout, flat_coords: Vec<f64>) -> Self {
        Self::try_new(layout, flat_coords).unwrap()
    }

    /// Create a line string from structured coordinates.
    pub fn try_from_coords<C: AsRef<[f64]>>(layout: Layout, coords: &[C]) -> Result<Self> {
        let mut line_string = Self::new(layout);
        line_string.try_set_coords(coords)?;
        Ok(line_string)
    }

    /// Like [`LineString::try_from_coords`], panicking on a stride mismatch.
    pub fn from_coords<C: AsRef<[f64]>>(layout: Layout, coords: &[C]) -> Self {
        Self::try_from_coords(layout, coords).unwrap()
    }

    /// Replace all coordinates. On error the line string is left unchanged.
    pub fn try_set_coords<C: AsRef<[f64]>>(&mut self, coords: &[C]) -> Result<&mut Self> {
        self.flat_coords = deflate_coords(coords, self.layout.stride())?;
        Ok(self)
    }

    /// Like [`LineString::try_set_coords`], panicking on a stride mismatch.
    pub fn set_coords<C: AsRef<[f64]>>(&mut self, coords: &[C]) -> &mut Self {
        self.try_set_coords(coords).unwrap()
    }

    /// Append a coordinate.
    pub fn try_push_coord(&mut self, coord: &impl CoordTrait<T = f64>) -> Result<()> {
        deflate_coord_trait(&mut self.flat_coords, coord, self.layout.stride())
    }

    /// Like [`LineString::try_push_coord`], panicking on a stride mismatch.
    pub fn push_coord(&mut self, coord: &impl CoordTrait<T = f64>) {
        self.try_push_coord(coord).unwrap()
    }

    /// Borrow coordinate `i`.
    pub fn coord(&self, i: usize) -> FlatCoord<'_> {
        self.flat_coord(i)
    }

    /// Copy all coordinates.
    pub fn coords(&self) -> Vec<Coord> {
        inflate_coords(
            &self.flat_coords,
            0,
            self.flat_coords.len(),
            self.layout.stride(),
        )
    }

    /// Always zero.
    pub fn area(&self) -> f64 {
        0.
    }

    /// The planar length of the path.
    pub fn length(&self) -> f64 {
        length(
            &self.flat_coords,
            0,
            self.flat_coords.len(),
            self.layout.stride(),
        )
    }

    /// Reverse the order of the coordinates.
    pub fn reverse(&mut self) {
        let end = self.flat_coords.len();
        reverse_coords(&mut self.flat_coords, 0, end, self.layout.stride());
    }

    /// Locate `val` along ordinate `dim`, which must be non-decreasing along the path.
    ///
    /// Returns the index of the coordinate at or before `val` and the fraction of the way
    /// to the next coordinate. Values outside the range clamp to the first or last
    /// coordinate with a zero fraction. Returns `None` for an empty line string.
    pub fn interpolate(&self, val: f64, dim: usize) -> Option<(usize, f64)> {
        let stride = self.layout.stride();
        let flat_coords = &self.flat_coords;
        let n = flat_coords.len();
        if n == 0 {
            return None;
        }
        if val <= flat_coords[dim] {
            return Some((0, 0.));
        }
        if flat_coords[n - stride + dim] <= val {
            return Some(((n - 1) / stride, 0.));
        }
        let mut low = 0;
        let mut high = n / stride;
        while low < high {
            let mid = (low + high) / 2;
            if val < flat_coords[mid * stride + dim] {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        let i = low - 1;
        let val0 = flat_coords[i * stride + dim];
        if val == val0 {
            return Some((i, 0.));
        }
        let val1 = flat_coords[(i + 1) * stride + dim];
        Some((i, (val - val0) / (val1 - val0)))
    }

    /// Borrow coordinates `start..stop` as a line string.
    ///
    /// The returned view aliases this line string's buffer.
    pub fn sub_line_string(&self, start: usize, stop: usize) -> LineStringRef<'_> {
        let stride = self.layout.stride();
        LineStringRef::new(
            self.layout,
            &self.flat_coords[start * stride..stop * stride],
            self.srid,
        )
    }

    /// Mutably borrow coordinates `start..stop`.
    ///
    /// Writes through the returned view change this line string.
    pub fn sub_line_string_mut(&mut self, start: usize, stop: usize) -> LineStringMut<'_> {
        let stride = self.layout.stride();
        LineStringMut::new(
            self.layout,
            &mut self.flat_coords[start * stride..stop * stride],
        )
    }
}

impl_geometry_common!(LineString);

impl FlatGeometry for LineString {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn flat_coords(&self) -> &[f64] {
        &self.flat_coords
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn verify(&self) -> Result<()> {
        verify_coords(self.layout, &self.flat_coords)
    }
}

impl From<LineStringRef<'_>> for LineString {
    fn from(value: LineStringRef<'_>) -> Self {
        Self {
            layout: value.layout(),
            flat_coords: value.flat_coords().to_vec(),
            srid: value.srid(),
        }
    }
}
