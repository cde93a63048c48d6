use crate::coord::{Coord, FlatCoord};
use crate::error::{GeomError, Result};
use crate::flat::{double_area, inflate_coords, length, reverse_coords, verify_coords};
use crate::geometry::{LineString, LinearRing};
use crate::layout::Layout;
use crate::trait_::FlatGeometry;

/// A line string borrowed from the buffer of a larger geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStringRef<'a> {
    layout: Layout,
    flat_coords: &'a [f64],
    srid: i32,
}

impl<'a> LineStringRef<'a> {
    pub(crate) fn new(layout: Layout, flat_coords: &'a [f64], srid: i32) -> Self {
        Self {
            layout,
            flat_coords,
            srid,
        }
    }

    /// Borrow coordinate `i`.
    pub fn coord(&self, i: usize) -> FlatCoord<'a> {
        FlatCoord::new(self.flat_coords, i, self.layout)
    }

    /// Copy all coordinates.
    pub fn coords(&self) -> Vec<Coord> {
        inflate_coords(
            self.flat_coords,
            0,
            self.flat_coords.len(),
            self.layout.stride(),
        )
    }

    /// The planar length of the path.
    pub fn length(&self) -> f64 {
        length(
            self.flat_coords,
            0,
            self.flat_coords.len(),
            self.layout.stride(),
        )
    }
}

impl FlatGeometry for LineStringRef<'_> {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn flat_coords(&self) -> &[f64] {
        self.flat_coords
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn verify(&self) -> Result<()> {
        verify_coords(self.layout, self.flat_coords)
    }
}

impl<'a> From<&'a LineString> for LineStringRef<'a> {
    fn from(value: &'a LineString) -> Self {
        Self::new(value.layout, &value.flat_coords, value.srid)
    }
}

/// A ring borrowed from the buffer of a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRingRef<'a> {
    layout: Layout,
    flat_coords: &'a [f64],
    srid: i32,
}

impl<'a> LinearRingRef<'a> {
    pub(crate) fn new(layout: Layout, flat_coords: &'a [f64], srid: i32) -> Self {
        Self {
            layout,
            flat_coords,
            srid,
        }
    }

    /// Borrow coordinate `i`.
    pub fn coord(&self, i: usize) -> FlatCoord<'a> {
        FlatCoord::new(self.flat_coords, i, self.layout)
    }

    /// Copy all coordinates.
    pub fn coords(&self) -> Vec<Coord> {
        inflate_coords(
            self.flat_coords,
            0,
            self.flat_coords.len(),
            self.layout.stride(),
        )
    }

    /// The signed planar area, positive for counter-clockwise rings.
    pub fn area(&self) -> f64 {
        double_area(
            self.flat_coords,
            0,
            self.flat_coords.len(),
            self.layout.stride(),
        ) / 2.
    }

    /// The perimeter.
    pub fn length(&self) -> f64 {
        length(
            self.flat_coords,
            0,
            self.flat_coords.len(),
            self.layout.stride(),
        )
    }
}

impl FlatGeometry for LinearRingRef<'_> {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn flat_coords(&self) -> &[f64] {
        self.flat_coords
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn verify(&self) -> Result<()> {
        verify_coords(self.layout, self.flat_coords)
    }
}

impl<'a> From<&'a LinearRing> for LinearRingRef<'a> {
    fn from(value: &'a LinearRing) -> Self {
        Self::new(value.layout, &value.flat_coords, value.srid)
    }
}

/// A mutable view onto a run of coordinates inside a larger geometry.
///
/// Changes made through the view land directly in the parent's buffer.
#[derive(Debug)]
pub struct LineStringMut<'a> {
    layout: Layout,
    flat_coords: &'a mut [f64],
}

impl<'a> LineStringMut<'a> {
    pub(crate) fn new(layout: Layout, flat_coords: &'a mut [f64]) -> Self {
        Self {
            layout,
            flat_coords,
        }
    }

    /// The layout of the parent geometry.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The number of coordinates in the view.
    pub fn num_coords(&self) -> usize {
        match self.layout.stride() {
            0 => 0,
            stride => self.flat_coords.len() / stride,
        }
    }

    /// Borrow the viewed values.
    pub fn flat_coords(&self) -> &[f64] {
        &*self.flat_coords
    }

    /// Mutably borrow the viewed values.
    pub fn flat_coords_mut(&mut self) -> &mut [f64] {
        &mut *self.flat_coords
    }

    /// Overwrite coordinate `i`.
    pub fn try_set_coord(&mut self, i: usize, coord: &[f64]) -> Result<()> {
        let stride = self.layout.stride();
        if coord.len() != stride {
            return Err(GeomError::StrideMismatch {
                got: coord.len(),
                want: stride,
            });
        }
        self.flat_coords[i * stride..(i + 1) * stride].copy_from_slice(coord);
        Ok(())
    }

    /// Like [`LineStringMut::try_set_coord`], panicking on a stride mismatch.
    pub fn set_coord(&mut self, i: usize, coord: &[f64]) {
        self.try_set_coord(i, coord).unwrap()
    }

    /// Reverse the viewed coordinates in place.
    pub fn reverse(&mut self) {
        let end = self.flat_coords.len();
        reverse_coords(&mut *self.flat_coords, 0, end, self.layout.stride());
    }
}
