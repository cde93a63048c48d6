#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::{Coord, FlatCoord};
use crate::error::Result;
use crate::flat::{deflate_coord, inflate_coord, verify_point};
use crate::geometry::impl_geometry_common;
use crate::layout::Layout;
use crate::trait_::FlatGeometry;

/// A single position. A point with an empty buffer is the empty point.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub(crate) layout: Layout,
    pub(crate) flat_coords: Vec<f64>,
    pub(crate) srid: i32,
}

impl Point {
    /// Create an empty point with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: vec![],
            srid: 0,
        }
    }

    /// Create a point from its flat coordinates, which must be empty or hold one coordinate.
    pub fn try_new(layout: Layout, flat_coords: Vec<f64>) -> Result<Self> {
        verify_point(layout, &flat_coords)?;
        Ok(Self {
            layout,
            flat_coords,
            srid: 0,
        })
    }

    /// Like [`Point::try_new`], panicking on invalid input.
    pub fn new_flat(layout: Layout, flat_coords: Vec<f64>) -> Self {
        Self::try_new(layout, flat_coords).unwrap()
    }

    /// Create a point from a coordinate of exactly `layout.stride()` values.
    pub fn try_from_coords(layout: Layout, coord: &[f64]) -> Result<Self> {
        let mut point = Self::new(layout);
        point.try_set_coords(coord)?;
        Ok(point)
    }

    /// Like [`Point::try_from_coords`], panicking on a stride mismatch.
    pub fn from_coords(layout: Layout, coord: &[f64]) -> Self {
        Self::try_from_coords(layout, coord).unwrap()
    }

    /// Replace the coordinate. On error the point is left unchanged.
    pub fn try_set_coords(&mut self, coord: &[f64]) -> Result<&mut Self> {
        let mut flat_coords = Vec::with_capacity(self.layout.stride());
        deflate_coord(&mut flat_coords, coord, self.layout.stride())?;
        self.flat_coords = flat_coords;
        Ok(self)
    }

    /// Like [`Point::try_set_coords`], panicking on a stride mismatch.
    pub fn set_coords(&mut self, coord: &[f64]) -> &mut Self {
        self.try_set_coords(coord).unwrap()
    }

    /// Borrow the coordinate, or `None` for the empty point.
    pub fn coord(&self) -> Option<FlatCoord<'_>> {
        (!self.flat_coords.is_empty()).then(|| self.flat_coord(0))
    }

    /// Copy the coordinate. The empty point gives an empty coordinate.
    pub fn coords(&self) -> Coord {
        if self.flat_coords.is_empty() {
            return Coord::default();
        }
        inflate_coord(&self.flat_coords, 0, self.flat_coords.len(), self.layout.stride())
    }

    /// The X ordinate, `None` for the empty point.
    pub fn x(&self) -> Option<f64> {
        self.flat_coords.first().copied()
    }

    /// The Y ordinate, `None` for the empty point.
    pub fn y(&self) -> Option<f64> {
        self.flat_coords.get(1).copied()
    }

    /// The Z ordinate, `None` for the empty point or a layout without Z.
    pub fn z(&self) -> Option<f64> {
        self.layout
            .z_index()
            .and_then(|i| self.flat_coords.get(i).copied())
    }

    /// The M ordinate, `None` for the empty point or a layout without M.
    pub fn m(&self) -> Option<f64> {
        self.layout
            .m_index()
            .and_then(|i| self.flat_coords.get(i).copied())
    }

    /// Always zero.
    pub fn area(&self) -> f64 {
        0.
    }

    /// Always zero.
    pub fn length(&self) -> f64 {
        0.
    }
}

impl_geometry_common!(Point);

impl FlatGeometry for Point {
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
        verify_point(self.layout, &self.flat_coords)
    }
}
