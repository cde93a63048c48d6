#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo_traits::CoordTrait;

use crate::coord::{Coord, FlatCoord};
use crate::error::Result;
use crate::flat::{
    deflate_coord_trait, deflate_coords, double_area, inflate_coords, length, reverse_coords,
    verify_coords,
};
use crate::geometry::impl_geometry_common;
use crate::layout::Layout;
use crate::scalar::LinearRingRef;
use crate::trait_::FlatGeometry;

/// A line string that is expected, but not required, to be closed.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearRing {
    pub(crate) layout: Layout,
    pub(crate) flat_coords: Vec<f64>,
    pub(crate) srid: i32,
}

impl LinearRing {
    /// Create an empty ring with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: vec![],
            srid: 0,
        }
    }

    /// Create a ring from its flat coordinates.
    pub fn try_new(layout: Layout, flat_coords: Vec<f64>) -> Result<Self> {
        verify_coords(layout, &flat_coords)?;
        Ok(Self {
            layout,
            flat_coords,
            srid: 0,
        })
    }

    /// Like [`LinearRing::try_new`], panicking on invalid input.
    pub fn new_flat(layout: Layout, flat_coords: Vec<f64>) -> Self {
        Self::try_new(layout, flat_coords).unwrap()
    }

    /// Create a ring from structured coordinates.
    pub fn try_from_coords<C: AsRef<[f64]>>(layout: Layout, coords: &[C]) -> Result<Self> {
        let mut ring = Self::new(layout);
        ring.try_set_coords(coords)?;
        Ok(ring)
    }

    /// Like [`LinearRing::try_from_coords`], panicking on a stride mismatch.
    pub fn from_coords<C: AsRef<[f64]>>(layout: Layout, coords: &[C]) -> Self {
        Self::try_from_coords(layout, coords).unwrap()
    }

    /// Replace all coordinates. On error the ring is left unchanged.
    pub fn try_set_coords<C: AsRef<[f64]>>(&mut self, coords: &[C]) -> Result<&mut Self> {
        self.flat_coords = deflate_coords(coords, self.layout.stride())?;
        Ok(self)
    }

    /// Like [`LinearRing::try_set_coords`], panicking on a stride mismatch.
    pub fn set_coords<C: AsRef<[f64]>>(&mut self, coords: &[C]) -> &mut Self {
        self.try_set_coords(coords).unwrap()
    }

    /// Append a coordinate.
    pub fn try_push_coord(&mut self, coord: &impl CoordTrait<T = f64>) -> Result<()> {
        deflate_coord_trait(&mut self.flat_coords, coord, self.layout.stride())
    }

    /// Like [`LinearRing::try_push_coord`], panicking on a stride mismatch.
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

    /// The signed planar area, positive for counter-clockwise rings.
    pub fn area(&self) -> f64 {
        double_area(
            &self.flat_coords,
            0,
            self.flat_coords.len(),
            self.layout.stride(),
        ) / 2.
    }

    /// The perimeter.
    pub fn length(&self) -> f64 {
        length(
            &self.flat_coords,
            0,
            self.flat_coords.len(),
            self.layout.stride(),
        )
    }

    /// Reverse the winding of the ring.
    pub fn reverse(&mut self) {
        let end = self.flat_coords.len();
        reverse_coords(&mut self.flat_coords, 0, end, self.layout.stride());
    }
}

impl_geometry_common!(LinearRing);

impl FlatGeometry for LinearRing {
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

impl From<LinearRingRef<'_>> for LinearRing {
    fn from(value: LinearRingRef<'_>) -> Self {
        Self {
            layout: value.layout(),
            flat_coords: value.flat_coords().to_vec(),
            srid: value.srid(),
        }
    }
}
