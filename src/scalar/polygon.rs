use std::borrow::Cow;

use crate::coord::Coord;
use crate::error::Result;
use crate::flat::{double_area2, inflate_coords2, length2, verify_ends};
use crate::geometry::Polygon;
use crate::layout::Layout;
use crate::scalar::LinearRingRef;
use crate::trait_::FlatGeometry;

/// A polygon borrowed from the buffer of a multi polygon.
///
/// The ends are relative to the borrowed slice. They are only copied when the polygon does
/// not start at the beginning of its parent's buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRef<'a> {
    layout: Layout,
    flat_coords: &'a [f64],
    ends: Cow<'a, [usize]>,
    srid: i32,
}

impl<'a> PolygonRef<'a> {
    pub(crate) fn new(
        layout: Layout,
        flat_coords: &'a [f64],
        ends: Cow<'a, [usize]>,
        srid: i32,
    ) -> Self {
        Self {
            layout,
            flat_coords,
            ends,
            srid,
        }
    }

    /// The number of rings, shell included.
    pub fn num_linear_rings(&self) -> usize {
        self.ends.len()
    }

    /// Borrow ring `i`. Ring 0 is the shell.
    pub fn linear_ring(&self, i: usize) -> LinearRingRef<'a> {
        let offset = if i == 0 { 0 } else { self.ends[i - 1] };
        LinearRingRef::new(
            self.layout,
            &self.flat_coords[offset..self.ends[i]],
            self.srid,
        )
    }

    /// Iterate over the rings, shell first.
    pub fn linear_rings(&self) -> impl Iterator<Item = LinearRingRef<'a>> + '_ {
        (0..self.num_linear_rings()).map(|i| self.linear_ring(i))
    }

    /// Copy the coordinates of every ring.
    pub fn coords(&self) -> Vec<Vec<Coord>> {
        inflate_coords2(self.flat_coords, 0, &self.ends, self.layout.stride())
    }

    /// The signed planar area.
    pub fn area(&self) -> f64 {
        double_area2(self.flat_coords, 0, &self.ends, self.layout.stride()) / 2.
    }

    /// The total perimeter of all rings.
    pub fn length(&self) -> f64 {
        length2(self.flat_coords, 0, &self.ends, self.layout.stride())
    }
}

impl FlatGeometry for PolygonRef<'_> {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn flat_coords(&self) -> &[f64] {
        self.flat_coords
    }

    fn ends(&self) -> &[usize] {
        &self.ends
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn verify(&self) -> Result<()> {
        verify_ends(self.layout, self.flat_coords, &self.ends)
    }
}

impl<'a> From<&'a Polygon> for PolygonRef<'a> {
    fn from(value: &'a Polygon) -> Self {
        Self::new(
            value.layout,
            &value.flat_coords,
            Cow::Borrowed(&value.ends),
            value.srid,
        )
    }
}
