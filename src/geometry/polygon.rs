#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::{GeomError, Result};
use crate::flat::{
    deflate_coords2, double_area2, inflate_coords2, length2, reverse_coords2, verify_ends,
};
use crate::geometry::{impl_geometry_common, LinearRing};
use crate::layout::Layout;
use crate::scalar::{LinearRingRef, PolygonRef};
use crate::trait_::FlatGeometry;

/// A shell ring followed by zero or more hole rings.
///
/// Ring `i` occupies `flat_coords[ends[i - 1]..ends[i]]`, with ring 0 starting at offset 0.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub(crate) layout: Layout,
    pub(crate) flat_coords: Vec<f64>,
    pub(crate) ends: Vec<usize>,
    pub(crate) srid: i32,
}

impl Polygon {
    /// Create an empty polygon with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: vec![],
            ends: vec![],
            srid: 0,
        }
    }

    /// Create a polygon from its flat coordinates and ring ends.
    pub fn try_new(layout: Layout, flat_coords: Vec<f64>, ends: Vec<usize>) -> Result<Self> {
        verify_ends(layout, &flat_coords, &ends)?;
        Ok(Self {
            layout,
            flat_coords,
            ends,
            srid: 0,
        })
    }

    /// Like [`Polygon::try_new`], panicking on invalid input.
    pub fn new_flat(layout: Layout, flat_coords: Vec<f64>, ends: Vec<usize>) -> Self {
        Self::try_new(layout, flat_coords, ends).unwrap()
    }

    /// Create a polygon from one sequence of coordinates per ring.
    pub fn try_from_coords<C, R>(layout: Layout, coords: &[R]) -> Result<Self>
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
    {
        let mut polygon = Self::new(layout);
        polygon.try_set_coords(coords)?;
        Ok(polygon)
    }

    /// Like [`Polygon::try_from_coords`], panicking on a stride mismatch.
    pub fn from_coords<C, R>(layout: Layout, coords: &[R]) -> Self
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
    {
        Self::try_from_coords(layout, coords).unwrap()
    }

    /// Replace all rings. On error the polygon is left unchanged.
    pub fn try_set_coords<C, R>(&mut self, coords: &[R]) -> Result<&mut Self>
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
    {
        let (flat_coords, ends) = deflate_coords2(coords, self.layout.stride())?;
        verify_ends(self.layout, &flat_coords, &ends)?;
        self.flat_coords = flat_coords;
        self.ends = ends;
        Ok(self)
    }

    /// Like [`Polygon::try_set_coords`], panicking on a stride mismatch.
    pub fn set_coords<C, R>(&mut self, coords: &[R]) -> &mut Self
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
    {
        self.try_set_coords(coords).unwrap()
    }

    /// Copy the coordinates of every ring.
    pub fn coords(&self) -> Vec<Vec<Coord>> {
        inflate_coords2(&self.flat_coords, 0, &self.ends, self.layout.stride())
    }

    /// The number of rings, shell included.
    pub fn num_linear_rings(&self) -> usize {
        self.ends.len()
    }

    /// Borrow ring `i`. Ring 0 is the shell.
    pub fn linear_ring(&self, i: usize) -> LinearRingRef<'_> {
        let offset = if i == 0 { 0 } else { self.ends[i - 1] };
        LinearRingRef::new(
            self.layout,
            &self.flat_coords[offset..self.ends[i]],
            self.srid,
        )
    }

    /// Iterate over the rings.
    pub fn linear_rings(&self) -> impl Iterator<Item = LinearRingRef<'_>> + '_ {
        (0..self.num_linear_rings()).map(|i| self.linear_ring(i))
    }

    /// Append a ring. Fails without a change if the ring's layout differs or the result would
    /// be invalid, as for any ring pushed onto a polygon without layout.
    pub fn try_push(&mut self, ring: &LinearRing) -> Result<()> {
        if ring.layout != self.layout {
            return Err(GeomError::LayoutMismatch {
                got: ring.layout,
                want: self.layout,
            });
        }
        verify_ends(self.layout, &ring.flat_coords, &[ring.flat_coords.len()])?;
        self.flat_coords.extend_from_slice(&ring.flat_coords);
        self.ends.push(self.flat_coords.len());
        Ok(())
    }

    /// Like [`Polygon::try_push`], panicking on a layout mismatch.
    pub fn push(&mut self, ring: &LinearRing) -> &mut Self {
        self.try_push(ring).unwrap();
        self
    }

    /// The signed planar area: the shell's area plus the holes' areas, each signed by its
    /// winding.
    pub fn area(&self) -> f64 {
        double_area2(&self.flat_coords, 0, &self.ends, self.layout.stride()) / 2.
    }

    /// The total perimeter of all rings.
    pub fn length(&self) -> f64 {
        length2(&self.flat_coords, 0, &self.ends, self.layout.stride())
    }

    /// Reverse the winding of every ring.
    pub fn reverse(&mut self) {
        reverse_coords2(&mut self.flat_coords, 0, &self.ends, self.layout.stride());
    }
}

impl_geometry_common!(Polygon);

impl FlatGeometry for Polygon {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn flat_coords(&self) -> &[f64] {
        &self.flat_coords
    }

    fn ends(&self) -> &[usize] {
        &self.ends
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn verify(&self) -> Result<()> {
        verify_ends(self.layout, &self.flat_coords, &self.ends)
    }
}

impl From<PolygonRef<'_>> for Polygon {
    fn from(value: PolygonRef<'_>) -> Self {
        Self {
            layout: value.layout(),
            flat_coords: value.flat_coords().to_vec(),
            ends: value.ends().to_vec(),
            srid: value.srid(),
        }
    }
}
