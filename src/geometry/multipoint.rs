#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::{GeomError, Result};
use crate::flat::{deflate_coord, inflate_coord, verify_point_ends};
use crate::geometry::{impl_geometry_common, Point};
use crate::layout::Layout;
use crate::trait_::FlatGeometry;

/// A collection of points, any of which may be empty.
///
/// Point `i` occupies `flat_coords[ends[i - 1]..ends[i]]`. An empty point repeats the
/// previous end.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiPoint {
    pub(crate) layout: Layout,
    pub(crate) flat_coords: Vec<f64>,
    pub(crate) ends: Vec<usize>,
    pub(crate) srid: i32,
}

impl MultiPoint {
    /// Create an empty multi point with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: vec![],
            ends: vec![],
            srid: 0,
        }
    }

    /// Create a multi point from flat coordinates, one non-empty point per coordinate.
    pub fn try_new(layout: Layout, flat_coords: Vec<f64>) -> Result<Self> {
        let stride = layout.stride();
        let ends = match stride {
            0 => vec![],
            _ => (1..=flat_coords.len() / stride).map(|i| i * stride).collect(),
        };
        Self::try_new_with_ends(layout, flat_coords, ends)
    }

    /// Like [`MultiPoint::try_new`], panicking on invalid input.
    pub fn new_flat(layout: Layout, flat_coords: Vec<f64>) -> Self {
        Self::try_new(layout, flat_coords).unwrap()
    }

    /// Create a multi point from flat coordinates and explicit ends, which may carry empty
    /// points.
    pub fn try_new_with_ends(
        layout: Layout,
        flat_coords: Vec<f64>,
        ends: Vec<usize>,
    ) -> Result<Self> {
        verify_point_ends(layout, &flat_coords, &ends)?;
        Ok(Self {
            layout,
            flat_coords,
            ends,
            srid: 0,
        })
    }

    /// Create a multi point from optional coordinates. `None` is an empty point.
    pub fn try_from_coords<C: AsRef<[f64]>>(layout: Layout, coords: &[Option<C>]) -> Result<Self> {
        let mut multi_point = Self::new(layout);
        multi_point.try_set_coords(coords)?;
        Ok(multi_point)
    }

    /// Like [`MultiPoint::try_from_coords`], panicking on a stride mismatch.
    pub fn from_coords<C: AsRef<[f64]>>(layout: Layout, coords: &[Option<C>]) -> Self {
        Self::try_from_coords(layout, coords).unwrap()
    }

    /// Replace all points. On error the multi point is left unchanged.
    pub fn try_set_coords<C: AsRef<[f64]>>(&mut self, coords: &[Option<C>]) -> Result<&mut Self> {
        let stride = self.layout.stride();
        let mut flat_coords = Vec::with_capacity(coords.len() * stride);
        let mut ends = Vec::with_capacity(coords.len());
        for coord in coords {
            if let Some(coord) = coord {
                deflate_coord(&mut flat_coords, coord.as_ref(), stride)?;
            }
            ends.push(flat_coords.len());
        }
        verify_point_ends(self.layout, &flat_coords, &ends)?;
        self.flat_coords = flat_coords;
        self.ends = ends;
        Ok(self)
    }

    /// Like [`MultiPoint::try_set_coords`], panicking on a stride mismatch.
    pub fn set_coords<C: AsRef<[f64]>>(&mut self, coords: &[Option<C>]) -> &mut Self {
        self.try_set_coords(coords).unwrap()
    }

    /// Copy every point's coordinate, `None` for empty points.
    pub fn coords(&self) -> Vec<Option<Coord>> {
        let stride = self.layout.stride();
        let mut previous = 0;
        self.ends
            .iter()
            .map(|&end| {
                let coord = (end != previous)
                    .then(|| inflate_coord(&self.flat_coords, previous, end, stride));
                previous = end;
                coord
            })
            .collect()
    }

    /// The number of points, empty ones included.
    pub fn num_points(&self) -> usize {
        self.ends.len()
    }

    /// Borrow the values of point `i`, or `None` if it is empty.
    pub fn coord(&self, i: usize) -> Option<&[f64]> {
        let start = if i == 0 { 0 } else { self.ends[i - 1] };
        let end = self.ends[i];
        (end != start).then(|| &self.flat_coords[start..end])
    }

    /// Copy point `i`. An empty slot gives an empty point.
    pub fn point(&self, i: usize) -> Point {
        let flat_coords = self.coord(i).map(<[f64]>::to_vec).unwrap_or_default();
        Point {
            layout: self.layout,
            flat_coords,
            srid: self.srid,
        }
    }

    /// Iterate over copies of every point.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.num_points()).map(|i| self.point(i))
    }

    /// Append a point, which may be empty.
    pub fn try_push(&mut self, point: &Point) -> Result<()> {
        if point.layout != self.layout {
            return Err(GeomError::LayoutMismatch {
                got: point.layout,
                want: self.layout,
            });
        }
        verify_point_ends(self.layout, &point.flat_coords, &[point.flat_coords.len()])?;
        self.flat_coords.extend_from_slice(&point.flat_coords);
        self.ends.push(self.flat_coords.len());
        Ok(())
    }

    /// Like [`MultiPoint::try_push`], panicking on a layout mismatch.
    pub fn push(&mut self, point: &Point) -> &mut Self {
        self.try_push(point).unwrap();
        self
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

impl_geometry_common!(MultiPoint);

impl FlatGeometry for MultiPoint {
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
        verify_point_ends(self.layout, &self.flat_coords, &self.ends)
    }

    /// The number of points, empty ones included.
    fn num_coords(&self) -> usize {
        self.ends.len()
    }
}
