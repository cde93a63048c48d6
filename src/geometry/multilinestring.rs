#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::{GeomError, Result};
use crate::flat::{deflate_coords2, inflate_coords2, length2, reverse_coords2, verify_ends};
use crate::geometry::{impl_geometry_common, LineString};
use crate::layout::Layout;
use crate::scalar::{LineStringMut, LineStringRef};
use crate::trait_::FlatGeometry;

/// A collection of line strings sharing one flat buffer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiLineString {
    pub(crate) layout: Layout,
    pub(crate) flat_coords: Vec<f64>,
    pub(crate) ends: Vec<usize>,
    pub(crate) srid: i32,
}

impl MultiLineString {
    /// Create an empty multi line string with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: vec![],
            ends: vec![],
            srid: 0,
        }
    }

    /// Create a multi line string from its flat coordinates and line ends.
    pub fn try_new(layout: Layout, flat_coords: Vec<f64>, ends: Vec<usize>) -> Result<Self> {
        verify_ends(layout, &flat_coords, &ends)?;
        Ok(Self {
            layout,
            flat_coords,
            ends,
            srid: 0,
        })
    }

    /// Like [`MultiLineString::try_new`], panicking on invalid input.
    pub fn new_flat(layout: Layout, flat_coords: Vec<f64>, ends: Vec<usize>) -> Self {
        Self::try_new(layout, flat_coords, ends).unwrap()
    }

    /// Create a multi line string from one sequence of coordinates per line.
    pub fn try_from_coords<C, R>(layout: Layout, coords: &[R]) -> Result<Self>
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
    {
        let mut multi_line_string = Self::new(layout);
        multi_line_string.try_set_coords(coords)?;
        Ok(multi_line_string)
    }

    /// Like [`MultiLineString::try_from_coords`], panicking on a stride mismatch.
    pub fn from_coords<C, R>(layout: Layout, coords: &[R]) -> Self
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
    {
        Self::try_from_coords(layout, coords).unwrap()
    }

    /// Replace all lines. On error the multi line string is left unchanged.
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

    /// Like [`MultiLineString::try_set_coords`], panicking on a stride mismatch.
    pub fn set_coords<C, R>(&mut self, coords: &[R]) -> &mut Self
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
    {
        self.try_set_coords(coords).unwrap()
    }

    /// Copy the coordinates of every line.
    pub fn coords(&self) -> Vec<Vec<Coord>> {
        inflate_coords2(&self.flat_coords, 0, &self.ends, self.layout.stride())
    }

    /// The number of lines.
    pub fn num_line_strings(&self) -> usize {
        self.ends.len()
    }

    fn range(&self, i: usize) -> std::ops::Range<usize> {
        let offset = if i == 0 { 0 } else { self.ends[i - 1] };
        offset..self.ends[i]
    }

    /// Borrow line `i`.
    pub fn line_string(&self, i: usize) -> LineStringRef<'_> {
        LineStringRef::new(self.layout, &self.flat_coords[self.range(i)], self.srid)
    }

    /// Mutably borrow line `i`. Writes through the view change this geometry.
    pub fn line_string_mut(&mut self, i: usize) -> LineStringMut<'_> {
        let range = self.range(i);
        LineStringMut::new(self.layout, &mut self.flat_coords[range])
    }

    /// Iterate over the lines.
    pub fn line_strings(&self) -> impl Iterator<Item = LineStringRef<'_>> + '_ {
        (0..self.num_line_strings()).map(|i| self.line_string(i))
    }

    /// Append a line.
    pub fn try_push(&mut self, line_string: &LineString) -> Result<()> {
        if line_string.layout != self.layout {
            return Err(GeomError::LayoutMismatch {
                got: line_string.layout,
                want: self.layout,
            });
        }
        verify_ends(
            self.layout,
            &line_string.flat_coords,
            &[line_string.flat_coords.len()],
        )?;
        self.flat_coords.extend_from_slice(&line_string.flat_coords);
        self.ends.push(self.flat_coords.len());
        Ok(())
    }

    /// Like [`MultiLineString::try_push`], panicking on a layout mismatch.
    pub fn push(&mut self, line_string: &LineString) -> &mut Self {
        self.try_push(line_string).unwrap();
        self
    }

    /// Always zero.
    pub fn area(&self) -> f64 {
        0.
    }

    /// The summed length of every line.
    pub fn length(&self) -> f64 {
        length2(&self.flat_coords, 0, &self.ends, self.layout.stride())
    }

    /// Reverse every line in place.
    pub fn reverse(&mut self) {
        reverse_coords2(&mut self.flat_coords, 0, &self.ends, self.layout.stride());
    }
}

impl_geometry_common!(MultiLineString);

impl FlatGeometry for MultiLineString {
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
