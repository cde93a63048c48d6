use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::{GeomError, Result};
use crate::flat::{
    deflate_coords3, double_area3, inflate_coords3, last_end, length3, reverse_coords3,
    verify_endss,
};
use crate::geometry::{impl_geometry_common, Polygon};
use crate::layout::Layout;
use crate::scalar::PolygonRef;
use crate::trait_::FlatGeometry;

/// A collection of polygons sharing one flat buffer.
///
/// `endss[i]` holds the ring ends of polygon `i`, as offsets into the shared buffer. An empty
/// polygon has no ends.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiPolygon {
    pub(crate) layout: Layout,
    pub(crate) flat_coords: Vec<f64>,
    pub(crate) endss: Vec<Vec<usize>>,
    pub(crate) srid: i32,
}

impl MultiPolygon {
    /// Create an empty multi polygon with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: vec![],
            endss: vec![],
            srid: 0,
        }
    }

    /// Create a multi polygon from its flat coordinates and per-polygon ring ends.
    pub fn try_new(
        layout: Layout,
        flat_coords: Vec<f64>,
        endss: Vec<Vec<usize>>,
    ) -> Result<Self> {
        verify_endss(layout, &flat_coords, &endss)?;
        Ok(Self {
            layout,
            flat_coords,
            endss,
            srid: 0,
        })
    }

    /// Like [`MultiPolygon::try_new`], panicking on invalid input.
    pub fn new_flat(layout: Layout, flat_coords: Vec<f64>, endss: Vec<Vec<usize>>) -> Self {
        Self::try_new(layout, flat_coords, endss).unwrap()
    }

    /// Create a multi polygon from one sequence of rings per polygon.
    pub fn try_from_coords<C, R, P>(layout: Layout, coords: &[P]) -> Result<Self>
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
        P: AsRef<[R]>,
    {
        let mut multi_polygon = Self::new(layout);
        multi_polygon.try_set_coords(coords)?;
        Ok(multi_polygon)
    }

    /// Like [`MultiPolygon::try_from_coords`], panicking on a stride mismatch.
    pub fn from_coords<C, R, P>(layout: Layout, coords: &[P]) -> Self
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
        P: AsRef<[R]>,
    {
        Self::try_from_coords(layout, coords).unwrap()
    }

    /// Replace all polygons. On error the multi polygon is left unchanged.
    pub fn try_set_coords<C, R, P>(&mut self, coords: &[P]) -> Result<&mut Self>
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
        P: AsRef<[R]>,
    {
        let (flat_coords, endss) = deflate_coords3(coords, self.layout.stride())?;
        verify_endss(self.layout, &flat_coords, &endss)?;
        self.flat_coords = flat_coords;
        self.endss = endss;
        Ok(self)
    }

    /// Like [`MultiPolygon::try_set_coords`], panicking on a stride mismatch.
    pub fn set_coords<C, R, P>(&mut self, coords: &[P]) -> &mut Self
    where
        C: AsRef<[f64]>,
        R: AsRef<[C]>,
        P: AsRef<[R]>,
    {
        self.try_set_coords(coords).unwrap()
    }

    /// Copy the coordinates of every ring of every polygon.
    pub fn coords(&self) -> Vec<Vec<Vec<Coord>>> {
        inflate_coords3(&self.flat_coords, 0, &self.endss, self.layout.stride())
    }

    /// The number of polygons, empty ones included.
    pub fn num_polygons(&self) -> usize {
        self.endss.len()
    }

    /// Borrow polygon `i`.
    ///
    /// The view borrows the slice of the buffer the polygon occupies; its ends are rebased to
    /// start at zero.
    pub fn polygon(&self, i: usize) -> PolygonRef<'_> {
        let offset = self.endss[..i]
            .iter()
            .rev()
            .find_map(|ends| ends.last().copied())
            .unwrap_or(0);
        self.polygon_at(offset, &self.endss[i])
    }

    fn polygon_at<'a>(&'a self, offset: usize, ends: &'a [usize]) -> PolygonRef<'a> {
        let end = last_end(ends, offset);
        let ends = match offset {
            0 => Cow::Borrowed(ends),
            _ => Cow::Owned(ends.iter().map(|end| end - offset).collect()),
        };
        PolygonRef::new(
            self.layout,
            &self.flat_coords[offset..end],
            ends,
            self.srid,
        )
    }

    /// Iterate over the polygons.
    pub fn polygons(&self) -> impl Iterator<Item = PolygonRef<'_>> + '_ {
        let mut offset = 0;
        self.endss.iter().map(move |ends| {
            let polygon = self.polygon_at(offset, ends);
            offset = last_end(ends, offset);
            polygon
        })
    }

    /// Append a polygon, rebasing its ends onto the end of the shared buffer.
    pub fn try_push(&mut self, polygon: &Polygon) -> Result<()> {
        if polygon.layout != self.layout {
            return Err(GeomError::LayoutMismatch {
                got: polygon.layout,
                want: self.layout,
            });
        }
        verify_endss(
            self.layout,
            &polygon.flat_coords,
            std::slice::from_ref(&polygon.ends),
        )?;
        let offset = self.flat_coords.len();
        self.flat_coords.extend_from_slice(&polygon.flat_coords);
        self.endss
            .push(polygon.ends.iter().map(|end| end + offset).collect());
        Ok(())
    }

    /// Like [`MultiPolygon::try_push`], panicking on a layout mismatch.
    pub fn push(&mut self, polygon: &Polygon) -> &mut Self {
        self.try_push(polygon).unwrap();
        self
    }

    /// The summed signed area of every polygon.
    pub fn area(&self) -> f64 {
        double_area3(&self.flat_coords, 0, &self.endss, self.layout.stride()) / 2.
    }

    /// The total perimeter of every ring.
    pub fn length(&self) -> f64 {
        length3(&self.flat_coords, 0, &self.endss, self.layout.stride())
    }

    /// Reverse the winding of every ring.
    pub fn reverse(&mut self) {
        reverse_coords3(&mut self.flat_coords, 0, &self.endss, self.layout.stride());
    }
}

impl_geometry_common!(MultiPolygon);

impl FlatGeometry for MultiPolygon {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn flat_coords(&self) -> &[f64] {
        &self.flat_coords
    }

    fn endss(&self) -> &[Vec<usize>] {
        &self.endss
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn verify(&self) -> Result<()> {
        verify_endss(self.layout, &self.flat_coords, &self.endss)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::test::polygon::{square, square_with_hole};

    #[test]
    fn push_rebases_ends() {
        let mut mp = MultiPolygon::new(Layout::XY);
        mp.push(&square())
            .push(&Polygon::new(Layout::XY))
            .push(&square_with_hole());
        mp.verify().unwrap();
        assert_eq!(mp.endss(), &[vec![10], vec![], vec![20, 30]]);
        assert_eq!(mp.num_polygons(), 3);

        assert_eq!(Polygon::from(mp.polygon(0)), square());
        assert!(mp.polygon(1).is_empty());
        assert_eq!(Polygon::from(mp.polygon(2)), square_with_hole());
        assert_eq!(mp.polygon(2).ends(), &[10, 20]);

        let collected: Vec<Polygon> = mp.polygons().map(Polygon::from).collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[2], square_with_hole());
    }

    #[test]
    fn polygon_aliases_parent() {
        let mut mp = MultiPolygon::new(Layout::XY);
        mp.push(&square()).push(&square_with_hole());
        let view = mp.polygon(1);
        assert_eq!(view.flat_coords().as_ptr(), mp.flat_coords()[10..].as_ptr());
    }

    #[test]
    fn layout_mismatch() {
        let mut mp = MultiPolygon::new(Layout::XYZ);
        assert_eq!(
            mp.try_push(&square()).unwrap_err(),
            GeomError::LayoutMismatch {
                got: Layout::XY,
                want: Layout::XYZ
            }
        );
        assert!(mp.is_empty());
    }

    #[test]
    fn area_length_reverse() {
        let mut mp = MultiPolygon::new(Layout::XY);
        mp.push(&square()).push(&square_with_hole());
        assert_relative_eq!(mp.area(), square().area() + square_with_hole().area());
        assert_relative_eq!(mp.length(), 8. + 24.);
        mp.reverse();
        assert_relative_eq!(mp.area(), -(square().area() + square_with_hole().area()));
        assert_eq!(mp.endss(), &[vec![10], vec![20, 30]]);
    }

    #[test]
    fn from_coords_with_empty_polygon() {
        let ring = vec![[0., 0.], [1., 0.], [1., 1.], [0., 0.]];
        let empty: Vec<Vec<[f64; 2]>> = vec![];
        let mp = MultiPolygon::from_coords(Layout::XY, &[empty, vec![ring.clone()]]);
        mp.verify().unwrap();
        assert_eq!(mp.endss(), &[vec![], vec![8]]);
        assert_eq!(mp.coords()[1][0].len(), 4);
        assert_eq!(Polygon::from(mp.polygon(1)).coords()[0].len(), ring.len());
    }

    #[test]
    fn no_layout_rejects_polygons() {
        let mut mp = MultiPolygon::new(Layout::NoLayout);
        assert_eq!(
            mp.try_push(&Polygon::new(Layout::NoLayout)),
            Err(GeomError::NonEmptyEndss)
        );
        let polygons: [Vec<Vec<Vec<f64>>>; 1] = [vec![]];
        assert_eq!(
            mp.try_set_coords(&polygons).map(|_| ()),
            Err(GeomError::NonEmptyEndss)
        );
        assert_eq!(mp, MultiPolygon::new(Layout::NoLayout));
        mp.verify().unwrap();
    }
}
