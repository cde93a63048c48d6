//! Axis-aligned bounding boxes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};
use crate::geometry::Geometry;
use crate::layout::Layout;

/// An axis-aligned box holding a minimum and maximum for every ordinate of a layout.
///
/// A new `Bounds` is empty: every minimum is `+inf` and every maximum `-inf`, so the first
/// extension sets both.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    layout: Layout,
    min: Vec<f64>,
    max: Vec<f64>,
}

impl Bounds {
    /// Create empty bounds for `layout`.
    pub fn new(layout: Layout) -> Self {
        let stride = layout.stride();
        Self {
            layout,
            min: vec![f64::INFINITY; stride],
            max: vec![f64::NEG_INFINITY; stride],
        }
    }

    /// The layout of these bounds.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Set the bounds from `2 * stride` values: the minimums followed by the maximums.
    ///
    /// Unlike [`Bounds::extend_coord`] the values are taken as given, so a minimum may be
    /// placed above its maximum.
    pub fn try_set(&mut self, values: &[f64]) -> Result<()> {
        let stride = self.layout.stride();
        if values.len() != 2 * stride {
            return Err(GeomError::InvalidBounds {
                got: values.len(),
                want: 2 * stride,
            });
        }
        self.min.copy_from_slice(&values[..stride]);
        self.max.copy_from_slice(&values[stride..]);
        Ok(())
    }

    /// Like [`Bounds::try_set`], panicking on a wrong number of values.
    pub fn set(&mut self, values: &[f64]) -> &mut Self {
        self.try_set(values).unwrap();
        self
    }

    /// The minimum of ordinate `dim`.
    pub fn min(&self, dim: usize) -> f64 {
        self.min[dim]
    }

    /// The maximum of ordinate `dim`.
    pub fn max(&self, dim: usize) -> f64 {
        self.max[dim]
    }

    /// The minimum corner.
    pub fn min_coord(&self) -> &[f64] {
        &self.min
    }

    /// The maximum corner.
    pub fn max_coord(&self) -> &[f64] {
        &self.max
    }

    /// Returns `true` if no coordinate has been added to these bounds.
    pub fn is_empty(&self) -> bool {
        self.layout.stride() == 0 || self.min.iter().zip(&self.max).any(|(lo, hi)| lo > hi)
    }

    /// Grow the bounds to include `coord`, which must share this layout.
    pub fn extend_coord(&mut self, coord: &[f64]) {
        for (i, &value) in coord.iter().enumerate().take(self.min.len()) {
            self.min[i] = self.min[i].min(value);
            self.max[i] = self.max[i].max(value);
        }
    }

    /// Grow the bounds to include every coordinate in `flat_coords[offset..end]`.
    pub fn extend_flat_coords(
        &mut self,
        flat_coords: &[f64],
        offset: usize,
        end: usize,
        stride: usize,
    ) {
        if stride == 0 {
            return;
        }
        for coord in flat_coords[offset..end].chunks_exact(stride) {
            self.extend_coord(coord);
        }
    }

    /// Grow the bounds to include `geometry`.
    ///
    /// X and Y are always mapped. Z and M are mapped when both layouts carry them, even if
    /// they sit at different positions (for example M in XYM and in XYZM).
    pub fn extend_geometry(&mut self, geometry: &Geometry) {
        match geometry {
            Geometry::GeometryCollection(collection) => {
                for geom in collection.geoms() {
                    self.extend_geometry(geom);
                }
            }
            _ => {
                if let Some(flat) = geometry.as_flat() {
                    self.extend_mapped(flat.flat_coords(), flat.layout());
                }
            }
        }
    }

    fn extend_mapped(&mut self, flat_coords: &[f64], layout: Layout) {
        let stride = layout.stride();
        if stride == 0 {
            return;
        }
        if layout == self.layout {
            self.extend_flat_coords(flat_coords, 0, flat_coords.len(), stride);
            return;
        }
        let mapping = layout.ordinate_mapping(self.layout);
        for coord in flat_coords.chunks_exact(stride) {
            for &(src, dst) in &mapping {
                self.min[dst] = self.min[dst].min(coord[src]);
                self.max[dst] = self.max[dst].max(coord[src]);
            }
        }
    }

    /// Returns `true` if the XY extents of `self` and `other` intersect, edges included.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        (0..2).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// Returns `true` if the XY position of `point` lies inside or on these bounds.
    pub fn overlaps_point(&self, point: &[f64]) -> bool {
        if self.is_empty() {
            return false;
        }
        (0..2).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{GeometryCollection, LineString, Point};
    use crate::trait_::FlatGeometry;

    #[test]
    fn new_is_empty() {
        let bounds = Bounds::new(Layout::XY);
        assert!(bounds.is_empty());
        assert_eq!(bounds.min(0), f64::INFINITY);
        assert_eq!(bounds.max(1), f64::NEG_INFINITY);
    }

    #[test]
    fn set_checks_length() {
        let mut bounds = Bounds::new(Layout::XY);
        assert_eq!(
            bounds.try_set(&[0., 0., 1.]),
            Err(GeomError::InvalidBounds { got: 3, want: 4 })
        );
        bounds.set(&[0., 1., 2., 3.]);
        assert_eq!(bounds.min_coord(), &[0., 1.]);
        assert_eq!(bounds.max_coord(), &[2., 3.]);
        assert!(!bounds.is_empty());
    }

    #[test]
    fn extend_flat() {
        let mut bounds = Bounds::new(Layout::XYZ);
        bounds.extend_flat_coords(&[1., 2., 3., -1., 5., 0.], 0, 6, 3);
        assert_eq!(bounds.min_coord(), &[-1., 2., 0.]);
        assert_eq!(bounds.max_coord(), &[1., 5., 3.]);
    }

    #[test]
    fn line_string_bounds() {
        let ls = LineString::new_flat(Layout::XYM, vec![1., 2., 3., 4., 5., 6., 7., 8., 9.]);
        let bounds = ls.bounds();
        assert_eq!(bounds.layout(), Layout::XYM);
        assert_eq!(bounds.min_coord(), &[1., 2., 3.]);
        assert_eq!(bounds.max_coord(), &[7., 8., 9.]);
    }

    #[test]
    fn collection_maps_shared_ordinates() {
        let mut gc = GeometryCollection::new();
        gc.push(Point::new_flat(Layout::XYZ, vec![1., 2., 3.]));
        gc.push(Point::new_flat(Layout::XYM, vec![-1., 5., 10.]));
        assert_eq!(gc.layout(), Layout::XYZM);

        let bounds = gc.bounds();
        assert_eq!(bounds.min_coord(), &[-1., 2., 3., 10.]);
        assert_eq!(bounds.max_coord(), &[1., 5., 3., 10.]);
    }

    #[test]
    fn overlaps() {
        let mut a = Bounds::new(Layout::XY);
        a.set(&[0., 0., 2., 2.]);
        let mut b = Bounds::new(Layout::XY);
        b.set(&[2., 1., 3., 3.]);
        let mut c = Bounds::new(Layout::XY);
        c.set(&[2.5, 2.5, 3., 3.]);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&Bounds::new(Layout::XY)));
        assert!(a.overlaps_point(&[1., 2.]));
        assert!(!a.overlaps_point(&[1., 2.5]));
    }
}
