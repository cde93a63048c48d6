use itertools::Itertools;
use log::trace;

use crate::coord::Coord;
use crate::flat::iter_coords;
use crate::scalar::{LineStringRef, LinearRingRef, PolygonRef};
use crate::trait_::FlatGeometry;

/// Accumulates the length-weighted centroid of a set of paths.
///
/// Each segment contributes its midpoint weighted by its length.
#[derive(Debug, Clone, Default)]
pub struct LineCentroidCalculator {
    sum: [f64; 2],
    total_length: f64,
}

impl LineCentroidCalculator {
    /// Create a calculator with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the path stored at `flat_coords[start..end]`.
    pub fn add_line(&mut self, flat_coords: &[f64], start: usize, end: usize, stride: usize) {
        if stride == 0 {
            return;
        }
        for (p1, p2) in iter_coords(&flat_coords[start..end], stride).tuple_windows() {
            let length = (p2[0] - p1[0]).hypot(p2[1] - p1[1]);
            self.total_length += length;
            self.sum[0] += length * (p1[0] + p2[0]) / 2.;
            self.sum[1] += length * (p1[1] + p2[1]) / 2.;
        }
    }

    /// Add a line string, owned or borrowed.
    pub fn add_line_string<'a>(&mut self, line_string: impl Into<LineStringRef<'a>>) {
        self.add_flat(&line_string.into());
    }

    /// Add a ring as a closed path.
    pub fn add_linear_ring<'a>(&mut self, ring: impl Into<LinearRingRef<'a>>) {
        self.add_flat(&ring.into());
    }

    /// Add the perimeter of every ring of a polygon.
    pub fn add_polygon<'a>(&mut self, polygon: impl Into<PolygonRef<'a>>) {
        let polygon = polygon.into();
        for i in 0..polygon.num_linear_rings() {
            self.add_flat(&polygon.linear_ring(i));
        }
    }

    pub(crate) fn add_flat(&mut self, geom: &impl FlatGeometry) {
        let flat_coords = geom.flat_coords();
        self.add_line(flat_coords, 0, flat_coords.len(), geom.stride());
    }

    /// The total length of every segment added so far.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// The length-weighted centroid, or `[NaN, NaN]` if nothing of non-zero length was added.
    pub fn centroid(&self) -> Coord {
        if self.total_length == 0. {
            trace!("line centroid of zero total length is undefined");
            return Coord::new(vec![f64::NAN, f64::NAN]);
        }
        Coord::new(vec![
            self.sum[0] / self.total_length,
            self.sum[1] / self.total_length,
        ])
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{LineString, LinearRing, MultiPolygon};
    use crate::layout::Layout;
    use crate::test::linestring::{ls0, ls1};
    use crate::test::polygon::{square, trapezoid};

    #[test]
    fn no_input_is_nan() {
        assert!(LineCentroidCalculator::new().centroid().is_nan());

        let mut calculator = LineCentroidCalculator::new();
        calculator.add_line_string(&LineString::new_flat(Layout::XY, vec![3., 3., 3., 3.]));
        assert!(calculator.centroid().is_nan());
    }

    #[test]
    fn single_segments() {
        let mut calculator = LineCentroidCalculator::new();
        calculator.add_line_string(&ls0());
        assert_eq!(calculator.centroid(), [5., 0.]);

        let mut calculator = LineCentroidCalculator::new();
        calculator.add_line(&[0., 0., 10., 10.], 0, 4, 2);
        let centroid = calculator.centroid();
        assert_relative_eq!(centroid.x(), 5.);
        assert_relative_eq!(centroid.y(), 5.);
    }

    #[test]
    fn weighted_by_length() {
        let mut calculator = LineCentroidCalculator::new();
        calculator.add_line_string(&ls0());
        calculator.add_line_string(&ls1());
        let centroid = calculator.centroid();
        assert_relative_eq!(centroid.x(), 4.166666666666667);
        assert_relative_eq!(centroid.y(), 3.3333333333333335);
        assert_relative_eq!(calculator.total_length(), 15.);
    }

    #[test]
    fn closed_path() {
        let mut calculator = LineCentroidCalculator::new();
        calculator.add_linear_ring(&LinearRing::new_flat(
            Layout::XY,
            vec![0., 0., 10., 0., 10., 10., 0., 0.],
        ));
        let centroid = calculator.centroid();
        assert_relative_eq!(centroid.x(), 6.464466094067262, max_relative = 1e-14);
        assert_relative_eq!(centroid.y(), 3.5355339059327378, max_relative = 1e-14);
    }

    #[test]
    fn ignores_extra_ordinates() {
        let mut calculator = LineCentroidCalculator::new();
        calculator.add_line(&[0., 0., 7., 10., 0., 9.], 0, 6, 3);
        assert_eq!(calculator.centroid(), [5., 0.]);
    }

    #[test]
    fn polygon_perimeters() {
        let mut calculator = LineCentroidCalculator::new();
        calculator.add_polygon(&square());
        assert_eq!(calculator.centroid(), [1., 1.]);

        let mut calculator = LineCentroidCalculator::new();
        calculator.add_polygon(&trapezoid());
        let centroid = calculator.centroid();
        assert_relative_eq!(centroid.x(), 0.);
        assert_relative_eq!(centroid.y(), 27.329280498653272, max_relative = 1e-14);

        let mut mp = MultiPolygon::new(Layout::XY);
        mp.push(&square()).push(&trapezoid());
        let mut from_views = LineCentroidCalculator::new();
        mp.polygons().for_each(|p| from_views.add_polygon(p));
        let mut from_owned = LineCentroidCalculator::new();
        from_owned.add_polygon(&square());
        from_owned.add_polygon(&trapezoid());
        assert_eq!(from_views.centroid(), from_owned.centroid());
    }
}
