use itertools::Itertools;
use log::trace;

use crate::algorithm::centroid::LineCentroidCalculator;
use crate::algorithm::cga::is_ring_counter_clockwise;
use crate::coord::Coord;
use crate::flat::iter_coords;
use crate::scalar::{LinearRingRef, PolygonRef};
use crate::trait_::FlatGeometry;

/// Accumulates the area-weighted centroid of a set of polygons.
///
/// Each ring is split into a fan of triangles around a common base point, the first shell
/// coordinate ever added. Triangles are weighted by their signed area, so holes subtract
/// from the shell whatever their winding. Ring perimeters are accumulated as well and give
/// the centroid when the total area is zero.
#[derive(Debug, Clone, Default)]
pub struct AreaCentroidCalculator {
    base: Option<[f64; 2]>,
    area_sum2: f64,
    cg3: [f64; 2],
    line: LineCentroidCalculator,
}

impl AreaCentroidCalculator {
    /// Create a calculator with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a polygon, owned or borrowed. Empty polygons are ignored.
    pub fn add_polygon<'a>(&mut self, polygon: impl Into<PolygonRef<'a>>) {
        let polygon = polygon.into();
        if polygon.num_linear_rings() == 0 {
            return;
        }
        let shell = polygon.linear_ring(0);
        if shell.is_empty() {
            return;
        }
        let base = *self
            .base
            .get_or_insert_with(|| [shell.flat_coords()[0], shell.flat_coords()[1]]);

        let shell_positive = !is_ring_counter_clockwise(shell.layout(), shell.flat_coords());
        self.add_ring(base, shell, shell_positive);
        for i in 1..polygon.num_linear_rings() {
            let hole = polygon.linear_ring(i);
            let hole_positive = is_ring_counter_clockwise(hole.layout(), hole.flat_coords());
            self.add_ring(base, hole, hole_positive);
        }
    }

    fn add_ring(&mut self, base: [f64; 2], ring: LinearRingRef<'_>, positive: bool) {
        let sign = if positive { 1. } else { -1. };
        for (p1, p2) in iter_coords(ring.flat_coords(), ring.stride()).tuple_windows() {
            self.add_triangle(base, p1, p2, sign);
        }
        self.line.add_flat(&ring);
    }

    fn add_triangle(&mut self, p0: [f64; 2], p1: &[f64], p2: &[f64], sign: f64) {
        let area2 = (p1[0] - p0[0]) * (p2[1] - p0[1]) - (p2[0] - p0[0]) * (p1[1] - p0[1]);
        self.cg3[0] += sign * area2 * (p0[0] + p1[0] + p2[0]);
        self.cg3[1] += sign * area2 * (p0[1] + p1[1] + p2[1]);
        self.area_sum2 += sign * area2;
    }

    /// The absolute area added so far, with holes subtracted.
    pub fn area(&self) -> f64 {
        self.area_sum2.abs() / 2.
    }

    /// The area-weighted centroid.
    ///
    /// Falls back to the length-weighted centroid of the ring perimeters when the total area
    /// is zero, and to `[NaN, NaN]` when that is undefined too.
    pub fn centroid(&self) -> Coord {
        if self.area_sum2 == 0. {
            trace!("area centroid of zero total area, falling back to ring perimeters");
            return self.line.centroid();
        }
        Coord::new(vec![
            self.cg3[0] / 3. / self.area_sum2,
            self.cg3[1] / 3. / self.area_sum2,
        ])
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{MultiPolygon, Polygon};
    use crate::layout::Layout;
    use crate::test::polygon::{lopsided, square, square_with_hole, trapezoid};

    fn centroid_of(polygons: &[Polygon]) -> Coord {
        let mut calculator = AreaCentroidCalculator::new();
        polygons.iter().for_each(|p| calculator.add_polygon(p));
        calculator.centroid()
    }

    #[test]
    fn no_input_is_nan() {
        assert!(AreaCentroidCalculator::new().centroid().is_nan());
        assert!(centroid_of(&[Polygon::new(Layout::XY)]).is_nan());
    }

    #[test]
    fn unit_square() {
        assert_eq!(centroid_of(&[square()]), [1., 1.]);
    }

    #[test]
    fn holes_of_either_winding() {
        let ccw_holes = Polygon::new_flat(
            Layout::XY,
            vec![
                0., 0., 2., 0., 2., 2., 0., 2., 0., 0., //
                0.5, 0.5, 0.75, 0.5, 0.75, 0.75, 0.5, 0.75, 0.5, 0.5, //
                1.25, 1.25, 1.5, 1.25, 1.5, 1.5, 1.25, 1.5, 1.25, 1.25,
            ],
            vec![10, 20, 30],
        );
        assert_eq!(centroid_of(&[ccw_holes]), [1., 1.]);

        let mut calculator = AreaCentroidCalculator::new();
        calculator.add_polygon(&square_with_hole());
        assert_eq!(calculator.centroid(), [2., 2.]);
        assert_relative_eq!(calculator.area(), 12.);
    }

    #[test]
    fn trapezoid_and_its_mirror() {
        let centroid = centroid_of(&[trapezoid()]);
        assert_eq!(centroid.x(), 0.);
        assert_relative_eq!(centroid.y(), 27.272727272727273, max_relative = 1e-15);

        let mirror = Polygon::new_flat(
            Layout::XY,
            vec![
                -100., -100., 100., -100., 10., 100., -10., 100., -100., -100.,
            ],
            vec![10],
        );
        assert_eq!(centroid_of(&[trapezoid(), mirror]), [0., 0.]);
    }

    #[test]
    fn multi_polygon_views() {
        let mut mp = MultiPolygon::new(Layout::XY);
        mp.push(&square()).push(&lopsided());
        let mut calculator = AreaCentroidCalculator::new();
        mp.polygons().for_each(|p| calculator.add_polygon(p));
        assert_eq!(calculator.centroid(), centroid_of(&[square(), lopsided()]));
    }

    #[test]
    fn zero_area_falls_back_to_perimeter() {
        let flat = Polygon::new_flat(Layout::XY, vec![0., 0., 4., 0., 0., 0.], vec![6]);
        assert_eq!(centroid_of(&[flat]), [2., 0.]);
    }
}
