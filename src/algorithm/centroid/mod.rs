//! Point, length and area weighted centroids.
//!
//! Each calculator is a running sum that geometries are fed into one at a time. A calculator
//! that received no weight returns `[NaN, NaN]`; callers must check for it.

mod area;
mod line;
mod point;

pub use area::AreaCentroidCalculator;
pub use line::LineCentroidCalculator;
pub use point::PointCentroidCalculator;

use crate::coord::Coord;
use crate::geometry::*;
use crate::layout::Layout;
use crate::scalar::{LineStringRef, LinearRingRef, PolygonRef};
use crate::trait_::FlatGeometry;

/// The mean of the coordinates of `points`.
pub fn points_centroid(points: &[Point]) -> Coord {
    let mut calculator = PointCentroidCalculator::new();
    points.iter().for_each(|p| calculator.add_point(p));
    calculator.centroid()
}

/// The mean of the coordinates in a flat buffer.
///
/// ```
/// use flatgeom::algorithm::centroid::points_centroid_flat;
/// use flatgeom::Layout;
///
/// let centroid = points_centroid_flat(Layout::XY, &[0., 0., 2., 0., 2., 2., 0., 2.]);
/// assert_eq!(centroid, [1., 1.]);
/// ```
pub fn points_centroid_flat(layout: Layout, flat_coords: &[f64]) -> Coord {
    let mut calculator = PointCentroidCalculator::new();
    calculator.add_flat_coords(flat_coords, layout.stride());
    calculator.centroid()
}

/// The mean of the non-empty points of a multi point.
pub fn multi_point_centroid(multi_point: &MultiPoint) -> Coord {
    points_centroid_flat(multi_point.layout(), multi_point.flat_coords())
}

/// The length-weighted centroid of `lines`.
pub fn lines_centroid(lines: &[LineString]) -> Coord {
    let mut calculator = LineCentroidCalculator::new();
    lines.iter().for_each(|l| calculator.add_line_string(l));
    calculator.centroid()
}

/// The length-weighted centroid of the perimeters of `rings`.
pub fn linear_rings_centroid(rings: &[LinearRing]) -> Coord {
    let mut calculator = LineCentroidCalculator::new();
    rings.iter().for_each(|r| calculator.add_linear_ring(r));
    calculator.centroid()
}

/// The length-weighted centroid of a multi line string.
pub fn multi_line_centroid(multi_line_string: &MultiLineString) -> Coord {
    let mut calculator = LineCentroidCalculator::new();
    multi_line_string
        .line_strings()
        .for_each(|l| calculator.add_line_string(l));
    calculator.centroid()
}

/// The area-weighted centroid of `polygons`.
pub fn polygons_centroid(polygons: &[Polygon]) -> Coord {
    let mut calculator = AreaCentroidCalculator::new();
    polygons.iter().for_each(|p| calculator.add_polygon(p));
    calculator.centroid()
}

/// The area-weighted centroid of a multi polygon.
pub fn multi_polygon_centroid(multi_polygon: &MultiPolygon) -> Coord {
    let mut calculator = AreaCentroidCalculator::new();
    multi_polygon
        .polygons()
        .for_each(|p| calculator.add_polygon(p));
    calculator.centroid()
}

/// Calculation of the centroid of any geometry.
///
/// The highest dimension with non-zero weight decides: polygons are area weighted, falling
/// back to the length of their rings and then to the mean of their coordinates. Paths are
/// length weighted, falling back to their coordinates. A [`LinearRing`] counts as a path. A
/// geometry with no coordinates has the centroid `[NaN, NaN]`.
///
/// Only X and Y are considered, and the result is always XY.
///
/// # Examples
///
/// ```
/// use flatgeom::algorithm::Centroid;
/// use flatgeom::{Layout, Polygon};
///
/// let polygon = Polygon::new_flat(
///     Layout::XY,
///     vec![-100., 100., 100., 100., 10., -100., -10., -100., -100., 100.],
///     vec![10],
/// );
/// let centroid = polygon.centroid();
/// assert_eq!(centroid.x(), 0.);
/// assert!((centroid.y() - 27.272727272727273).abs() < 1e-12);
/// ```
pub trait Centroid {
    /// See: <https://en.wikipedia.org/wiki/Centroid>
    fn centroid(&self) -> Coord;
}

/// Accumulates every dimension at once and picks the highest one with weight.
#[derive(Debug, Default)]
struct CentroidAccumulator {
    area: AreaCentroidCalculator,
    line: LineCentroidCalculator,
    point: PointCentroidCalculator,
}

impl CentroidAccumulator {
    fn add_points(&mut self, geom: &impl FlatGeometry) {
        self.point.add_flat_coords(geom.flat_coords(), geom.stride());
    }

    fn add_line(&mut self, geom: &impl FlatGeometry) {
        self.line.add_flat(geom);
        self.add_points(geom);
    }

    fn add_multi_line_string(&mut self, geom: &MultiLineString) {
        geom.line_strings().for_each(|l| self.line.add_flat(&l));
        self.add_points(geom);
    }

    fn add_polygon(&mut self, geom: &PolygonRef<'_>) {
        self.area.add_polygon(geom.clone());
        self.line.add_polygon(geom.clone());
        self.add_points(geom);
    }

    fn add_multi_polygon(&mut self, geom: &MultiPolygon) {
        geom.polygons().for_each(|p| self.add_polygon(&p));
    }

    fn add_geometry(&mut self, geom: &Geometry) {
        match geom {
            Geometry::Point(g) => self.add_points(g),
            Geometry::MultiPoint(g) => self.add_points(g),
            Geometry::LineString(g) => self.add_line(g),
            Geometry::LinearRing(g) => self.add_line(g),
            Geometry::MultiLineString(g) => self.add_multi_line_string(g),
            Geometry::Polygon(g) => self.add_polygon(&PolygonRef::from(g)),
            Geometry::MultiPolygon(g) => self.add_multi_polygon(g),
            Geometry::GeometryCollection(gc) => {
                gc.geoms().iter().for_each(|g| self.add_geometry(g))
            }
        }
    }

    fn centroid(&self) -> Coord {
        if self.area.area() > 0. {
            self.area.centroid()
        } else if self.line.total_length() > 0. {
            self.line.centroid()
        } else {
            self.point.centroid()
        }
    }
}

macro_rules! accumulate_impl {
    ($type:ty, $add:ident) => {
        impl Centroid for $type {
            fn centroid(&self) -> Coord {
                let mut accumulator = CentroidAccumulator::default();
                accumulator.$add(self);
                accumulator.centroid()
            }
        }
    };
}

accumulate_impl!(Point, add_points);
accumulate_impl!(MultiPoint, add_points);
accumulate_impl!(LineString, add_line);
accumulate_impl!(LinearRing, add_line);
accumulate_impl!(LineStringRef<'_>, add_line);
accumulate_impl!(LinearRingRef<'_>, add_line);
accumulate_impl!(MultiLineString, add_multi_line_string);
accumulate_impl!(PolygonRef<'_>, add_polygon);
accumulate_impl!(MultiPolygon, add_multi_polygon);
accumulate_impl!(Geometry, add_geometry);

impl Centroid for Polygon {
    fn centroid(&self) -> Coord {
        PolygonRef::from(self).centroid()
    }
}

impl Centroid for GeometryCollection {
    fn centroid(&self) -> Coord {
        let mut accumulator = CentroidAccumulator::default();
        self.geoms()
            .iter()
            .for_each(|g| accumulator.add_geometry(g));
        accumulator.centroid()
    }
}
