use crate::error::{GeomError, Result};
use crate::flat::iter_coords;
use crate::geometry::*;
use crate::scalar::{LineStringRef, LinearRingRef, PolygonRef};
use crate::trait_::FlatGeometry;

fn coords_to_geo(geom: &impl FlatGeometry) -> Vec<geo_types::Coord> {
    iter_coords(geom.flat_coords(), geom.stride())
        .map(|c| geo_types::Coord { x: c[0], y: c[1] })
        .collect()
}

/// Convert a Point to a [`geo_types::Point`].
///
/// Only the first two dimensions will be kept. Fails with [`GeomError::EmptyPoint`] for the
/// empty point, which `geo_types` cannot represent.
pub fn point_to_geo(point: &Point) -> Result<geo_types::Point> {
    match (point.x(), point.y()) {
        (Some(x), Some(y)) => Ok(geo_types::Point::new(x, y)),
        _ => Err(GeomError::EmptyPoint),
    }
}

/// Convert any path (line string or ring, owned or borrowed) to a [`geo_types::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &impl FlatGeometry) -> geo_types::LineString {
    geo_types::LineString::new(coords_to_geo(line_string))
}

/// Convert a Polygon to a [`geo_types::Polygon`].
///
/// Only the first two dimensions will be kept. A polygon without rings has an empty
/// exterior.
pub fn polygon_to_geo(polygon: &PolygonRef<'_>) -> geo_types::Polygon {
    let mut rings = polygon.linear_rings().map(|ring| line_string_to_geo(&ring));
    let exterior = rings.next().unwrap_or_else(|| geo_types::LineString::new(vec![]));
    geo_types::Polygon::new(exterior, rings.collect())
}

/// Convert a MultiPoint to a [`geo_types::MultiPoint`].
///
/// Only the first two dimensions will be kept. Empty points are skipped.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo_types::MultiPoint {
    geo_types::MultiPoint::new(
        (0..multi_point.num_points())
            .filter_map(|i| multi_point.coord(i))
            .map(|c| geo_types::Point::new(c[0], c[1]))
            .collect(),
    )
}

/// Convert a MultiLineString to a [`geo_types::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo_types::MultiLineString {
    geo_types::MultiLineString::new(
        multi_line_string
            .line_strings()
            .map(|line| line_string_to_geo(&line))
            .collect(),
    )
}

/// Convert a MultiPolygon to a [`geo_types::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo_types::MultiPolygon {
    geo_types::MultiPolygon::new(
        multi_polygon
            .polygons()
            .map(|polygon| polygon_to_geo(&polygon))
            .collect(),
    )
}

/// Convert any Geometry to a [`geo_types::Geometry`].
///
/// Only the first two dimensions will be kept. A [`LinearRing`] becomes a
/// [`geo_types::LineString`]. Fails if the geometry is, or contains, an empty point.
pub fn geometry_to_geo(geometry: &Geometry) -> Result<geo_types::Geometry> {
    Ok(match geometry {
        Geometry::Point(g) => geo_types::Geometry::Point(point_to_geo(g)?),
        Geometry::LineString(g) => geo_types::Geometry::LineString(line_string_to_geo(g)),
        Geometry::LinearRing(g) => geo_types::Geometry::LineString(line_string_to_geo(g)),
        Geometry::Polygon(g) => geo_types::Geometry::Polygon(polygon_to_geo(&g.into())),
        Geometry::MultiPoint(g) => geo_types::Geometry::MultiPoint(multi_point_to_geo(g)),
        Geometry::MultiLineString(g) => {
            geo_types::Geometry::MultiLineString(multi_line_string_to_geo(g))
        }
        Geometry::MultiPolygon(g) => geo_types::Geometry::MultiPolygon(multi_polygon_to_geo(g)),
        Geometry::GeometryCollection(gc) => {
            let geoms = gc.geoms().iter().map(geometry_to_geo).collect::<Result<_>>()?;
            geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection::new_from(geoms))
        }
    })
}

impl TryFrom<&Point> for geo_types::Point {
    type Error = GeomError;

    fn try_from(value: &Point) -> Result<Self> {
        point_to_geo(value)
    }
}

macro_rules! line_string_to_geo_impl {
    ($type:ty) => {
        impl From<&$type> for geo_types::LineString {
            fn from(value: &$type) -> Self {
                line_string_to_geo(value)
            }
        }
    };
}

line_string_to_geo_impl!(LineString);
line_string_to_geo_impl!(LinearRing);
line_string_to_geo_impl!(LineStringRef<'_>);
line_string_to_geo_impl!(LinearRingRef<'_>);

impl From<&Polygon> for geo_types::Polygon {
    fn from(value: &Polygon) -> Self {
        polygon_to_geo(&value.into())
    }
}

impl From<&PolygonRef<'_>> for geo_types::Polygon {
    fn from(value: &PolygonRef<'_>) -> Self {
        polygon_to_geo(value)
    }
}

impl From<&MultiPoint> for geo_types::MultiPoint {
    fn from(value: &MultiPoint) -> Self {
        multi_point_to_geo(value)
    }
}

impl From<&MultiLineString> for geo_types::MultiLineString {
    fn from(value: &MultiLineString) -> Self {
        multi_line_string_to_geo(value)
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon {
    fn from(value: &MultiPolygon) -> Self {
        multi_polygon_to_geo(value)
    }
}

impl TryFrom<&Geometry> for geo_types::Geometry {
    type Error = GeomError;

    fn try_from(value: &Geometry) -> Result<Self> {
        geometry_to_geo(value)
    }
}
