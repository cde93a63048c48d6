use crate::geometry::*;
use crate::layout::Layout;

fn extend_flat(flat_coords: &mut Vec<f64>, line_string: &geo_types::LineString) {
    flat_coords.reserve(line_string.0.len() * 2);
    line_string
        .coords()
        .for_each(|c| flat_coords.extend_from_slice(&[c.x, c.y]));
}

/// Append the rings of `polygon` to `flat_coords` and return their ends.
fn extend_polygon(flat_coords: &mut Vec<f64>, polygon: &geo_types::Polygon) -> Vec<usize> {
    if polygon.exterior().0.is_empty() && polygon.interiors().is_empty() {
        return vec![];
    }
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(|ring| {
            extend_flat(flat_coords, ring);
            flat_coords.len()
        })
        .collect()
}

impl From<&geo_types::Point> for Point {
    fn from(value: &geo_types::Point) -> Self {
        Self {
            layout: Layout::XY,
            flat_coords: vec![value.x(), value.y()],
            srid: 0,
        }
    }
}

impl From<&geo_types::LineString> for LineString {
    fn from(value: &geo_types::LineString) -> Self {
        let mut flat_coords = vec![];
        extend_flat(&mut flat_coords, value);
        Self {
            layout: Layout::XY,
            flat_coords,
            srid: 0,
        }
    }
}

impl From<&geo_types::LineString> for LinearRing {
    fn from(value: &geo_types::LineString) -> Self {
        let mut flat_coords = vec![];
        extend_flat(&mut flat_coords, value);
        Self {
            layout: Layout::XY,
            flat_coords,
            srid: 0,
        }
    }
}

impl From<&geo_types::Polygon> for Polygon {
    fn from(value: &geo_types::Polygon) -> Self {
        let mut flat_coords = vec![];
        let ends = extend_polygon(&mut flat_coords, value);
        Self {
            layout: Layout::XY,
            flat_coords,
            ends,
            srid: 0,
        }
    }
}

impl From<&geo_types::MultiPoint> for MultiPoint {
    fn from(value: &geo_types::MultiPoint) -> Self {
        let flat_coords = value.iter().flat_map(|p| [p.x(), p.y()]).collect();
        let ends = (1..=value.0.len()).map(|i| 2 * i).collect();
        Self {
            layout: Layout::XY,
            flat_coords,
            ends,
            srid: 0,
        }
    }
}

impl From<&geo_types::MultiLineString> for MultiLineString {
    fn from(value: &geo_types::MultiLineString) -> Self {
        let mut flat_coords = vec![];
        let ends = value
            .iter()
            .map(|line_string| {
                extend_flat(&mut flat_coords, line_string);
                flat_coords.len()
            })
            .collect();
        Self {
            layout: Layout::XY,
            flat_coords,
            ends,
            srid: 0,
        }
    }
}

impl From<&geo_types::MultiPolygon> for MultiPolygon {
    fn from(value: &geo_types::MultiPolygon) -> Self {
        let mut flat_coords = vec![];
        let endss = value
            .iter()
            .map(|polygon| extend_polygon(&mut flat_coords, polygon))
            .collect();
        Self {
            layout: Layout::XY,
            flat_coords,
            endss,
            srid: 0,
        }
    }
}

/// [`geo_types::Line`] becomes a two-point [`LineString`], while [`geo_types::Rect`] and
/// [`geo_types::Triangle`] become closed [`Polygon`]s.
impl From<&geo_types::Geometry> for Geometry {
    fn from(value: &geo_types::Geometry) -> Self {
        match value {
            geo_types::Geometry::Point(g) => Point::from(g).into(),
            geo_types::Geometry::Line(g) => {
                LineString::from(&geo_types::LineString::from(vec![g.start, g.end])).into()
            }
            geo_types::Geometry::LineString(g) => LineString::from(g).into(),
            geo_types::Geometry::Polygon(g) => Polygon::from(g).into(),
            geo_types::Geometry::MultiPoint(g) => MultiPoint::from(g).into(),
            geo_types::Geometry::MultiLineString(g) => MultiLineString::from(g).into(),
            geo_types::Geometry::MultiPolygon(g) => MultiPolygon::from(g).into(),
            geo_types::Geometry::GeometryCollection(g) => {
                GeometryCollection::from_geoms(g.iter().map(Geometry::from).collect()).into()
            }
            geo_types::Geometry::Rect(g) => Polygon::from(&g.to_polygon()).into(),
            geo_types::Geometry::Triangle(g) => Polygon::from(&g.to_polygon()).into(),
        }
    }
}
