//! Owned geometries backed by flat coordinate buffers, and the [`Geometry`] enum over them.

pub use geometrycollection::GeometryCollection;
pub use linearring::LinearRing;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

mod geometrycollection;
mod linearring;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::layout::Layout;
use crate::trait_::FlatGeometry;

/// Builder-style SRID setters, `reserve`, and the conversion into [`Geometry`], shared by every
/// flat-backed geometry.
macro_rules! impl_geometry_common {
    ($type:ident) => {
        impl $type {
            /// Set the SRID, consuming and returning `self`.
            pub fn with_srid(mut self, srid: i32) -> Self {
                self.srid = srid;
                self
            }

            /// Set the SRID.
            pub fn set_srid(&mut self, srid: i32) -> &mut Self {
                self.srid = srid;
                self
            }

            /// Reserve room for at least `n` more coordinates.
            pub fn reserve(&mut self, n: usize) {
                self.flat_coords.reserve(n * self.layout.stride());
            }
        }

        impl From<$type> for $crate::geometry::Geometry {
            fn from(value: $type) -> Self {
                $crate::geometry::Geometry::$type(value)
            }
        }
    };
}

pub(crate) use impl_geometry_common;

/// Forward a `&self` method to whichever geometry a [`Geometry`] holds.
macro_rules! geometry_delegate_impl {
    ($($(#[$attr:meta])* fn $method:ident(&self) -> $return:ty;)+) => {
        $(
            $(#[$attr])*
            pub fn $method(&self) -> $return {
                match self {
                    Geometry::Point(g) => g.$method(),
                    Geometry::LineString(g) => g.$method(),
                    Geometry::LinearRing(g) => g.$method(),
                    Geometry::Polygon(g) => g.$method(),
                    Geometry::MultiPoint(g) => g.$method(),
                    Geometry::MultiLineString(g) => g.$method(),
                    Geometry::MultiPolygon(g) => g.$method(),
                    Geometry::GeometryCollection(g) => g.$method(),
                }
            }
        )+
    };
}

/// Any geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    /// A single point.
    Point(Point),
    /// A path.
    LineString(LineString),
    /// A ring, expected to be closed.
    LinearRing(LinearRing),
    /// A shell with zero or more holes.
    Polygon(Polygon),
    /// A collection of points.
    MultiPoint(MultiPoint),
    /// A collection of paths.
    MultiLineString(MultiLineString),
    /// A collection of polygons.
    MultiPolygon(MultiPolygon),
    /// A collection of arbitrary geometries.
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    geometry_delegate_impl! {
        /// The layout of the geometry. For a collection without an explicit layout, the
        /// smallest layout covering its members.
        fn layout(&self) -> Layout;

        /// The number of values per coordinate.
        fn stride(&self) -> usize;

        /// The spatial reference identifier.
        fn srid(&self) -> i32;

        /// Returns `true` if the geometry holds no coordinates.
        fn is_empty(&self) -> bool;

        /// Compute the bounds of the geometry.
        fn bounds(&self) -> Bounds;

        /// The signed planar area.
        fn area(&self) -> f64;

        /// The planar length, or perimeter for polygonal geometries.
        fn length(&self) -> f64;
    }

    /// Access the flat representation, if there is one.
    ///
    /// Returns `None` for a [`GeometryCollection`], which is not flat-backed.
    pub fn as_flat(&self) -> Option<&dyn FlatGeometry> {
        match self {
            Geometry::Point(g) => Some(g),
            Geometry::LineString(g) => Some(g),
            Geometry::LinearRing(g) => Some(g),
            Geometry::Polygon(g) => Some(g),
            Geometry::MultiPoint(g) => Some(g),
            Geometry::MultiLineString(g) => Some(g),
            Geometry::MultiPolygon(g) => Some(g),
            Geometry::GeometryCollection(_) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn dispatch() {
        let ring = LinearRing::new_flat(
            Layout::XY,
            vec![10., 10., 20., 10., 30., 30., 10., 30., 10., 10.],
        );
        let geom = Geometry::from(ring.with_srid(4326));
        assert_eq!(geom.layout(), Layout::XY);
        assert_eq!(geom.stride(), 2);
        assert_eq!(geom.srid(), 4326);
        assert!(!geom.is_empty());
        assert_relative_eq!(geom.area(), 300.);
        assert!(geom.as_flat().is_some());
        assert_eq!(geom.as_flat().unwrap().num_coords(), 5);
    }

    #[test]
    fn collection_is_not_flat() {
        let geom = Geometry::from(GeometryCollection::new());
        assert!(geom.as_flat().is_none());
        assert!(geom.is_empty());
        assert_eq!(geom.layout(), Layout::NoLayout);
    }
}
