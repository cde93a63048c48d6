//! A geometry model backed by flat coordinate buffers, plus the computational geometry
//! kernels built on it: exact orientation and intersection predicates, ring and distance
//! helpers, convex hulls and centroids.
//!
//! Every geometry stores its coordinates in a single `Vec<f64>` laid out according to its
//! [`Layout`], with nested structure described by end offsets into that buffer.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use bounds::Bounds;
pub use coord::{Coord, FlatCoord};
pub use error::{GeomError, Result};
pub use geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
pub use layout::Layout;
pub use trait_::FlatGeometry;

pub mod algorithm;
pub mod bounds;
pub mod coord;
pub mod error;
pub mod flat;
pub mod geometry;
pub mod io;
pub mod layout;
pub mod scalar;
pub mod trait_;
