//! Borrowed views onto part of a geometry's flat buffer.
//!
//! A view aliases its parent: it holds a slice of the parent's buffer rather than a copy. Use
//! the `From` impls on the owned types to detach a view.

pub use linestring::{LineStringMut, LineStringRef, LinearRingRef};
pub use polygon::PolygonRef;

mod linestring;
mod polygon;
