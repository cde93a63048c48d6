//! Conversions between this crate's geometries and other geometry representations.

pub mod geo;
