//! Convert to and from [`geo_types`] geometries.
//!
//! `geo_types` is two dimensional, so conversions into it keep only X and Y and conversions
//! out of it always produce [`Layout::XY`](crate::layout::Layout::XY) geometries.

mod from_geo;
mod to_geo;

pub use to_geo::{
    geometry_to_geo, line_string_to_geo, multi_line_string_to_geo, multi_point_to_geo,
    multi_polygon_to_geo, point_to_geo, polygon_to_geo,
};
