//! Exact geometric predicates on XY coordinates.

mod expansion;
mod intersection;
mod orientation;

pub use expansion::Expansion;
pub use intersection::intersection;
pub use orientation::{orientation_index, orientation_index_exact, Orientation};
