//! Computational geometry on flat coordinate buffers.

pub mod cga;
pub mod centroid;
pub mod convex_hull;
pub mod robust;

pub use centroid::Centroid;
pub use convex_hull::ConvexHull;
