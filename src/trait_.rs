//! Defines [`FlatGeometry`], the capability shared by every flat-backed geometry.

use crate::bounds::Bounds;
use crate::coord::FlatCoord;
use crate::error::Result;
use crate::layout::Layout;

/// A geometry backed by a single flat coordinate buffer.
///
/// Encoders only need this trait: the layout, the flat buffer and its ends are enough to
/// write any flat geometry, and every variant can be rebuilt from the same values.
pub trait FlatGeometry {
    /// The coordinate layout of this geometry.
    fn layout(&self) -> Layout;

    /// Access the flat coordinate buffer.
    fn flat_coords(&self) -> &[f64];

    /// The end offsets of this geometry's sub-structures.
    ///
    /// Empty for points and lines.
    fn ends(&self) -> &[usize] {
        &[]
    }

    /// The end offsets of this geometry's sub-sub-structures.
    ///
    /// Only multi polygons have endss.
    fn endss(&self) -> &[Vec<usize>] {
        &[]
    }

    /// The spatial reference identifier.
    fn srid(&self) -> i32;

    /// Check the structural invariants of the flat buffer and its ends.
    fn verify(&self) -> Result<()>;

    /// The number of values per coordinate.
    fn stride(&self) -> usize {
        self.layout().stride()
    }

    /// Returns `true` if this geometry holds no coordinates.
    fn is_empty(&self) -> bool {
        self.flat_coords().is_empty()
    }

    /// The number of coordinates in the flat buffer.
    fn num_coords(&self) -> usize {
        match self.stride() {
            0 => 0,
            stride => self.flat_coords().len() / stride,
        }
    }

    /// Borrow coordinate `i` of the flat buffer.
    ///
    /// # Panics
    ///
    /// If `i >= self.num_coords()`.
    fn flat_coord(&self, i: usize) -> FlatCoord<'_> {
        FlatCoord::new(self.flat_coords(), i, self.layout())
    }

    /// Compute the bounds of this geometry. Never cached.
    fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new(self.layout());
        let flat_coords = self.flat_coords();
        bounds.extend_flat_coords(flat_coords, 0, flat_coords.len(), self.stride());
        bounds
    }
}
