//! Defines [`GeomError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::layout::Layout;

/// Enum with all errors in this crate.
///
/// Numerically undefined results are not errors: a parallel-line intersection yields an
/// infinite coordinate and an empty centroid yields a NaN coordinate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeomError {
    /// A coordinate's component count disagrees with the geometry's stride.
    #[error("stride mismatch: got {got}, want {want}")]
    StrideMismatch {
        /// Number of components in the offending coordinate.
        got: usize,
        /// Stride of the geometry.
        want: usize,
    },

    /// An element pushed into a collection has a different layout than the collection.
    #[error("layout mismatch: got {got}, want {want}")]
    LayoutMismatch {
        /// Layout of the element.
        got: Layout,
        /// Layout of the collection.
        want: Layout,
    },

    /// A geometry without layout carries coordinates.
    #[error("non-empty flat coordinates with a zero stride")]
    NonEmptyFlatCoords,

    /// A geometry without layout carries ends.
    #[error("non-empty ends with a zero stride")]
    NonEmptyEnds,

    /// A geometry without layout carries endss.
    #[error("non-empty endss with a zero stride")]
    NonEmptyEndss,

    /// The flat buffer length is not a multiple of the stride.
    #[error("flat coordinates length {len} is not a multiple of stride {stride}")]
    LengthStrideMismatch {
        /// Length of the flat buffer.
        len: usize,
        /// Stride of the geometry.
        stride: usize,
    },

    /// An end is not a multiple of the stride.
    #[error("end {end} is not a multiple of stride {stride}")]
    MisalignedEnd {
        /// The misaligned end.
        end: usize,
        /// Stride of the geometry.
        stride: usize,
    },

    /// An end is smaller than the end before it.
    #[error("end {end} is smaller than previous end {previous}")]
    OutOfOrderEnd {
        /// The out-of-order end.
        end: usize,
        /// The end preceding it.
        previous: usize,
    },

    /// The last end does not match the flat buffer length.
    #[error("last end {end} does not match flat coordinates length {len}")]
    IncorrectEnd {
        /// The last end (0 when there are none).
        end: usize,
        /// Length of the flat buffer.
        len: usize,
    },

    /// A multi point element holds neither zero nor one coordinate.
    #[error("multi point element {index} is neither empty nor a single coordinate")]
    InvalidPointEnd {
        /// Index of the offending point.
        index: usize,
    },

    /// Bounds were set from the wrong number of values.
    #[error("bounds need {want} values, got {got}")]
    InvalidBounds {
        /// Number of values supplied.
        got: usize,
        /// Number of values needed (twice the stride).
        want: usize,
    },

    /// An empty point cannot be converted to a type that has no empty representation.
    #[error("empty point")]
    EmptyPoint,

    /// Coordinate dimensions that no [`Layout`] represents.
    #[error("unsupported dimensions: {0}")]
    UnsupportedDimensions(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeomError>;
