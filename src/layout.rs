use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};

/// The coordinate layout of a geometry.
///
/// The layout fixes how many values each coordinate occupies in a flat buffer (its stride)
/// and at which position the optional Z and M ordinates live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout {
    /// No layout, used for empty or uninitialized geometries.
    #[default]
    NoLayout,

    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Layout {
    /// Returns the number of values per coordinate.
    pub fn stride(&self) -> usize {
        match self {
            Layout::NoLayout => 0,
            Layout::XY => 2,
            Layout::XYZ => 3,
            Layout::XYM => 3,
            Layout::XYZM => 4,
        }
    }

    /// Index of the Z ordinate within a coordinate, if the layout has one.
    pub fn z_index(&self) -> Option<usize> {
        match self {
            Layout::XYZ | Layout::XYZM => Some(2),
            _ => None,
        }
    }

    /// Index of the M ordinate within a coordinate, if the layout has one.
    pub fn m_index(&self) -> Option<usize> {
        match self {
            Layout::XYM => Some(2),
            Layout::XYZM => Some(3),
            _ => None,
        }
    }

    /// Returns `true` if coordinates carry a Z ordinate.
    pub fn has_z(&self) -> bool {
        self.z_index().is_some()
    }

    /// Returns `true` if coordinates carry an M ordinate.
    pub fn has_m(&self) -> bool {
        self.m_index().is_some()
    }

    /// The smallest layout that can hold coordinates of both `self` and `other`.
    ///
    /// XYZ and XYM combine to XYZM.
    pub fn covering(self, other: Layout) -> Layout {
        if self == Layout::NoLayout {
            return other;
        }
        if other == Layout::NoLayout {
            return self;
        }
        match (self.has_z() || other.has_z(), self.has_m() || other.has_m()) {
            (false, false) => Layout::XY,
            (true, false) => Layout::XYZ,
            (false, true) => Layout::XYM,
            (true, true) => Layout::XYZM,
        }
    }

    /// `(source, destination)` ordinate index pairs carried from `self` into `to`.
    ///
    /// X and Y always carry over; Z and M only when both layouts have them.
    pub fn ordinate_mapping(self, to: Layout) -> Vec<(usize, usize)> {
        let mut mapping = vec![(0, 0), (1, 1)];
        if let (Some(src), Some(dst)) = (self.z_index(), to.z_index()) {
            mapping.push((src, dst));
        }
        if let (Some(src), Some(dst)) = (self.m_index(), to.m_index()) {
            mapping.push((src, dst));
        }
        mapping.retain(|&(src, dst)| src < self.stride() && dst < to.stride());
        mapping
    }
}

impl From<Layout> for geo_traits::Dimensions {
    fn from(value: Layout) -> Self {
        match value {
            Layout::NoLayout => geo_traits::Dimensions::Unknown(0),
            Layout::XY => geo_traits::Dimensions::Xy,
            Layout::XYZ => geo_traits::Dimensions::Xyz,
            Layout::XYM => geo_traits::Dimensions::Xym,
            Layout::XYZM => geo_traits::Dimensions::Xyzm,
        }
    }
}

impl TryFrom<geo_traits::Dimensions> for Layout {
    type Error = GeomError;

    fn try_from(value: geo_traits::Dimensions) -> Result<Self> {
        match value {
            geo_traits::Dimensions::Unknown(0) => Ok(Layout::NoLayout),
            geo_traits::Dimensions::Xy | geo_traits::Dimensions::Unknown(2) => Ok(Layout::XY),
            geo_traits::Dimensions::Xyz | geo_traits::Dimensions::Unknown(3) => Ok(Layout::XYZ),
            geo_traits::Dimensions::Xym => Ok(Layout::XYM),
            geo_traits::Dimensions::Xyzm | geo_traits::Dimensions::Unknown(4) => Ok(Layout::XYZM),
            _ => Err(GeomError::UnsupportedDimensions(format!("{value:?}"))),
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::NoLayout => write!(f, "NoLayout"),
            Layout::XY => write!(f, "XY"),
            Layout::XYZ => write!(f, "XYZ"),
            Layout::XYM => write!(f, "XYM"),
            Layout::XYZM => write!(f, "XYZM"),
        }
    }
}

#[cfg(test)]
mod test {
    use std::iter::zip;

    use super::*;

    #[test]
    fn strides() {
        assert_eq!(Layout::NoLayout.stride(), 0);
        assert_eq!(Layout::XY.stride(), 2);
        assert_eq!(Layout::XYZ.stride(), 3);
        assert_eq!(Layout::XYM.stride(), 3);
        assert_eq!(Layout::XYZM.stride(), 4);
    }

    #[test]
    fn ordinate_indices() {
        assert_eq!(Layout::XY.z_index(), None);
        assert_eq!(Layout::XYZ.z_index(), Some(2));
        assert_eq!(Layout::XYM.z_index(), None);
        assert_eq!(Layout::XYM.m_index(), Some(2));
        assert_eq!(Layout::XYZM.z_index(), Some(2));
        assert_eq!(Layout::XYZM.m_index(), Some(3));
    }

    #[test]
    fn covering() {
        assert_eq!(Layout::NoLayout.covering(Layout::NoLayout), Layout::NoLayout);
        assert_eq!(Layout::NoLayout.covering(Layout::XYM), Layout::XYM);
        assert_eq!(Layout::XY.covering(Layout::XYZ), Layout::XYZ);
        assert_eq!(Layout::XYZ.covering(Layout::XYM), Layout::XYZM);
        assert_eq!(Layout::XYM.covering(Layout::XYZ), Layout::XYZM);
        assert_eq!(Layout::XYZM.covering(Layout::XY), Layout::XYZM);
    }

    #[test]
    fn ordinate_mapping() {
        assert_eq!(Layout::XY.ordinate_mapping(Layout::XYZM), vec![(0, 0), (1, 1)]);
        assert_eq!(
            Layout::XYM.ordinate_mapping(Layout::XYZM),
            vec![(0, 0), (1, 1), (2, 3)]
        );
        assert_eq!(
            Layout::XYZM.ordinate_mapping(Layout::XYZ),
            vec![(0, 0), (1, 1), (2, 2)]
        );
        assert!(Layout::NoLayout.ordinate_mapping(Layout::XY).is_empty());
    }

    #[test]
    fn geotraits_dimensions() {
        let layouts = [Layout::XY, Layout::XYZ, Layout::XYM, Layout::XYZM];
        let geotraits_dims = [
            geo_traits::Dimensions::Xy,
            geo_traits::Dimensions::Xyz,
            geo_traits::Dimensions::Xym,
            geo_traits::Dimensions::Xyzm,
        ];

        for (layout, geotraits_dim) in zip(layouts, geotraits_dims) {
            let into_geotraits_dim: geo_traits::Dimensions = layout.into();
            assert_eq!(into_geotraits_dim, geotraits_dim);

            let into_layout: Layout = geotraits_dim.try_into().unwrap();
            assert_eq!(into_layout, layout);

            assert_eq!(layout.stride(), geotraits_dim.size());
        }

        let layout3: Layout = geo_traits::Dimensions::Unknown(3).try_into().unwrap();
        assert_eq!(layout3, Layout::XYZ);

        let err: Result<Layout> = geo_traits::Dimensions::Unknown(7).try_into();
        assert_eq!(
            err.unwrap_err().to_string(),
            "unsupported dimensions: Unknown(7)"
        );
    }
}
