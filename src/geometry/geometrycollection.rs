#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{GeomError, Result};
use crate::flat::iter_coords;
use crate::geometry::Geometry;
use crate::layout::Layout;

/// A collection of arbitrary geometries.
///
/// Members own their own buffers. Until a layout is set with
/// [`GeometryCollection::set_layout`], any member may be pushed and the collection's layout
/// is the smallest layout covering all members.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryCollection {
    layout: Layout,
    geoms: Vec<Geometry>,
    srid: i32,
}

impl GeometryCollection {
    /// Create an empty collection without a layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding `geoms`.
    pub fn from_geoms(geoms: Vec<Geometry>) -> Self {
        Self {
            layout: Layout::NoLayout,
            geoms,
            srid: 0,
        }
    }

    /// Access member `i`.
    pub fn geom(&self, i: usize) -> &Geometry {
        &self.geoms[i]
    }

    /// Access all members.
    pub fn geoms(&self) -> &[Geometry] {
        &self.geoms
    }

    /// The number of members.
    pub fn num_geoms(&self) -> usize {
        self.geoms.len()
    }

    /// The explicit layout if one was set, otherwise the smallest layout covering every
    /// member. XYZ and XYM members combine to XYZM.
    pub fn layout(&self) -> Layout {
        if self.layout != Layout::NoLayout {
            return self.layout;
        }
        self.geoms
            .iter()
            .fold(Layout::NoLayout, |layout, geom| layout.covering(geom.layout()))
    }

    /// The stride of [`GeometryCollection::layout`].
    pub fn stride(&self) -> usize {
        self.layout().stride()
    }

    /// The bounds of every member, in the collection's layout.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new(self.layout());
        for geom in &self.geoms {
            bounds.extend_geometry(geom);
        }
        bounds
    }

    /// Copy the coordinates of every member, nested collections included, into one flat
    /// buffer in the collection's layout. Ordinates a member lacks are NaN.
    pub fn flat_coords(&self) -> Vec<f64> {
        let mut flat_coords = vec![];
        self.extend_flat_coords(self.layout(), &mut flat_coords);
        flat_coords
    }

    fn extend_flat_coords(&self, layout: Layout, out: &mut Vec<f64>) {
        let stride = layout.stride();
        for geom in &self.geoms {
            let Some(flat) = geom.as_flat() else {
                if let Geometry::GeometryCollection(gc) = geom {
                    gc.extend_flat_coords(layout, out);
                }
                continue;
            };
            let mapping = flat.layout().ordinate_mapping(layout);
            for coord in iter_coords(flat.flat_coords(), flat.stride()) {
                let start = out.len();
                out.resize(start + stride, f64::NAN);
                for &(src, dst) in &mapping {
                    out[start + dst] = coord[src];
                }
            }
        }
    }

    /// Returns `true` if every member is empty, including when there are none.
    pub fn is_empty(&self) -> bool {
        self.geoms.iter().all(Geometry::is_empty)
    }

    /// The summed signed area of every member.
    pub fn area(&self) -> f64 {
        self.geoms.iter().map(Geometry::area).sum()
    }

    /// The summed length of every member.
    pub fn length(&self) -> f64 {
        self.geoms.iter().map(Geometry::length).sum()
    }

    /// The spatial reference identifier.
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// Set the SRID.
    pub fn set_srid(&mut self, srid: i32) -> &mut Self {
        self.srid = srid;
        self
    }

    /// Set the SRID, consuming and returning `self`.
    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    /// Append a member.
    ///
    /// Fails if a layout was set and the member's layout differs from it.
    pub fn try_push(&mut self, geom: impl Into<Geometry>) -> Result<()> {
        let geom = geom.into();
        if self.layout != Layout::NoLayout && geom.layout() != self.layout {
            return Err(GeomError::LayoutMismatch {
                got: geom.layout(),
                want: self.layout,
            });
        }
        self.geoms.push(geom);
        Ok(())
    }

    /// Like [`GeometryCollection::try_push`], panicking on a layout mismatch.
    pub fn push(&mut self, geom: impl Into<Geometry>) -> &mut Self {
        self.try_push(geom).unwrap();
        self
    }

    /// Check that every member has `layout`. [`Layout::NoLayout`] matches anything.
    pub fn check_layout(&self, layout: Layout) -> Result<()> {
        if layout == Layout::NoLayout {
            return Ok(());
        }
        match self.geoms.iter().find(|geom| geom.layout() != layout) {
            Some(geom) => Err(GeomError::LayoutMismatch {
                got: geom.layout(),
                want: layout,
            }),
            None => Ok(()),
        }
    }

    /// Fix the layout. Fails if a member has a different layout.
    pub fn try_set_layout(&mut self, layout: Layout) -> Result<()> {
        self.check_layout(layout)?;
        self.layout = layout;
        Ok(())
    }

    /// Like [`GeometryCollection::try_set_layout`], panicking on a mismatch.
    pub fn set_layout(&mut self, layout: Layout) -> &mut Self {
        self.try_set_layout(layout).unwrap();
        self
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
        Self::from_geoms(iter.into_iter().collect())
    }
}
