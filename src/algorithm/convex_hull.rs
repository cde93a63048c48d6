use std::cmp::Ordering;

use itertools::Itertools;
use log::debug;

use crate::algorithm::robust::{orientation_index, Orientation};
use crate::flat::iter_coords;
use crate::geometry::*;
use crate::layout::Layout;
use crate::scalar::{LineStringRef, LinearRingRef, PolygonRef};
use crate::trait_::FlatGeometry;

/// Returns the convex hull of a geometry as a closed ring.
///
/// The hull is computed with a Graham scan driven by the exact [`orientation_index`], so
/// nearly collinear input never produces a reflex vertex. Coincident points are merged and
/// collinear vertices are dropped. The ring is oriented clockwise and starts at the lowest
/// (then leftmost) input point.
///
/// Degenerate input collapses instead of failing: no points give an empty ring, a single
/// point gives `[p, p]`, and two distinct points or collinear input give `[a, b, a]`.
///
/// # Examples
///
/// ```
/// use flatgeom::algorithm::ConvexHull;
/// use flatgeom::{FlatGeometry, Layout, MultiPoint};
///
/// let points = MultiPoint::from_coords(
///     Layout::XY,
///     &[Some([1., 1.]), Some([3., 3.]), Some([4., 4.]), Some([2., 5.])],
/// );
/// let hull = points.convex_hull();
/// assert_eq!(hull.flat_coords(), &[1., 1., 2., 5., 4., 4., 1., 1.]);
/// ```
pub trait ConvexHull {
    /// Compute the convex hull.
    fn convex_hull(&self) -> LinearRing;
}

/// Compute the convex hull of the coordinates in a flat buffer.
///
/// Output coordinates are copies of whole input coordinates, so the hull keeps `layout`.
pub fn convex_hull_flat(layout: Layout, flat_coords: &[f64]) -> LinearRing {
    let mut coords = iter_coords(flat_coords, layout.stride())
        .sorted_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])))
        .dedup_by(|a, b| a[0] == b[0] && a[1] == b[1])
        .collect_vec();

    let ring = match coords.len() {
        0 => vec![],
        1 => vec![coords[0], coords[0]],
        2 => {
            let (a, b) = sorted_pair(coords[0], coords[1]);
            vec![a, b, a]
        }
        _ => {
            sort_radially(&mut coords);
            clean_ring(graham_scan(&coords))
        }
    };

    if ring.len() < 4 {
        debug!(
            "convex hull of {} distinct points is degenerate",
            coords.len()
        );
    }
    let mut hull = LinearRing::new(layout);
    hull.reserve(ring.len());
    hull.flat_coords.extend(ring.into_iter().flatten());
    hull
}

/// The lowest, then leftmost, point first.
fn sorted_pair<'a>(a: &'a [f64], b: &'a [f64]) -> (&'a [f64], &'a [f64]) {
    match pivot_order(a, b) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    }
}

fn pivot_order(a: &[f64], b: &[f64]) -> Ordering {
    a[1].total_cmp(&b[1]).then(a[0].total_cmp(&b[0]))
}

/// Move the pivot to the front and sort the rest by decreasing angle around it.
fn sort_radially(coords: &mut [&[f64]]) {
    let pivot = coords
        .iter()
        .position_min_by(|a, b| pivot_order(a, b))
        .unwrap_or(0);
    coords.swap(0, pivot);
    let (pivot, rest) = coords.split_at_mut(1);
    let pivot = pivot[0];
    rest.sort_by(|p, q| polar_compare(pivot, p, q));
}

/// Orders `p` before `q` when `q` is clockwise of `p` as seen from `origin`. Collinear points
/// are ordered by distance, closer first.
fn polar_compare(origin: &[f64], p: &[f64], q: &[f64]) -> Ordering {
    match orientation_index(origin, p, q) {
        Orientation::CounterClockwise => Ordering::Greater,
        Orientation::Clockwise => Ordering::Less,
        Orientation::Collinear => {
            let dist2 = |c: &[f64]| (c[0] - origin[0]).powi(2) + (c[1] - origin[1]).powi(2);
            dist2(p).total_cmp(&dist2(q))
        }
    }
}

/// Scan radially sorted coordinates, keeping only clockwise turns. The result is closed.
fn graham_scan<'a>(coords: &[&'a [f64]]) -> Vec<&'a [f64]> {
    let mut stack = coords[..3].to_vec();
    for &c in &coords[3..] {
        let mut p = stack.pop();
        while let (Some(top), Some(last)) = (stack.last().copied(), p) {
            if orientation_index(top, last, c) != Orientation::CounterClockwise {
                break;
            }
            p = stack.pop();
        }
        stack.extend(p);
        stack.push(c);
    }
    stack.push(coords[0]);
    stack
}

/// Drop repeated coordinates and vertices lying between their neighbours.
fn clean_ring(ring: Vec<&[f64]>) -> Vec<&[f64]> {
    let Some(&last) = ring.last() else {
        return ring;
    };
    let mut cleaned: Vec<&[f64]> = Vec::with_capacity(ring.len());
    for (&current, &next) in ring.iter().tuple_windows() {
        if current[0] == next[0] && current[1] == next[1] {
            continue;
        }
        if let Some(&previous) = cleaned.last() {
            if is_between(previous, current, next) {
                continue;
            }
        }
        cleaned.push(current);
    }
    cleaned.push(last);
    cleaned
}

/// Returns `true` if `c2` lies on the segment `c1`-`c3`.
fn is_between(c1: &[f64], c2: &[f64], c3: &[f64]) -> bool {
    if orientation_index(c1, c2, c3) != Orientation::Collinear {
        return false;
    }
    let within = |i: usize| {
        (c1[i] <= c2[i] && c2[i] <= c3[i]) || (c3[i] <= c2[i] && c2[i] <= c1[i])
    };
    if c1[0] != c3[0] {
        return within(0);
    }
    if c1[1] != c3[1] {
        return within(1);
    }
    false
}

/// Implementation over the flat buffer
macro_rules! flat_impl {
    ($type:ty) => {
        impl ConvexHull for $type {
            fn convex_hull(&self) -> LinearRing {
                convex_hull_flat(self.layout(), self.flat_coords())
            }
        }
    };
}

flat_impl!(Point);
flat_impl!(LineString);
flat_impl!(LinearRing);
flat_impl!(Polygon);
flat_impl!(MultiPoint);
flat_impl!(MultiLineString);
flat_impl!(MultiPolygon);
flat_impl!(LineStringRef<'_>);
flat_impl!(LinearRingRef<'_>);
flat_impl!(PolygonRef<'_>);

impl ConvexHull for GeometryCollection {
    fn convex_hull(&self) -> LinearRing {
        convex_hull_flat(self.layout(), &self.flat_coords())
    }
}

impl ConvexHull for Geometry {
    fn convex_hull(&self) -> LinearRing {
        match self {
            Geometry::GeometryCollection(gc) => gc.convex_hull(),
            _ => match self.as_flat() {
                Some(flat) => convex_hull_flat(flat.layout(), flat.flat_coords()),
                None => LinearRing::new(self.layout()),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use geo::{Area, ConvexHull as _};
    use proptest::prelude::*;

    use super::*;
    use crate::algorithm::cga::{is_point_in_ring, is_ring_counter_clockwise};
    use crate::test::linestring::{zigzag, zigzag_geo};
    use crate::test::polygon::{lopsided, lopsided_geo, square_with_hole};

    fn hull_of(flat: Vec<f64>) -> Vec<f64> {
        convex_hull_flat(Layout::XY, &flat).flat_coords
    }

    #[test]
    fn triangle_with_collinear_point() {
        assert_eq!(
            hull_of(vec![1., 1., 3., 3., 4., 4., 2., 5.]),
            vec![1., 1., 2., 5., 4., 4., 1., 1.]
        );
    }

    #[test]
    fn square_with_edge_points() {
        let hull = hull_of(vec![0., 0., 2., 0., 1., 0., 2., 2., 0., 2., 1., 1., 0., 1.]);
        assert_eq!(hull, vec![0., 0., 0., 2., 2., 2., 2., 0., 0., 0.]);
    }

    #[test]
    fn degenerate() {
        assert!(hull_of(vec![]).is_empty());
        assert_eq!(hull_of(vec![3., 4.]), vec![3., 4., 3., 4.]);
        assert_eq!(hull_of(vec![3., 4., 3., 4.]), vec![3., 4., 3., 4.]);
        assert_eq!(hull_of(vec![5., 5., 1., 2.]), vec![1., 2., 5., 5., 1., 2.]);
        assert_eq!(
            hull_of(vec![2., 2., 0., 0., 3., 3., 1., 1.]),
            vec![0., 0., 3., 3., 0., 0.]
        );
        assert_eq!(
            hull_of(vec![0., 1., 0., 3., 0., 2.]),
            vec![0., 1., 0., 3., 0., 1.]
        );
    }

    #[test]
    fn keeps_layout_and_ordinates() {
        let flat = vec![0., 0., 7., 4., 0., 8., 4., 4., 9., 0., 4., 10., 2., 2., 11.];
        let hull = convex_hull_flat(Layout::XYZ, &flat);
        assert_eq!(hull.layout(), Layout::XYZ);
        assert_eq!(
            hull.flat_coords(),
            &[0., 0., 7., 0., 4., 10., 4., 4., 9., 4., 0., 8., 0., 0., 7.]
        );
    }

    #[test]
    fn hull_is_clockwise() {
        let hull = lopsided().convex_hull();
        assert!(!is_ring_counter_clockwise(hull.layout(), hull.flat_coords()));
        assert!(hull.area() < 0.);
        assert_eq!(hull.num_coords(), 5);
    }

    #[test]
    fn matches_geo() {
        let hull = lopsided().convex_hull();
        assert_relative_eq!(
            hull.area().abs(),
            lopsided_geo().convex_hull().unsigned_area()
        );

        let hull = zigzag().convex_hull();
        assert_relative_eq!(
            hull.area().abs(),
            zigzag_geo().convex_hull().unsigned_area()
        );
    }

    #[test]
    fn geometry_dispatch() {
        let polygon = square_with_hole();
        let expected = polygon.convex_hull();
        assert_eq!(Geometry::from(polygon.clone()).convex_hull(), expected);

        let mut gc = GeometryCollection::new();
        gc.push(Point::new_flat(Layout::XY, vec![0., 0.]))
            .push(LineString::new_flat(Layout::XY, vec![4., 0., 4., 4.]))
            .push(Point::new_flat(Layout::XY, vec![0., 4.]));
        assert_eq!(Geometry::from(gc).convex_hull(), expected);

        let mut mp = MultiPolygon::new(Layout::XY);
        mp.push(&polygon);
        assert_eq!(mp.polygon(0).convex_hull(), expected);
        assert!(Point::new(Layout::XY).convex_hull().is_empty());
    }

    proptest! {
        #[test]
        fn idempotent(coords in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..50)) {
            let flat: Vec<f64> = coords.into_iter().flat_map(|(x, y)| [x, y]).collect();
            let hull = convex_hull_flat(Layout::XY, &flat);
            prop_assert_eq!(hull.convex_hull(), hull);
        }

        #[test]
        fn idempotent_on_grid(coords in prop::collection::vec((0u8..8, 0u8..8), 0..40)) {
            let flat: Vec<f64> = coords
                .into_iter()
                .flat_map(|(x, y)| [f64::from(x), f64::from(y)])
                .collect();
            let hull = convex_hull_flat(Layout::XY, &flat);
            prop_assert_eq!(hull.convex_hull(), hull.clone());
            for c in flat.chunks_exact(2) {
                prop_assert!(
                    hull.num_coords() < 4 || is_point_in_ring(Layout::XY, c, hull.flat_coords())
                );
            }
        }
    }
}
