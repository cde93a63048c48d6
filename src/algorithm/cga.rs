//! Basic computational geometry on XY coordinates.
//!
//! Rings and lines are passed as a [`Layout`] and a flat buffer. Single coordinates are
//! slices; only their first two ordinates are read.

use itertools::Itertools;

use crate::algorithm::robust::{orientation_index, Orientation};
use crate::flat::{double_area, iter_coords};
use crate::layout::Layout;

/// Where a point lies relative to a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Strictly inside the ring.
    Interior,
    /// On one of the ring's segments.
    Boundary,
    /// Strictly outside the ring.
    Exterior,
}

/// The signed area of a ring: positive when clockwise, negative when counter-clockwise.
///
/// ```
/// use flatgeom::algorithm::cga::signed_area;
/// use flatgeom::Layout;
///
/// let ring = [10., 10., 20., 10., 30., 30., 10., 30., 10., 10.];
/// assert_eq!(signed_area(Layout::XY, &ring), -300.);
/// ```
pub fn signed_area(layout: Layout, ring: &[f64]) -> f64 {
    -double_area(ring, 0, ring.len(), layout.stride()) / 2.
}

/// Returns `true` if the closed `ring` is wound counter-clockwise.
///
/// Rings with fewer than four coordinates, or whose highest point has no distinct neighbour, are
/// not counter-clockwise.
pub fn is_ring_counter_clockwise(layout: Layout, ring: &[f64]) -> bool {
    let coords: Vec<&[f64]> = iter_coords(ring, layout.stride()).collect();
    if coords.len() < 4 {
        return false;
    }
    // Drop the closing coordinate.
    let n = coords.len() - 1;

    let mut hi = 0;
    for (i, c) in coords.iter().enumerate().take(n).skip(1) {
        if c[1] > coords[hi][1] {
            hi = i;
        }
    }

    let mut prev = hi;
    loop {
        prev = (prev + n - 1) % n;
        if !equal_xy(coords[prev], coords[hi]) || prev == hi {
            break;
        }
    }
    let mut next = hi;
    loop {
        next = (next + 1) % n;
        if !equal_xy(coords[next], coords[hi]) || next == hi {
            break;
        }
    }

    if equal_xy(coords[prev], coords[hi])
        || equal_xy(coords[next], coords[hi])
        || equal_xy(coords[prev], coords[next])
    {
        return false;
    }

    match orientation_index(coords[prev], coords[hi], coords[next]) {
        Orientation::CounterClockwise => true,
        Orientation::Clockwise => false,
        // A flat spike at the top: the ring is counter-clockwise if it arrives from the right.
        Orientation::Collinear => coords[prev][0] > coords[next][0],
    }
}

/// Locate `p` relative to `ring` by counting crossings of a ray cast to the right.
///
/// ```
/// use flatgeom::algorithm::cga::{locate_point_in_ring, Location};
/// use flatgeom::Layout;
///
/// let ring = [10., 10., 20., 10., 30., 30., 10., 30., 10., 10.];
/// assert_eq!(locate_point_in_ring(Layout::XY, &[15., 15.], &ring), Location::Interior);
/// ```
pub fn locate_point_in_ring(layout: Layout, p: &[f64], ring: &[f64]) -> Location {
    let mut crossings = 0;
    for (p2, p1) in iter_coords(ring, layout.stride()).tuple_windows() {
        if p1[0] < p[0] && p2[0] < p[0] {
            continue;
        }
        if p[0] == p2[0] && p[1] == p2[1] {
            return Location::Boundary;
        }
        if p1[1] == p[1] && p2[1] == p[1] {
            let (min_x, max_x) = min_max(p1[0], p2[0]);
            if p[0] >= min_x && p[0] <= max_x {
                return Location::Boundary;
            }
            continue;
        }
        if (p1[1] > p[1] && p2[1] <= p[1]) || (p2[1] > p[1] && p1[1] <= p[1]) {
            let mut orientation = orientation_index(p1, p2, p);
            if orientation == Orientation::Collinear {
                return Location::Boundary;
            }
            if p2[1] < p1[1] {
                orientation = orientation.reverse();
            }
            if orientation == Orientation::CounterClockwise {
                crossings += 1;
            }
        }
    }
    if crossings % 2 == 1 {
        Location::Interior
    } else {
        Location::Exterior
    }
}

/// Returns `true` if `p` lies inside or on the boundary of `ring`.
pub fn is_point_in_ring(layout: Layout, p: &[f64], ring: &[f64]) -> bool {
    locate_point_in_ring(layout, p, ring) != Location::Exterior
}

/// Returns `true` if `p` lies on any segment of `line`.
pub fn is_on_line(layout: Layout, p: &[f64], line: &[f64]) -> bool {
    iter_coords(line, layout.stride())
        .tuple_windows()
        .any(|(a, b)| is_point_on_segment(p, a, b))
}

fn is_point_on_segment(p: &[f64], a: &[f64], b: &[f64]) -> bool {
    is_point_within_line_bounds(p, a, b)
        && orientation_index(a, b, p) == Orientation::Collinear
        && orientation_index(b, a, p) == Orientation::Collinear
}

/// The Euclidean distance between two coordinates.
pub fn distance(c1: &[f64], c2: &[f64]) -> f64 {
    (c1[0] - c2[0]).hypot(c1[1] - c2[1])
}

/// The distance from `p` to the segment `a`-`b`.
pub fn distance_from_point_to_line(p: &[f64], a: &[f64], b: &[f64]) -> f64 {
    if equal_xy(a, b) {
        return distance(p, a);
    }
    let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
    let len2 = dx * dx + dy * dy;
    let r = ((p[0] - a[0]) * dx + (p[1] - a[1]) * dy) / len2;
    if r <= 0. {
        return distance(p, a);
    }
    if r >= 1. {
        return distance(p, b);
    }
    let s = ((a[1] - p[1]) * dx - (a[0] - p[0]) * dy) / len2;
    s.abs() * len2.sqrt()
}

/// The distance from `p` to the infinite line through `a` and `b`.
pub fn perpendicular_distance_from_point_to_line(p: &[f64], a: &[f64], b: &[f64]) -> f64 {
    let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
    let len2 = dx * dx + dy * dy;
    let s = ((a[1] - p[1]) * dx - (a[0] - p[0]) * dy) / len2;
    s.abs() * len2.sqrt()
}

/// The distance from `p` to the nearest segment of `line`.
///
/// A single coordinate is treated as a point. An empty line is infinitely far away.
pub fn distance_from_point_to_line_string(layout: Layout, p: &[f64], line: &[f64]) -> f64 {
    let mut coords = iter_coords(line, layout.stride()).peekable();
    let Some(first) = coords.peek().copied() else {
        return f64::INFINITY;
    };
    let min = coords
        .tuple_windows()
        .map(|(a, b)| distance_from_point_to_line(p, a, b))
        .fold(f64::INFINITY, f64::min);
    if min.is_infinite() {
        distance(p, first)
    } else {
        min
    }
}

/// The minimum distance between the segments `a`-`b` and `c`-`d`; zero when they intersect.
pub fn distance_from_line_to_line(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> f64 {
    if equal_xy(a, b) {
        return distance_from_point_to_line(a, c, d);
    }
    if equal_xy(c, d) {
        return distance_from_point_to_line(d, a, b);
    }

    if do_lines_overlap(a, b, c, d) {
        let denom = (b[0] - a[0]) * (d[1] - c[1]) - (b[1] - a[1]) * (d[0] - c[0]);
        if denom != 0. {
            let r = ((a[1] - c[1]) * (d[0] - c[0]) - (a[0] - c[0]) * (d[1] - c[1])) / denom;
            let s = ((a[1] - c[1]) * (b[0] - a[0]) - (a[0] - c[0]) * (b[1] - a[1])) / denom;
            if (0. ..=1.).contains(&r) && (0. ..=1.).contains(&s) {
                return 0.;
            }
        }
    }

    [
        distance_from_point_to_line(a, c, d),
        distance_from_point_to_line(b, c, d),
        distance_from_point_to_line(c, a, b),
        distance_from_point_to_line(d, a, b),
    ]
    .into_iter()
    .fold(f64::INFINITY, f64::min)
}

/// Returns `true` if `p` lies within the bounding box of `a` and `b`.
pub fn is_point_within_line_bounds(p: &[f64], a: &[f64], b: &[f64]) -> bool {
    let (min_x, max_x) = min_max(a[0], b[0]);
    let (min_y, max_y) = min_max(a[1], b[1]);
    p[0] >= min_x && p[0] <= max_x && p[1] >= min_y && p[1] <= max_y
}

/// Returns `true` if the bounding boxes of `a`-`b` and `c`-`d` intersect.
pub fn do_lines_overlap(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> bool {
    let (min_p, max_p) = min_max(a[0], b[0]);
    let (min_q, max_q) = min_max(c[0], d[0]);
    if min_p > max_q || max_p < min_q {
        return false;
    }
    let (min_p, max_p) = min_max(a[1], b[1]);
    let (min_q, max_q) = min_max(c[1], d[1]);
    !(min_p > max_q || max_p < min_q)
}

/// Returns `true` if the XY values at `flat1[start1..]` and `flat2[start2..]` are equal.
pub fn equal(flat1: &[f64], start1: usize, flat2: &[f64], start2: usize) -> bool {
    flat1[start1] == flat2[start2] && flat1[start1 + 1] == flat2[start2 + 1]
}

fn equal_xy(a: &[f64], b: &[f64]) -> bool {
    equal(a, 0, b, 0)
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
