use log::trace;

use crate::algorithm::robust::expansion::Expansion;
use crate::coord::Coord;

/// The intersection point of the infinite lines through `p1`-`p2` and `q1`-`q2`.
///
/// The homogeneous line coefficients are computed in exact arithmetic and only the final
/// division is rounded. Parallel or coincident lines, and results that do not fit an `f64`,
/// give `[+inf, +inf]`. Only the first two ordinates of each input are read and the result is
/// always XY.
pub fn intersection(p1: &[f64], p2: &[f64], q1: &[f64], q2: &[f64]) -> Coord {
    let (px, py, pw) = line_coefficients(p1, p2);
    let (qx, qy, qw) = line_coefficients(q1, q2);

    let x = &py * &qw - &(&qy * &pw);
    let y = &qx * &pw - &(&px * &qw);
    let w = &px * &qy - &(&qx * &py);

    let infinite = || Coord::new(vec![f64::INFINITY, f64::INFINITY]);
    if w.is_zero() {
        trace!("lines are parallel, no intersection");
        return infinite();
    }

    let w = w.estimate();
    let (x, y) = (x.estimate() / w, y.estimate() / w);
    if !x.is_finite() || !y.is_finite() {
        trace!("intersection ({x}, {y}) is not representable");
        return infinite();
    }
    Coord::new(vec![x, y])
}

fn line_coefficients(a: &[f64], b: &[f64]) -> (Expansion, Expansion, Expansion) {
    let x = Expansion::diff(a[1], b[1]);
    let y = Expansion::diff(b[0], a[0]);
    let w = Expansion::product(a[0], b[1]) - Expansion::product(b[0], a[1]);
    (x, y, w)
}
