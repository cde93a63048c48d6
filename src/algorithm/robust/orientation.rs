use log::trace;

use crate::algorithm::robust::expansion::Expansion;

/// Relative error bound of the floating-point orientation determinant.
const CCW_ERR_BOUND: f64 = (3. + 16. * EPSILON) * EPSILON;

/// Half the distance from 1 to the next `f64`, the unit roundoff.
const EPSILON: f64 = f64::EPSILON / 2.;

/// Which side of a directed line a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The point lies to the right of the line.
    Clockwise,
    /// The point lies on the line.
    Collinear,
    /// The point lies to the left of the line.
    CounterClockwise,
}

impl Orientation {
    fn from_sign(sign: f64) -> Self {
        if sign > 0. {
            Self::CounterClockwise
        } else if sign < 0. {
            Self::Clockwise
        } else {
            Self::Collinear
        }
    }

    /// The orientation as an index: `-1` for clockwise, `0` for collinear and `1` for
    /// counter-clockwise.
    pub fn index(&self) -> i8 {
        match self {
            Self::Clockwise => -1,
            Self::Collinear => 0,
            Self::CounterClockwise => 1,
        }
    }

    /// The orientation seen from the other side of the line.
    pub fn reverse(&self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::Collinear => Self::Collinear,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// The orientation of `point` relative to the directed line from `origin` to `end`.
///
/// Only the first two ordinates of each coordinate are read. The result is exact: a fast
/// floating-point determinant is used when its error bound proves the sign, and the exact
/// expansion determinant otherwise.
///
/// ```
/// use flatgeom::algorithm::robust::{orientation_index, Orientation};
///
/// assert_eq!(
///     orientation_index(&[10., 10.], &[20., 20.], &[10., 20.]),
///     Orientation::CounterClockwise
/// );
/// ```
pub fn orientation_index(origin: &[f64], end: &[f64], point: &[f64]) -> Orientation {
    let det_left = (end[0] - origin[0]) * (point[1] - origin[1]);
    let det_right = (end[1] - origin[1]) * (point[0] - origin[0]);
    let det = det_left - det_right;

    let det_sum = if det_left > 0. {
        if det_right <= 0. {
            return Orientation::from_sign(det);
        }
        det_left + det_right
    } else if det_left < 0. {
        if det_right >= 0. {
            return Orientation::from_sign(det);
        }
        -det_left - det_right
    } else {
        return Orientation::from_sign(det);
    };

    let err_bound = CCW_ERR_BOUND * det_sum;
    if det >= err_bound || -det >= err_bound {
        return Orientation::from_sign(det);
    }

    trace!("orientation determinant {det} within error bound {err_bound}, using exact arithmetic");
    orientation_index_exact(origin, end, point)
}

/// Like [`orientation_index`], always evaluating the determinant in exact arithmetic.
pub fn orientation_index_exact(origin: &[f64], end: &[f64], point: &[f64]) -> Orientation {
    let dx1 = Expansion::diff(end[0], origin[0]);
    let dy1 = Expansion::diff(end[1], origin[1]);
    let dx2 = Expansion::diff(point[0], origin[0]);
    let dy2 = Expansion::diff(point[1], origin[1]);
    let det = &dx1 * &dy2 - &(&dy1 * &dx2);
    Orientation::from_sign(det.signum() as f64)
}
