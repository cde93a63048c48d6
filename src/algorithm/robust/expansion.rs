//! Exact floating-point arithmetic on expansions.
//!
//! An expansion represents a real number as the exact, unevaluated sum of `f64` components. The
//! components are non-overlapping and sorted by increasing magnitude, so the sign of the value
//! is the sign of the last component. Sums, differences and products of expansions are exact as
//! long as no component overflows or underflows.

use std::ops::{Add, Mul, Neg, Sub};

/// `a + b` as a rounded sum and its exact roundoff error.
#[inline]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let b_virtual = x - a;
    let a_virtual = x - b_virtual;
    let b_roundoff = b - b_virtual;
    let a_roundoff = a - a_virtual;
    (x, a_roundoff + b_roundoff)
}

/// `a - b` as a rounded difference and its exact roundoff error.
#[inline]
pub(crate) fn two_diff(a: f64, b: f64) -> (f64, f64) {
    two_sum(a, -b)
}

/// `a * b` as a rounded product and its exact roundoff error.
#[inline]
pub(crate) fn two_product(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    (p, a.mul_add(b, -p))
}

/// An exact sum of non-overlapping `f64` components, smallest magnitude first.
///
/// Zero components are never stored, so zero is the empty expansion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion(Vec<f64>);

impl Expansion {
    /// The expansion of zero.
    pub fn zero() -> Self {
        Self(vec![])
    }

    /// The exact difference `a - b`.
    pub fn diff(a: f64, b: f64) -> Self {
        let (x, err) = two_diff(a, b);
        Self::from_parts(err, x)
    }

    /// The exact product `a * b`.
    pub fn product(a: f64, b: f64) -> Self {
        let (p, err) = two_product(a, b);
        Self::from_parts(err, p)
    }

    fn from_parts(small: f64, large: f64) -> Self {
        let mut components = Vec::with_capacity(2);
        if small != 0. {
            components.push(small);
        }
        if large != 0. {
            components.push(large);
        }
        Self(components)
    }

    /// Add `b` to the expansion in place, eliminating zero components.
    pub fn grow(&mut self, b: f64) {
        let mut q = b;
        let mut grown = Vec::with_capacity(self.0.len() + 1);
        for &e in &self.0 {
            let (sum, err) = two_sum(q, e);
            if err != 0. {
                grown.push(err);
            }
            q = sum;
        }
        if q != 0. {
            grown.push(q);
        }
        self.0 = grown;
    }

    /// Multiply every component by `b`, returning the exact product.
    pub fn scale(&self, b: f64) -> Self {
        let mut out = Self::zero();
        for &e in &self.0 {
            let (p, err) = two_product(e, b);
            out.grow(err);
            out.grow(p);
        }
        out
    }

    /// The components, smallest magnitude first.
    pub fn components(&self) -> &[f64] {
        &self.0
    }

    /// The sign of the exact value: `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        match self.0.last() {
            Some(v) if *v > 0. => 1,
            Some(v) if *v < 0. => -1,
            _ => 0,
        }
    }

    /// `true` if the exact value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// The nearest `f64` approximation of the value.
    pub fn estimate(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl From<f64> for Expansion {
    fn from(value: f64) -> Self {
        Self::from_parts(0., value)
    }
}

impl Neg for Expansion {
    type Output = Expansion;

    fn neg(mut self) -> Self::Output {
        self.0.iter_mut().for_each(|c| *c = -*c);
        self
    }
}

impl Add<&Expansion> for Expansion {
    type Output = Expansion;

    fn add(mut self, rhs: &Expansion) -> Self::Output {
        for &c in &rhs.0 {
            self.grow(c);
        }
        self
    }
}

impl Add for Expansion {
    type Output = Expansion;

    fn add(self, rhs: Expansion) -> Self::Output {
        self + &rhs
    }
}

impl Sub<&Expansion> for Expansion {
    type Output = Expansion;

    fn sub(mut self, rhs: &Expansion) -> Self::Output {
        for &c in &rhs.0 {
            self.grow(-c);
        }
        self
    }
}

impl Sub for Expansion {
    type Output = Expansion;

    fn sub(self, rhs: Expansion) -> Self::Output {
        self - &rhs
    }
}

impl Mul<&Expansion> for &Expansion {
    type Output = Expansion;

    fn mul(self, rhs: &Expansion) -> Self::Output {
        rhs.0
            .iter()
            .fold(Expansion::zero(), |acc, &c| acc + self.scale(c))
    }
}

impl Mul for Expansion {
    type Output = Expansion;

    fn mul(self, rhs: Expansion) -> Self::Output {
        &self * &rhs
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn two_sum_is_exact() {
        let (x, err) = two_sum(1., 1e-20);
        assert_eq!(x, 1.);
        assert_eq!(err, 1e-20);
    }

    #[test]
    fn two_product_is_exact() {
        let a = 1. + f64::EPSILON;
        let (p, err) = two_product(a, a);
        assert_eq!(p, 1. + 2. * f64::EPSILON);
        assert_eq!(err, f64::EPSILON * f64::EPSILON);
    }

    #[test]
    fn grow_drops_zeros() {
        let mut e = Expansion::from(1.);
        e.grow(-1.);
        assert!(e.is_zero());
        assert_eq!(e.signum(), 0);
        assert_eq!(e.estimate(), 0.);
    }

    #[test]
    fn sign_of_tiny_residual() {
        // 1 + 1e-30 - 1 is positive even though the rounded sum is zero.
        let e = Expansion::from(1.) + Expansion::from(1e-30) - Expansion::from(1.);
        assert_eq!(e.signum(), 1);
        assert_eq!(e.components(), &[1e-30]);

        let e = -e;
        assert_eq!(e.signum(), -1);
    }

    #[test]
    fn product_of_differences() {
        let a = Expansion::diff(1. + f64::EPSILON, 1.);
        let b = Expansion::diff(3., 1.);
        assert_eq!((a * b).estimate(), 2. * f64::EPSILON);
    }

    proptest! {
        #[test]
        fn components_are_sorted(a in -1e10f64..1e10, b in -1e10f64..1e10, c in -1e10f64..1e10) {
            let e = Expansion::product(a, b) - Expansion::product(b, c) + Expansion::from(c);
            let magnitudes: Vec<f64> = e.components().iter().map(|c| c.abs()).collect();
            prop_assert!(magnitudes.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn difference_with_self_is_zero(a in -1e10f64..1e10, b in -1e10f64..1e10) {
            let e = Expansion::product(a, b);
            prop_assert!((e.clone() - &e).is_zero());
        }
    }
}
