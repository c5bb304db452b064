//! Möbius transformations and cross-ratios, in left and right forms.
//!
//! The left forms pre-multiply by the inverted denominator, the right forms
//! post-multiply. Products are evaluated left to right, which matters at
//! non-associative levels.

use crate::{Algebra, AlgebraResult};

pub trait Mobius: Algebra {
    /// `(c·y + d)⁻¹ · (a·y + b)` with `y = self`.
    fn mobius_left(&self, a: &Self, b: &Self, c: &Self, d: &Self) -> AlgebraResult<Self> {
        let (numerator, denominator) = mobius_terms(self, a, b, c, d);
        numerator.quo_left(&denominator)
    }

    /// `(a·y + b) · (c·y + d)⁻¹` with `y = self`.
    fn mobius_right(&self, a: &Self, b: &Self, c: &Self, d: &Self) -> AlgebraResult<Self> {
        let (numerator, denominator) = mobius_terms(self, a, b, c, d);
        numerator.quo_right(&denominator)
    }

    /// `(w − x)⁻¹ · (v − x) · (v − y)⁻¹ · (w − y)` with `v = self`.
    fn cross_ratio_left(&self, w: &Self, x: &Self, y: &Self) -> AlgebraResult<Self> {
        let first = self.sub(x).quo_left(&w.sub(x))?;
        let second = w.sub(y).quo_left(&self.sub(y))?;
        Ok(first.mul(&second))
    }

    /// `(v − x) · (w − x)⁻¹ · (w − y) · (v − y)⁻¹` with `v = self`.
    fn cross_ratio_right(&self, w: &Self, x: &Self, y: &Self) -> AlgebraResult<Self> {
        let first = self.sub(x).quo_right(&w.sub(x))?;
        let second = w.sub(y).quo_right(&self.sub(y))?;
        Ok(first.mul(&second))
    }
}

impl<A: Algebra> Mobius for A {}

fn mobius_terms<A: Algebra>(y: &A, a: &A, b: &A, c: &A, d: &A) -> (A, A) {
    (a.mul(y).add(b), c.mul(y).add(d))
}
