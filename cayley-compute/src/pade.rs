//! Rational functions `P(y) / Q(y)` in Padé form.

use cayley_core::{Algebra, AlgebraResult, Scalar};
use serde::{Deserialize, Serialize};

use crate::Polynomial;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct Pade<S> {
    pub numerator: Polynomial<S>,
    pub denominator: Polynomial<S>,
}

impl<S: Scalar> Pade<S> {
    pub fn new(numerator: Polynomial<S>, denominator: Polynomial<S>) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// `P(y) · Q(y)⁻¹`. Both sides are polynomials in `y` with scalar
    /// coefficients, so they commute and the side of the inverse is
    /// immaterial.
    ///
    /// Fails with `ZeroDivisorDenominator` when `Q(y)` is a zero divisor.
    pub fn eval<A: Algebra<Scalar = S>>(&self, y: &A) -> AlgebraResult<A> {
        let p = self.numerator.horner(y);
        let q = self.denominator.horner(y);
        p.quo_right(&q).inspect_err(|e| {
            log::debug!("pade: denominator rejected at level {}: {}", A::LEVEL, e);
        })
    }
}
