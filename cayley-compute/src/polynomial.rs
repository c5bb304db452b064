//! Sparse polynomials with scalar coefficients, evaluated at algebra elements.

use std::collections::HashMap;

use cayley_core::{Algebra, Scalar};
use serde::{Deserialize, Serialize};

/// Sparse mapping from degree to coefficient.
///
/// A coefficient that was inserted is present even when it is zero; only
/// absent degrees are skipped during evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de>"))]
pub struct Polynomial<S> {
    coefficients: HashMap<u32, S>,
    degree: u32,
}

impl<S> Default for Polynomial<S> {
    fn default() -> Self {
        Self {
            coefficients: HashMap::new(),
            degree: 0,
        }
    }
}

impl<S: Scalar> Polynomial<S> {
    /// The zero polynomial.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coefficient of `x^degree`, returning the previous one.
    pub fn insert(&mut self, degree: u32, coefficient: S) -> Option<S> {
        self.degree = self.degree.max(degree);
        self.coefficients.insert(degree, coefficient)
    }

    pub fn remove(&mut self, degree: u32) -> Option<S> {
        let removed = self.coefficients.remove(&degree);
        if removed.is_some() && degree == self.degree {
            self.degree = self.coefficients.keys().copied().max().unwrap_or(0);
        }
        removed
    }

    pub fn coeff(&self, degree: u32) -> Option<&S> {
        self.coefficients.get(&degree)
    }

    /// Largest present degree; 0 for the zero polynomial.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Number of present coefficients.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Evaluate at `y` in Horner form.
    ///
    /// Coefficients enter through the real coordinate, so every
    /// intermediate is a polynomial in `y` alone and the result does not
    /// depend on how products are associated.
    pub fn horner<A: Algebra<Scalar = S>>(&self, y: &A) -> A {
        if self.is_empty() {
            return y.zero_like();
        }

        let n = self.degree;
        if n == 0 {
            return match self.coeff(0) {
                Some(c) => y.one_like().dilate(c),
                None => y.zero_like(),
            };
        }

        log::trace!("horner: degree {}, {} terms", n, self.len());

        let mut z = match self.coeff(n) {
            Some(top) => y.dilate(top),
            None => y.zero_like(),
        };
        for k in (1..n).rev() {
            if let Some(c) = self.coeff(k) {
                z = z.plus(c);
            }
            z = z.mul(y);
        }
        if let Some(c0) = self.coeff(0) {
            z = z.plus(c0);
        }
        z
    }
}

impl<S: Scalar> FromIterator<(u32, S)> for Polynomial<S> {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (degree, coefficient) in iter {
            out.insert(degree, coefficient);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_tracks_insertions_and_removals() {
        let mut p = Polynomial::<i64>::new();
        assert_eq!(p.degree(), 0);
        p.insert(3, 2);
        p.insert(1, 5);
        assert_eq!(p.degree(), 3);
        assert_eq!(p.len(), 2);
        assert_eq!(p.remove(3), Some(2));
        assert_eq!(p.degree(), 1);
        assert_eq!(p.remove(1), Some(5));
        assert_eq!(p.degree(), 0);
        assert!(p.is_empty());
    }

    #[test]
    fn zero_coefficient_is_present() {
        let p: Polynomial<i64> = [(2, 0)].into_iter().collect();
        assert_eq!(p.coeff(2), Some(&0));
        assert_eq!(p.coeff(1), None);
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn scalar_evaluation() {
        // 2x^3 - x + 4 at 3 = 54 - 3 + 4
        let p: Polynomial<i64> = [(3, 2), (1, -1), (0, 4)].into_iter().collect();
        assert_eq!(p.horner(&3i64), 55);
    }
}
