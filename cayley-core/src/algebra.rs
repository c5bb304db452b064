//! The contract shared by every level of a doubling tower.
//!
//! Scalars are level-0 algebras with a trivial conjugation; `Pair<B, K>`
//! lifts any algebra `B` one level. Every operation on a level-n element
//! reduces to operations on its two level-(n-1) halves through this trait
//! alone.

use std::fmt::Debug;

use crate::{AlgebraError, AlgebraResult, Scalar};

pub trait Algebra: Clone + Debug + PartialEq + Sized {
    /// Coordinate type at the leaves of the component tree.
    type Scalar: Scalar;

    /// Doubling depth. Scalars are level 0.
    const LEVEL: u32;
    /// Number of real coordinates, `2^LEVEL`.
    const DIM: usize = 1 << Self::LEVEL;
    const COMMUTATIVE: bool;
    const ASSOCIATIVE: bool;

    fn zero() -> Self;
    fn one() -> Self;

    /// Additive identity carrying the receiver's scalar context (precision, rounding).
    fn zero_like(&self) -> Self;

    /// Multiplicative identity carrying the receiver's scalar context.
    fn one_like(&self) -> Self;

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn neg(&self) -> Self;
    fn mul(&self, other: &Self) -> Self;

    /// The conjugation introduced at this level.
    fn conj(&self) -> Self;

    /// The k-th named involution: `star(0)` is `conj`, `star(k)` applies the
    /// base's `star(k - 1)` to both halves. Identity when `k >= LEVEL`.
    fn star(&self, k: u32) -> Self;

    /// Multiply every coordinate by a scalar.
    fn dilate(&self, a: &Self::Scalar) -> Self;

    /// Divide every coordinate by a scalar.
    fn divide(&self, a: &Self::Scalar) -> AlgebraResult<Self>;

    /// Add a scalar to the real coordinate.
    fn plus(&self, a: &Self::Scalar) -> Self;

    /// Subtract a scalar from the real coordinate.
    fn minus(&self, a: &Self::Scalar) -> Self;

    /// The real (first) coordinate.
    fn real(&self) -> &Self::Scalar;

    /// Apply `f` to every coordinate.
    fn map(&self, f: &mut dyn FnMut(&Self::Scalar) -> Self::Scalar) -> Self;

    fn dot(&self, other: &Self) -> Self::Scalar;

    /// Quadrance reduced all the way down to a scalar.
    fn norm(&self) -> Self::Scalar;

    fn is_zero(&self) -> bool;

    fn is_zero_divisor(&self) -> bool {
        self.norm().is_zero_divisor()
    }

    fn inv(&self) -> AlgebraResult<Self>;

    /// Append coordinates in depth-first, left-first order.
    fn write_flat(&self, out: &mut Vec<Self::Scalar>);

    /// Build from exactly `DIM` coordinates. Callers check the length.
    #[doc(hidden)]
    fn from_flat_unchecked(coords: &[Self::Scalar]) -> Self;

    fn from_flat(coords: &[Self::Scalar]) -> AlgebraResult<Self> {
        if coords.len() != Self::DIM {
            return Err(AlgebraError::DimensionMismatch {
                expected: Self::DIM,
                actual: coords.len(),
            });
        }
        Ok(Self::from_flat_unchecked(coords))
    }

    fn to_flat(&self) -> Vec<Self::Scalar> {
        let mut out = Vec::with_capacity(Self::DIM);
        self.write_flat(&mut out);
        out
    }

    /// Composition of `star(k)` for every set bit `k` of `mask`.
    fn involution(&self, mask: u32) -> Self {
        let mut out = self.clone();
        for k in 0..Self::LEVEL {
            if mask & (1 << k) != 0 {
                out = out.star(k);
            }
        }
        out
    }

    fn square(&self) -> Self {
        self.mul(self)
    }

    /// Left-to-right power; `pow(0)` is the identity.
    fn pow(&self, n: u32) -> Self {
        let mut out = self.one_like();
        for _ in 0..n {
            out = out.mul(self);
        }
        out
    }

    /// True when some power `z^k` with `1 <= k <= max_power` vanishes.
    fn is_nilpotent(&self, max_power: u32) -> bool {
        let mut power = self.clone();
        for _ in 0..max_power {
            if power.is_zero() {
                return true;
            }
            power = power.mul(self);
        }
        false
    }

    /// `x·y − y·x`
    fn commutator(&self, other: &Self) -> Self {
        self.mul(other).sub(&other.mul(self))
    }

    /// `(w·x)·y − w·(x·y)`
    fn associator(&self, x: &Self, y: &Self) -> Self {
        self.mul(x).mul(y).sub(&self.mul(&x.mul(y)))
    }

    /// Inverse of a value used as a denominator.
    fn denominator_inv(&self) -> AlgebraResult<Self> {
        self.inv().map_err(|_| AlgebraError::ZeroDivisorDenominator)
    }

    /// `y⁻¹ · self`
    fn quo_left(&self, y: &Self) -> AlgebraResult<Self> {
        Ok(y.denominator_inv()?.mul(self))
    }

    /// `self · y⁻¹`
    fn quo_right(&self, y: &Self) -> AlgebraResult<Self> {
        Ok(self.mul(&y.denominator_inv()?))
    }
}

/// Marker for algebras whose multiplication commutes. Left and right
/// quotients coincide, so a single `quo` is exposed.
pub trait Commutative: Algebra {
    fn quo(&self, y: &Self) -> AlgebraResult<Self> {
        self.quo_right(y)
    }

    /// `(a·y + b) / (c·y + d)` with `y = self`.
    fn mobius(&self, a: &Self, b: &Self, c: &Self, d: &Self) -> AlgebraResult<Self> {
        crate::Mobius::mobius_right(self, a, b, c, d)
    }

    /// `(v − x)(w − y) / ((w − x)(v − y))` with `v = self`.
    fn cross_ratio(&self, w: &Self, x: &Self, y: &Self) -> AlgebraResult<Self> {
        crate::Mobius::cross_ratio_left(self, w, x, y)
    }
}

/// `dagger` and `hodge`, defined on scalars and on σ = 0 levels.
pub trait Hodge: Algebra {
    /// `(l, r) ↦ (l*, −r*)`
    fn dagger(&self) -> Self;

    /// `(l, r) ↦ (dagger(hodge(r)), hodge(l))`. Above level 1 this is not an
    /// involution: twice leaves a sign pattern, four times is the identity.
    fn hodge(&self) -> Self;
}

/// Items shared by every scalar's level-0 `Algebra` impl.
macro_rules! level_zero_algebra {
    () => {
        const LEVEL: u32 = 0;
        const COMMUTATIVE: bool = true;
        const ASSOCIATIVE: bool = true;

        fn conj(&self) -> Self {
            self.clone()
        }

        fn star(&self, _k: u32) -> Self {
            self.clone()
        }

        fn dilate(&self, a: &Self) -> Self {
            $crate::Algebra::mul(self, a)
        }

        fn divide(&self, a: &Self) -> $crate::AlgebraResult<Self> {
            $crate::Scalar::div(self, a)
        }

        fn plus(&self, a: &Self) -> Self {
            $crate::Algebra::add(self, a)
        }

        fn minus(&self, a: &Self) -> Self {
            $crate::Algebra::sub(self, a)
        }

        fn real(&self) -> &Self {
            self
        }

        fn map(&self, f: &mut dyn FnMut(&Self) -> Self) -> Self {
            f(self)
        }

        fn dot(&self, other: &Self) -> Self {
            $crate::Algebra::mul(self, other)
        }

        fn norm(&self) -> Self {
            self.clone()
        }

        fn inv(&self) -> $crate::AlgebraResult<Self> {
            if $crate::Algebra::is_zero_divisor(self) {
                return Err($crate::AlgebraError::DivisionByZero);
            }
            $crate::Scalar::div(&$crate::Algebra::one_like(self), self)
        }

        fn quo_left(&self, y: &Self) -> $crate::AlgebraResult<Self> {
            $crate::Algebra::quo_right(self, y)
        }

        // Direct division keeps integer quotients meaningful.
        fn quo_right(&self, y: &Self) -> $crate::AlgebraResult<Self> {
            if $crate::Algebra::is_zero_divisor(y) {
                return Err($crate::AlgebraError::ZeroDivisorDenominator);
            }
            $crate::Scalar::div(self, y)
        }

        fn write_flat(&self, out: &mut Vec<Self>) {
            out.push(self.clone());
        }

        fn from_flat_unchecked(coords: &[Self]) -> Self {
            coords[0].clone()
        }
    };
}

pub(crate) use level_zero_algebra;
