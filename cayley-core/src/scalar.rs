//! Scalar backings: bounded machine integers and floats, unbounded integers
//! and rationals. `BigFloat` lives in its own module.
//!
//! Every scalar is also a level-0 [`Algebra`] whose conjugation is the
//! identity, which lets the doubling engine bottom out without a special
//! case.

use std::cmp::Ordering;

use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

use crate::algebra::level_zero_algebra;
use crate::{Algebra, AlgebraError, AlgebraResult, BigFloat, Commutative, Hodge};

/// Sign of a scalar. NaN reports `Zero`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

/// A single numeric backing for algebra coordinates.
pub trait Scalar: Algebra<Scalar = Self> {
    fn from_i64(value: i64) -> Self;

    /// Scalar division. Integer backings truncate toward zero.
    fn div(&self, other: &Self) -> AlgebraResult<Self>;

    fn sgn(&self) -> Sign;
}

// ============================================================================
// i64: wrapping arithmetic
// ============================================================================

impl Algebra for i64 {
    type Scalar = i64;

    level_zero_algebra!();

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn zero_like(&self) -> Self {
        0
    }

    fn one_like(&self) -> Self {
        1
    }

    fn add(&self, other: &Self) -> Self {
        self.wrapping_add(*other)
    }

    fn sub(&self, other: &Self) -> Self {
        self.wrapping_sub(*other)
    }

    fn neg(&self) -> Self {
        self.wrapping_neg()
    }

    fn mul(&self, other: &Self) -> Self {
        self.wrapping_mul(*other)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_zero_divisor(&self) -> bool {
        *self == 0
    }
}

impl Scalar for i64 {
    fn from_i64(value: i64) -> Self {
        value
    }

    fn div(&self, other: &Self) -> AlgebraResult<Self> {
        if *other == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self.wrapping_div(*other))
    }

    fn sgn(&self) -> Sign {
        Sign::from_ordering(self.cmp(&0))
    }
}

// ============================================================================
// f64: IEEE-754, division never fails
// ============================================================================

impl Algebra for f64 {
    type Scalar = f64;

    level_zero_algebra!();

    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn zero_like(&self) -> Self {
        0.0
    }

    fn one_like(&self) -> Self {
        1.0
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn is_zero_divisor(&self) -> bool {
        *self == 0.0
    }
}

impl Scalar for f64 {
    fn from_i64(value: i64) -> Self {
        value as f64
    }

    fn div(&self, other: &Self) -> AlgebraResult<Self> {
        Ok(self / other)
    }

    fn sgn(&self) -> Sign {
        if *self > 0.0 {
            Sign::Positive
        } else if *self < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

// ============================================================================
// IBig: unbounded integers
// ============================================================================

impl Algebra for IBig {
    type Scalar = IBig;

    level_zero_algebra!();

    fn zero() -> Self {
        IBig::ZERO
    }

    fn one() -> Self {
        IBig::ONE
    }

    fn zero_like(&self) -> Self {
        IBig::ZERO
    }

    fn one_like(&self) -> Self {
        IBig::ONE
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn is_zero(&self) -> bool {
        *self == IBig::ZERO
    }

    fn is_zero_divisor(&self) -> bool {
        *self == IBig::ZERO
    }
}

impl Scalar for IBig {
    fn from_i64(value: i64) -> Self {
        IBig::from(value)
    }

    fn div(&self, other: &Self) -> AlgebraResult<Self> {
        if *other == IBig::ZERO {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self / other)
    }

    fn sgn(&self) -> Sign {
        Sign::from_ordering(self.cmp(&IBig::ZERO))
    }
}

// ============================================================================
// RBig: unbounded rationals, always normalized
// ============================================================================

impl Algebra for RBig {
    type Scalar = RBig;

    level_zero_algebra!();

    fn zero() -> Self {
        RBig::ZERO
    }

    fn one() -> Self {
        RBig::ONE
    }

    fn zero_like(&self) -> Self {
        RBig::ZERO
    }

    fn one_like(&self) -> Self {
        RBig::ONE
    }

    fn add(&self, other: &Self) -> Self {
        self + other
    }

    fn sub(&self, other: &Self) -> Self {
        self - other
    }

    fn neg(&self) -> Self {
        -self
    }

    fn mul(&self, other: &Self) -> Self {
        self * other
    }

    fn is_zero(&self) -> bool {
        *self == RBig::ZERO
    }

    fn is_zero_divisor(&self) -> bool {
        *self == RBig::ZERO
    }
}

impl Scalar for RBig {
    fn from_i64(value: i64) -> Self {
        RBig::from_parts(IBig::from(value), UBig::ONE)
    }

    fn div(&self, other: &Self) -> AlgebraResult<Self> {
        if *other == RBig::ZERO {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self / other)
    }

    fn sgn(&self) -> Sign {
        Sign::from_ordering(self.cmp(&RBig::ZERO))
    }
}

// Scalars commute and carry no Grassmann structure of their own.
macro_rules! trivial_scalar_structure {
    ($($t:ty),*) => {
        $(
            impl Commutative for $t {}

            impl Hodge for $t {
                fn dagger(&self) -> Self {
                    self.clone()
                }

                fn hodge(&self) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

trivial_scalar_structure!(i64, f64, IBig, RBig, BigFloat);

/// Build a rational `numerator / denominator`.
///
/// # Panics
/// Panics when `denominator` is zero.
pub fn rational(numerator: i64, denominator: i64) -> RBig {
    assert!(denominator != 0, "rational with zero denominator");
    let n = RBig::from_parts(IBig::from(numerator), UBig::ONE);
    let d = RBig::from_parts(IBig::from(denominator), UBig::ONE);
    n / d
}
