use dashu::integer::IBig;
use dashu_base::{Abs, Approximation};
use dashu_float::round::{mode, Round};
use dashu_float::{DBig, FBig};
use serde::{Deserialize, Serialize};

use crate::algebra::level_zero_algebra;
use crate::{Algebra, AlgebraError, AlgebraResult, Scalar, Sign};

/// Direction used when a result has more bits than its precision allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingMode {
    TowardZero,
    #[default]
    NearestEven,
    TowardPositive,
    TowardNegative,
    AwayFromZero,
}

/// Arbitrary precision binary float with per-value precision and rounding.
///
/// Binary operations run at the larger precision of the two operands and
/// round once, in the rounding mode of the left operand. `is_exact` stays
/// false once any input or intermediate rounding discarded bits.
#[derive(Clone, Debug)]
pub struct BigFloat {
    value: FBig,
    precision_bits: usize,
    rounding: RoundingMode,
    inexact: bool,
}

#[derive(Clone, Copy)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BigFloat {
    /// Precision used by the context-free identities `zero()` and `one()`.
    pub const DEFAULT_PRECISION_BITS: usize = 64;

    /// Create BigFloat from f64 with explicit precision
    ///
    /// NO DEFAULT - precision must always be specified. Fails on NaN and
    /// infinities, which have no arbitrary precision counterpart.
    pub fn with_precision(val: f64, precision_bits: usize) -> AlgebraResult<Self> {
        if !val.is_finite() {
            return Err(AlgebraError::InvalidScalar(format!("non-finite value {}", val)));
        }
        let fbig = FBig::try_from(val)
            .map_err(|_| AlgebraError::InvalidScalar(format!("non-finite value {}", val)))?;
        Ok(Self::from_fbig(fbig, precision_bits, RoundingMode::default()))
    }

    /// Create zero with explicit precision
    pub fn zero(precision_bits: usize) -> Self {
        Self::from_fbig(FBig::<mode::Zero>::ZERO, precision_bits, RoundingMode::default())
    }

    /// Create one with explicit precision
    pub fn one(precision_bits: usize) -> Self {
        Self::from_fbig(FBig::<mode::Zero>::ONE, precision_bits, RoundingMode::default())
    }

    /// Exact integer value with explicit precision.
    pub fn from_i64_with_precision(val: i64, precision_bits: usize) -> Self {
        Self::from_fbig(
            FBig::from_parts(IBig::from(val), 0),
            precision_bits,
            RoundingMode::default(),
        )
    }

    /// Create BigFloat from string with explicit precision
    ///
    /// Allows creating values beyond f64 range (e.g., "1e1000").
    /// Uses atomic base conversion with target precision to avoid precision loss.
    pub fn from_string(val: &str, precision_bits: usize) -> AlgebraResult<Self> {
        let precision_bits = precision_bits.max(1);
        let dbig = val
            .parse::<DBig>()
            .map_err(|e| AlgebraError::InvalidScalar(format!("failed to parse {:?}: {}", val, e)))?;
        let (fbig, inexact) = match dbig.with_base_and_precision::<2>(precision_bits) {
            Approximation::Exact(v) => (v, false),
            Approximation::Inexact(v, _) => (v, true),
        };
        Ok(Self {
            value: fbig.with_rounding::<mode::Zero>(),
            precision_bits,
            rounding: RoundingMode::default(),
            inexact,
        })
    }

    fn from_fbig(value: FBig, precision_bits: usize, rounding: RoundingMode) -> Self {
        let precision_bits = precision_bits.max(1);
        let (value, inexact) = round(parts(&value), precision_bits, rounding);
        Self {
            value,
            precision_bits,
            rounding,
            inexact,
        }
    }

    /// Get precision in bits
    pub fn precision_bits(&self) -> usize {
        self.precision_bits
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding
    }

    /// False once any rounding along the way discarded bits.
    pub fn is_exact(&self) -> bool {
        !self.inexact
    }

    /// Same value, different rounding mode for future operations.
    pub fn with_rounding_mode(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Change precision, rounding the current value with its own mode.
    pub fn set_precision(&mut self, precision_bits: usize) {
        let precision_bits = precision_bits.max(1);
        let (value, inexact) = round(parts(&self.value), precision_bits, self.rounding);
        self.value = value;
        self.precision_bits = precision_bits;
        self.inexact |= inexact;
    }

    /// Convert to f64 (for display and comparisons in tests only)
    /// May lose precision for values requiring > 53 bits
    pub fn to_f64(&self) -> f64 {
        self.value.clone().with_rounding::<mode::HalfEven>().to_f64().value()
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.clone().abs(),
            ..self.clone()
        }
    }

    fn context_with(&self, other: &Self) -> (usize, RoundingMode, bool) {
        (
            self.precision_bits.max(other.precision_bits),
            self.rounding,
            self.inexact || other.inexact,
        )
    }

    fn binary(&self, other: &Self, op: BinaryOp) -> Self {
        let (precision_bits, rounding, inherited) = self.context_with(other);
        let a = parts(&self.value);
        let b = parts(&other.value);
        let full = match op {
            BinaryOp::Add => exact_sum(a, b),
            BinaryOp::Sub => exact_sum(a, (-b.0, b.1)),
            BinaryOp::Mul => (a.0 * b.0, a.1 + b.1),
        };
        let (value, inexact) = round(full, precision_bits, rounding);
        Self {
            value,
            precision_bits,
            rounding,
            inexact: inherited || inexact,
        }
    }

    fn quotient(&self, other: &Self) -> Self {
        let (precision_bits, rounding, inherited) = self.context_with(other);
        let value = match rounding {
            RoundingMode::TowardZero => {
                divide_rounded::<mode::Zero>(&self.value, &other.value, precision_bits)
            }
            RoundingMode::NearestEven => {
                divide_rounded::<mode::HalfEven>(&self.value, &other.value, precision_bits)
            }
            RoundingMode::TowardPositive => {
                divide_rounded::<mode::Up>(&self.value, &other.value, precision_bits)
            }
            RoundingMode::TowardNegative => {
                divide_rounded::<mode::Down>(&self.value, &other.value, precision_bits)
            }
            RoundingMode::AwayFromZero => {
                divide_rounded::<mode::Away>(&self.value, &other.value, precision_bits)
            }
        };
        // q·b == a exactly iff the quotient lost nothing.
        let (q, b) = (parts(&value), parts(&other.value));
        let (a_sig, a_exp) = parts(&self.value);
        let residue = exact_sum((q.0 * b.0, q.1 + b.1), (-a_sig, a_exp));
        Self {
            value,
            precision_bits,
            rounding,
            inexact: inherited || residue.0 != IBig::ZERO,
        }
    }
}

/// Exact value as `(significand, exponent)`, meaning significand × 2^exponent.
type Parts = (IBig, isize);

fn parts(value: &FBig) -> Parts {
    let repr = value.repr();
    (repr.significand().clone(), repr.exponent())
}

/// Exact sum, aligned on the smaller exponent.
fn exact_sum(a: Parts, b: Parts) -> Parts {
    if a.0 == IBig::ZERO {
        return b;
    }
    if b.0 == IBig::ZERO {
        return a;
    }
    let exponent = a.1.min(b.1);
    let a_sig = a.0 << (a.1 - exponent) as usize;
    let b_sig = b.0 << (b.1 - exponent) as usize;
    (a_sig + b_sig, exponent)
}

/// Build the value at the precision of its own significand, then round once.
fn round_as<R: Round>((significand, exponent): Parts, precision_bits: usize) -> (FBig, bool) {
    match FBig::<R>::from_parts(significand, exponent).with_precision(precision_bits) {
        Approximation::Exact(v) => (v.with_rounding::<mode::Zero>(), false),
        Approximation::Inexact(v, _) => (v.with_rounding::<mode::Zero>(), true),
    }
}

fn round(value: Parts, precision_bits: usize, rounding: RoundingMode) -> (FBig, bool) {
    match rounding {
        RoundingMode::TowardZero => round_as::<mode::Zero>(value, precision_bits),
        RoundingMode::NearestEven => round_as::<mode::HalfEven>(value, precision_bits),
        RoundingMode::TowardPositive => round_as::<mode::Up>(value, precision_bits),
        RoundingMode::TowardNegative => round_as::<mode::Down>(value, precision_bits),
        RoundingMode::AwayFromZero => round_as::<mode::Away>(value, precision_bits),
    }
}

fn divide_rounded<R: Round>(a: &FBig, b: &FBig, precision_bits: usize) -> FBig {
    // Both operands are rebuilt at a finite precision; raising it is exact,
    // so the quotient is the only rounding step.
    let (a_sig, a_exp) = parts(a);
    let (b_sig, b_exp) = parts(b);
    let num = FBig::<R>::from_parts(a_sig, a_exp).with_precision(precision_bits).value();
    let den = FBig::<R>::from_parts(b_sig, b_exp).with_precision(precision_bits).value();
    (num / den).with_rounding::<mode::Zero>()
}

impl Algebra for BigFloat {
    type Scalar = BigFloat;

    level_zero_algebra!();

    fn zero() -> Self {
        BigFloat::zero(Self::DEFAULT_PRECISION_BITS)
    }

    fn one() -> Self {
        BigFloat::one(Self::DEFAULT_PRECISION_BITS)
    }

    fn zero_like(&self) -> Self {
        Self::from_fbig(FBig::<mode::Zero>::ZERO, self.precision_bits, self.rounding)
    }

    fn one_like(&self) -> Self {
        Self::from_fbig(FBig::<mode::Zero>::ONE, self.precision_bits, self.rounding)
    }

    fn add(&self, other: &Self) -> Self {
        self.binary(other, BinaryOp::Add)
    }

    fn sub(&self, other: &Self) -> Self {
        self.binary(other, BinaryOp::Sub)
    }

    fn neg(&self) -> Self {
        Self {
            value: -self.value.clone(),
            ..self.clone()
        }
    }

    fn mul(&self, other: &Self) -> Self {
        self.binary(other, BinaryOp::Mul)
    }

    fn is_zero(&self) -> bool {
        self.value == FBig::<mode::Zero>::ZERO
    }

    fn is_zero_divisor(&self) -> bool {
        self.value == FBig::<mode::Zero>::ZERO
    }
}

impl Scalar for BigFloat {
    fn from_i64(value: i64) -> Self {
        Self::from_i64_with_precision(value, Self::DEFAULT_PRECISION_BITS)
    }

    fn div(&self, other: &Self) -> AlgebraResult<Self> {
        if other.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(self.quotient(other))
    }

    fn sgn(&self) -> Sign {
        match self.value.partial_cmp(&FBig::<mode::Zero>::ZERO) {
            Some(ordering) => Sign::from_ordering(ordering),
            None => Sign::Zero,
        }
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl std::fmt::Display for BigFloat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value.to_decimal().value())
    }
}

/// Exact wire form: value = significand × 2^exponent.
#[derive(Serialize, Deserialize)]
struct BigFloatSerde {
    significand: String,
    exponent: isize,
    precision_bits: usize,
    rounding: RoundingMode,
    inexact: bool,
}

impl Serialize for BigFloat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = self.value.repr();
        let wire = BigFloatSerde {
            significand: repr.significand().to_string(),
            exponent: repr.exponent(),
            precision_bits: self.precision_bits,
            rounding: self.rounding,
            inexact: self.inexact,
        };

        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BigFloat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = BigFloatSerde::deserialize(deserializer)?;

        let significand = wire.significand.parse::<IBig>().map_err(|e| {
            serde::de::Error::custom(format!("Failed to parse significand: {}", e))
        })?;
        let mut out = Self::from_fbig(
            FBig::from_parts(significand, wire.exponent),
            wire.precision_bits,
            wire.rounding,
        );
        out.inexact |= wire.inexact;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_returns_positive_for_negative_value() {
        let neg = BigFloat::with_precision(-5.0, 64).unwrap();
        let result = neg.abs();
        assert_eq!(result.to_f64(), 5.0);
    }

    #[test]
    fn abs_preserves_precision() {
        let neg = BigFloat::with_precision(-5.0, 256).unwrap();
        let result = neg.abs();
        assert_eq!(result.precision_bits(), 256);
    }

    #[test]
    fn abs_works_with_arbitrary_precision() {
        let neg = BigFloat::from_string("-1e-500", 7000).unwrap();
        let pos = BigFloat::from_string("1e-500", 7000).unwrap();
        assert_eq!(neg.abs(), pos);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        assert!(BigFloat::with_precision(f64::NAN, 64).is_err());
        assert!(BigFloat::with_precision(f64::INFINITY, 64).is_err());
    }

    #[test]
    fn to_f64_rounds_to_nearest() {
        let third = BigFloat::one(128)
            .div(&BigFloat::with_precision(3.0, 128).unwrap())
            .unwrap();
        assert_eq!(third.to_f64(), 1.0 / 3.0);
    }

    #[test]
    fn sum_is_rounded_to_precision() {
        let one = BigFloat::with_precision(1.0, 4).unwrap();
        let small = BigFloat::with_precision(0.0625, 4).unwrap();
        let sum = one.add(&small);
        assert_eq!(sum.to_f64(), 1.0);
        assert!(!sum.is_exact());
    }

    #[test]
    fn zero_like_keeps_context() {
        let x = BigFloat::with_precision(3.0, 300)
            .unwrap()
            .with_rounding_mode(RoundingMode::TowardNegative);
        let z = x.zero_like();
        assert_eq!(z.precision_bits(), 300);
        assert_eq!(z.rounding_mode(), RoundingMode::TowardNegative);
        assert!(z.is_zero());
    }
}
