//! The doubled element: an ordered pair of base-algebra halves.

use std::marker::PhantomData;
use std::ops::{AddAssign, MulAssign, SubAssign};

use serde::{Deserialize, Serialize};

use crate::{
    Algebra, AlgebraError, AlgebraResult, BigFloat, Commutative, Doubling, Elliptic, Grassmann,
    Hodge, Hyperbolic, Parabolic, RoundingMode, Scalar,
};

/// Level-n element `(l, r)` with halves from level n−1.
///
/// The marker `K` selects σ and the product rule; it carries no data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(serialize = "B: Serialize", deserialize = "B: Deserialize<'de>"))]
pub struct Pair<B, K> {
    l: B,
    r: B,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<B, K> Pair<B, K> {
    pub fn from_pair(l: B, r: B) -> Self {
        Self {
            l,
            r,
            kind: PhantomData,
        }
    }

    pub fn l(&self) -> &B {
        &self.l
    }

    pub fn r(&self) -> &B {
        &self.r
    }

    pub fn into_parts(self) -> (B, B) {
        (self.l, self.r)
    }
}

impl<B: Algebra, K: Doubling> Pair<B, K> {
    /// Quadrance: a scalar at elliptic levels, a base element otherwise.
    pub fn quad(&self) -> K::Quad<B> {
        K::quad(self)
    }
}

impl<B: Algebra, K: Doubling> Algebra for Pair<B, K> {
    type Scalar = B::Scalar;

    const LEVEL: u32 = B::LEVEL + 1;
    const COMMUTATIVE: bool = if B::LEVEL == 0 {
        K::COMMUTATIVE_OVER_SCALARS
    } else {
        K::PRESERVES_COMMUTATIVITY && B::COMMUTATIVE
    };
    const ASSOCIATIVE: bool =
        B::ASSOCIATIVE && (B::COMMUTATIVE || !K::ASSOCIATIVE_NEEDS_COMMUTATIVE_BASE);

    fn zero() -> Self {
        Self::from_pair(B::zero(), B::zero())
    }

    fn one() -> Self {
        Self::from_pair(B::one(), B::zero())
    }

    fn zero_like(&self) -> Self {
        Self::from_pair(self.l.zero_like(), self.r.zero_like())
    }

    fn one_like(&self) -> Self {
        Self::from_pair(self.l.one_like(), self.r.zero_like())
    }

    fn add(&self, other: &Self) -> Self {
        Self::from_pair(self.l.add(&other.l), self.r.add(&other.r))
    }

    fn sub(&self, other: &Self) -> Self {
        Self::from_pair(self.l.sub(&other.l), self.r.sub(&other.r))
    }

    fn neg(&self) -> Self {
        Self::from_pair(self.l.neg(), self.r.neg())
    }

    fn mul(&self, other: &Self) -> Self {
        K::mul(self, other)
    }

    fn conj(&self) -> Self {
        K::conj(self)
    }

    fn star(&self, k: u32) -> Self {
        if k == 0 {
            self.conj()
        } else if k < Self::LEVEL {
            Self::from_pair(self.l.star(k - 1), self.r.star(k - 1))
        } else {
            self.clone()
        }
    }

    fn dilate(&self, a: &Self::Scalar) -> Self {
        Self::from_pair(self.l.dilate(a), self.r.dilate(a))
    }

    fn divide(&self, a: &Self::Scalar) -> AlgebraResult<Self> {
        Ok(Self::from_pair(self.l.divide(a)?, self.r.divide(a)?))
    }

    fn plus(&self, a: &Self::Scalar) -> Self {
        Self::from_pair(self.l.plus(a), self.r.clone())
    }

    fn minus(&self, a: &Self::Scalar) -> Self {
        Self::from_pair(self.l.minus(a), self.r.clone())
    }

    fn real(&self) -> &Self::Scalar {
        self.l.real()
    }

    fn map(&self, f: &mut dyn FnMut(&Self::Scalar) -> Self::Scalar) -> Self {
        Self::from_pair(self.l.map(f), self.r.map(f))
    }

    fn dot(&self, other: &Self) -> Self::Scalar {
        K::dot(self, other)
    }

    fn norm(&self) -> Self::Scalar {
        K::norm(self)
    }

    fn is_zero(&self) -> bool {
        self.l.is_zero() && self.r.is_zero()
    }

    fn inv(&self) -> AlgebraResult<Self> {
        K::inv(self).inspect_err(|e| {
            log::debug!("level {} inverse rejected: {}", Self::LEVEL, e);
        })
    }

    fn write_flat(&self, out: &mut Vec<Self::Scalar>) {
        self.l.write_flat(out);
        self.r.write_flat(out);
    }

    fn from_flat_unchecked(coords: &[Self::Scalar]) -> Self {
        let (l, r) = coords.split_at(coords.len() / 2);
        Self::from_pair(B::from_flat_unchecked(l), B::from_flat_unchecked(r))
    }
}

impl<B: Algebra, K: Doubling> AddAssign<&Pair<B, K>> for Pair<B, K> {
    fn add_assign(&mut self, rhs: &Pair<B, K>) {
        let sum = Algebra::add(&*self, rhs);
        *self = sum;
    }
}

impl<B: Algebra, K: Doubling> SubAssign<&Pair<B, K>> for Pair<B, K> {
    fn sub_assign(&mut self, rhs: &Pair<B, K>) {
        let difference = Algebra::sub(&*self, rhs);
        *self = difference;
    }
}

impl<B: Algebra, K: Doubling> MulAssign<&Pair<B, K>> for Pair<B, K> {
    fn mul_assign(&mut self, rhs: &Pair<B, K>) {
        let product = Algebra::mul(&*self, rhs);
        *self = product;
    }
}

// ============================================================================
// Named involutions that need a deep enough tower
// ============================================================================

impl<B: Algebra, K1: Doubling, K2: Doubling> Pair<Pair<B, K1>, K2> {
    /// `star(1)`: the base conjugation applied to both halves.
    pub fn bar(&self) -> Self {
        self.star(1)
    }
}

impl<B: Algebra, K1: Doubling, K2: Doubling, K3: Doubling> Pair<Pair<Pair<B, K1>, K2>, K3> {
    /// `star(2)`: the base's `bar` applied to both halves.
    pub fn tilde(&self) -> Self {
        self.star(2)
    }
}

impl<B: Algebra, K1: Doubling, K2: Doubling, K3: Doubling, K4: Doubling>
    Pair<Pair<Pair<Pair<B, K1>, K2>, K3>, K4>
{
    pub fn star3(&self) -> Self {
        self.star(3)
    }
}

// ============================================================================
// Commutative towers
// ============================================================================

impl<S: Scalar, const D: u64> Commutative for Pair<S, Elliptic<D>> {}
impl<S: Scalar> Commutative for Pair<S, Grassmann> {}
impl<B: Commutative> Commutative for Pair<B, Hyperbolic> {}
impl<B: Commutative> Commutative for Pair<B, Parabolic> {}

// ============================================================================
// Grassmann involutions
// ============================================================================

macro_rules! parabolic_hodge {
    ($kind:ty) => {
        impl<B: Hodge> Hodge for Pair<B, $kind> {
            fn dagger(&self) -> Self {
                Self::from_pair(self.l.conj(), self.r.conj().neg())
            }

            fn hodge(&self) -> Self {
                Self::from_pair(self.r.hodge().dagger(), self.l.hodge())
            }
        }
    };
}

parabolic_hodge!(Parabolic);
parabolic_hodge!(Grassmann);

// ============================================================================
// Backing-specific helpers
// ============================================================================

impl<S: Scalar, const D: u64> Pair<S, Elliptic<D>> {
    /// Unit multiples of `self` in ℤ[√−D]: `±z`, plus `±i·z` when D = 1.
    pub fn associates(&self) -> Vec<Self> {
        let mut out = vec![self.clone(), self.neg()];
        if D == 1 {
            let rotated = Self::from_pair(self.r.neg(), self.l.clone());
            out.push(rotated.neg());
            out.push(rotated);
        }
        out
    }
}

impl<B: Algebra<Scalar = f64>, K: Doubling> Pair<B, K> {
    /// Every coordinate NaN.
    pub fn nan() -> Self {
        Self::zero().map(&mut |_: &f64| f64::NAN)
    }

    /// Some coordinate is infinite.
    pub fn is_infinite(&self) -> bool {
        self.to_flat().iter().any(|c| c.is_infinite())
    }

    /// Some coordinate is NaN and none is infinite.
    pub fn is_nan(&self) -> bool {
        let coords = self.to_flat();
        coords.iter().any(|c| c.is_nan()) && !coords.iter().any(|c| c.is_infinite())
    }
}

impl<B: Algebra<Scalar = BigFloat>, K: Doubling> Pair<B, K> {
    /// Precision inherited from the leftmost coordinate.
    pub fn precision_bits(&self) -> usize {
        self.real().precision_bits()
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.real().rounding_mode()
    }

    /// Every coordinate rounded to `precision_bits` in its own mode.
    pub fn with_precision_bits(&self, precision_bits: usize) -> Self {
        self.map(&mut |c: &BigFloat| {
            let mut c = c.clone();
            c.set_precision(precision_bits);
            c
        })
    }
}

impl Pair<f64, Elliptic> {
    /// Complex division by Smith's algorithm, which scales by the larger
    /// denominator coordinate to avoid overflow in the quadrance.
    pub fn quo_robust(&self, y: &Self) -> AlgebraResult<Self> {
        if y.is_zero_divisor() {
            return Err(AlgebraError::ZeroDivisorDenominator);
        }
        let (a, b) = (self.l, self.r);
        let (c, d) = (y.l, y.r);
        if libm::fabs(c) >= libm::fabs(d) {
            let ratio = d / c;
            let den = c + d * ratio;
            Ok(Self::from_pair((a + b * ratio) / den, (b - a * ratio) / den))
        } else {
            let ratio = c / d;
            let den = c * ratio + d;
            Ok(Self::from_pair((a * ratio + b) / den, (b * ratio - a) / den))
        }
    }
}
