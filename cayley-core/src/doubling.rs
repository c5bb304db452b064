//! Structural-sign markers for the doubling construction.
//!
//! A level is `Pair<B, K>`: two halves from the base algebra `B`, combined
//! by the rules of the marker `K`. The marker fixes σ and with it the
//! multiplication, the level conjugation, the quadrance and the inverse.
//!
//! | Marker | σ | product (l, r)(l', r') |
//! |---|---|---|
//! | `Elliptic<D>` | −D | (l·l' − D·r'*·r, r'·l + r·l'*) |
//! | `Hyperbolic` | +1 | (l·l' + r·r', l·r' + r·l') |
//! | `Parabolic` | 0 | (l·l', l·r' + r·l') |
//! | `Grassmann` | 0 | (l·l', l·r' + r·l'*) |

use std::fmt::Debug;

use crate::{Algebra, AlgebraError, AlgebraResult, Pair, Scalar};

/// Discriminants of the nine imaginary quadratic fields of class number one.
pub const HEEGNER_NUMBERS: [u64; 9] = [1, 2, 3, 7, 11, 19, 43, 67, 163];

pub const fn is_heegner(d: u64) -> bool {
    let mut i = 0;
    while i < HEEGNER_NUMBERS.len() {
        if HEEGNER_NUMBERS[i] == d {
            return true;
        }
        i += 1;
    }
    false
}

pub trait Doubling: Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    /// The structural sign of the level.
    const SIGMA: i64;
    /// Whether the level is commutative when its base is a scalar.
    const COMMUTATIVE_OVER_SCALARS: bool;
    /// Whether a commutative base yields a commutative level (above level 1).
    const PRESERVES_COMMUTATIVITY: bool;
    /// Whether associativity of the level also needs a commutative base.
    const ASSOCIATIVE_NEEDS_COMMUTATIVE_BASE: bool;

    /// Where the quadrance lives: the scalars for elliptic levels, the base otherwise.
    type Quad<B: Algebra>: Algebra<Scalar = B::Scalar>;

    fn mul<B: Algebra>(x: &Pair<B, Self>, y: &Pair<B, Self>) -> Pair<B, Self>;

    fn conj<B: Algebra>(z: &Pair<B, Self>) -> Pair<B, Self> {
        Pair::from_pair(z.l().clone(), z.r().neg())
    }

    fn dot<B: Algebra>(z: &Pair<B, Self>, w: &Pair<B, Self>) -> B::Scalar;

    fn quad<B: Algebra>(z: &Pair<B, Self>) -> Self::Quad<B>;

    fn norm<B: Algebra>(z: &Pair<B, Self>) -> B::Scalar {
        Self::quad(z).norm()
    }

    /// Product of every non-identity involution of `z`, divided by the norm.
    fn inv<B: Algebra>(z: &Pair<B, Self>) -> AlgebraResult<Pair<B, Self>> {
        let norm = z.norm();
        if norm.is_zero_divisor() {
            return Err(AlgebraError::ZeroDivisorInverse);
        }
        let masks = 1u32 << <Pair<B, Self> as Algebra>::LEVEL;
        let mut product = z.involution(1);
        for mask in 2..masks {
            product = product.mul(&z.involution(mask));
        }
        product.divide(&norm)
    }
}

/// σ = −D. `D = 1` gives the Cayley–Dickson tower (complex, quaternion,
/// octonion); the other Heegner numbers give ℚ(√−D) at level 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Elliptic<const D: u64 = 1>;

/// σ = +1, the commutative split doubling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hyperbolic;

/// σ = 0 with a new generator that commutes with the base (dual numbers).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Parabolic;

/// σ = 0 with a new generator that anti-commutes past the base conjugation.
///
/// The new generator `e` satisfies `e·b = b*·e` for a base element `b`, so it
/// anti-commutes only with the base units that the base conjugation negates.
/// From level 3 up, units sitting in the left half of the base commute with
/// `e`: in `Grassmann3`, `e1·e3 = e3·e1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grassmann;

impl<const D: u64> Elliptic<D> {
    const ADMISSIBLE: () = assert!(is_heegner(D), "Elliptic<D> needs a Heegner number D");
}

fn scale_by<B: Algebra>(value: B, d: u64) -> B {
    if d == 1 {
        value
    } else {
        value.dilate(&B::Scalar::from_i64(d as i64))
    }
}

impl<const D: u64> Doubling for Elliptic<D> {
    const SIGMA: i64 = -(D as i64);
    const COMMUTATIVE_OVER_SCALARS: bool = true;
    const PRESERVES_COMMUTATIVITY: bool = false;
    const ASSOCIATIVE_NEEDS_COMMUTATIVE_BASE: bool = true;

    type Quad<B: Algebra> = B::Scalar;

    fn mul<B: Algebra>(x: &Pair<B, Self>, y: &Pair<B, Self>) -> Pair<B, Self> {
        let () = Self::ADMISSIBLE;
        let cross = scale_by(y.r().conj().mul(x.r()), D);
        Pair::from_pair(
            x.l().mul(y.l()).sub(&cross),
            y.r().mul(x.l()).add(&x.r().mul(&y.l().conj())),
        )
    }

    fn conj<B: Algebra>(z: &Pair<B, Self>) -> Pair<B, Self> {
        Pair::from_pair(z.l().conj(), z.r().neg())
    }

    fn dot<B: Algebra>(z: &Pair<B, Self>, w: &Pair<B, Self>) -> B::Scalar {
        let () = Self::ADMISSIBLE;
        let right = z.r().dot(w.r());
        let right = if D == 1 {
            right
        } else {
            right.mul(&B::Scalar::from_i64(D as i64))
        };
        z.l().dot(w.l()).add(&right)
    }

    fn quad<B: Algebra>(z: &Pair<B, Self>) -> B::Scalar {
        Self::dot(z, z)
    }

    fn norm<B: Algebra>(z: &Pair<B, Self>) -> B::Scalar {
        Self::quad(z)
    }

    fn inv<B: Algebra>(z: &Pair<B, Self>) -> AlgebraResult<Pair<B, Self>> {
        let norm = Self::norm(z);
        if norm.is_zero_divisor() {
            return Err(AlgebraError::ZeroDivisorInverse);
        }
        Self::conj(z).divide(&norm)
    }
}

impl Doubling for Hyperbolic {
    const SIGMA: i64 = 1;
    const COMMUTATIVE_OVER_SCALARS: bool = true;
    const PRESERVES_COMMUTATIVITY: bool = true;
    const ASSOCIATIVE_NEEDS_COMMUTATIVE_BASE: bool = false;

    type Quad<B: Algebra> = B;

    fn mul<B: Algebra>(x: &Pair<B, Self>, y: &Pair<B, Self>) -> Pair<B, Self> {
        Pair::from_pair(
            x.l().mul(y.l()).add(&x.r().mul(y.r())),
            x.l().mul(y.r()).add(&x.r().mul(y.l())),
        )
    }

    fn dot<B: Algebra>(z: &Pair<B, Self>, w: &Pair<B, Self>) -> B::Scalar {
        z.l().dot(w.l()).sub(&z.r().dot(w.r()))
    }

    fn quad<B: Algebra>(z: &Pair<B, Self>) -> B {
        z.l().square().sub(&z.r().square())
    }
}

impl Doubling for Parabolic {
    const SIGMA: i64 = 0;
    const COMMUTATIVE_OVER_SCALARS: bool = true;
    const PRESERVES_COMMUTATIVITY: bool = true;
    const ASSOCIATIVE_NEEDS_COMMUTATIVE_BASE: bool = false;

    type Quad<B: Algebra> = B;

    fn mul<B: Algebra>(x: &Pair<B, Self>, y: &Pair<B, Self>) -> Pair<B, Self> {
        Pair::from_pair(
            x.l().mul(y.l()),
            x.l().mul(y.r()).add(&x.r().mul(y.l())),
        )
    }

    fn dot<B: Algebra>(z: &Pair<B, Self>, w: &Pair<B, Self>) -> B::Scalar {
        z.l().dot(w.l())
    }

    fn quad<B: Algebra>(z: &Pair<B, Self>) -> B {
        z.l().square()
    }
}

impl Doubling for Grassmann {
    const SIGMA: i64 = 0;
    const COMMUTATIVE_OVER_SCALARS: bool = true;
    const PRESERVES_COMMUTATIVITY: bool = false;
    const ASSOCIATIVE_NEEDS_COMMUTATIVE_BASE: bool = false;

    type Quad<B: Algebra> = B;

    fn mul<B: Algebra>(x: &Pair<B, Self>, y: &Pair<B, Self>) -> Pair<B, Self> {
        Pair::from_pair(
            x.l().mul(y.l()),
            x.l().mul(y.r()).add(&x.r().mul(&y.l().conj())),
        )
    }

    fn dot<B: Algebra>(z: &Pair<B, Self>, w: &Pair<B, Self>) -> B::Scalar {
        z.l().dot(w.l())
    }

    fn quad<B: Algebra>(z: &Pair<B, Self>) -> B {
        z.l().square()
    }
}
