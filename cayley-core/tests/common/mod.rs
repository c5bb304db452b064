//! Shared generators for the property suites.

#![allow(dead_code)]

use cayley_core::{rational, Algebra};
use dashu::integer::IBig;
use dashu::rational::RBig;
use proptest::prelude::*;

/// Full-range machine integers. Wrapping arithmetic is still a ring, so
/// every polynomial identity holds exactly.
pub fn any_i64() -> impl Strategy<Value = i64> {
    any::<i64>()
}

pub fn small_ibig() -> impl Strategy<Value = IBig> {
    (-1000i64..=1000).prop_map(IBig::from)
}

/// Small-height rationals keep products of many coordinates cheap.
pub fn small_rational() -> impl Strategy<Value = RBig> {
    (-12i64..=12, 1i64..=6).prop_map(|(n, d)| rational(n, d))
}

/// Floats that are small integers, so sums and products stay exact.
pub fn integral_f64() -> impl Strategy<Value = f64> {
    (-64i32..=64).prop_map(f64::from)
}

/// An element of `A` with independently drawn coordinates.
pub fn element<A: Algebra>(
    scalar: impl Strategy<Value = A::Scalar>,
) -> impl Strategy<Value = A> {
    proptest::collection::vec(scalar, A::DIM).prop_map(|coords| {
        let Ok(z) = A::from_flat(&coords) else {
            panic!("generated {} coordinates", coords.len());
        };
        z
    })
}

/// Flat constructor over integer literals.
pub fn flat<A: Algebra<Scalar = i64>>(coords: &[i64]) -> A {
    A::from_flat(coords).unwrap()
}

/// Flat constructor over integer rationals.
pub fn flat_q<A: Algebra<Scalar = RBig>>(coords: &[i64]) -> A {
    let coords: Vec<RBig> = coords.iter().map(|&c| rational(c, 1)).collect();
    A::from_flat(&coords).unwrap()
}

/// The basis unit with a one at flat index `k`.
pub fn unit<A: Algebra>(k: usize) -> A {
    let mut coords = vec![A::Scalar::zero(); A::DIM];
    coords[k] = A::Scalar::one();
    A::from_flat(&coords).unwrap()
}
