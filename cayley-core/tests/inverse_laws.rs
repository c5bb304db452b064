//! Inverse and quotient laws over exact rationals.

mod common;

use cayley_core::{
    Algebra, AlgebraError, Bicomplex, Binplex, Biperplex, Commutative, Complex, Grassmann2,
    Grassmann3, Grassmann4, Heegner, Nilplex, Octonion, Perplex, Quaternion, Tricomplex, Trinplex,
    Triperplex,
};
use common::{element, small_ibig, small_rational};
use dashu::integer::IBig;
use proptest::prelude::*;

macro_rules! inverse_laws {
    ($name:ident, $alg:ty) => {
        mod $name {
            use super::*;

            fn arb() -> impl Strategy<Value = $alg> {
                element::<$alg>(small_rational())
            }

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(24))]

                #[test]
                fn inverse_is_two_sided(x in arb()) {
                    prop_assume!(!x.is_zero_divisor());
                    let inv = x.inv().unwrap();
                    prop_assert_eq!(x.mul(&inv), <$alg>::one());
                    prop_assert_eq!(inv.mul(&x), <$alg>::one());
                    prop_assert_eq!(inv.inv().unwrap(), x.clone());
                }

                #[test]
                fn inverse_reverses_products(x in arb(), y in arb()) {
                    prop_assume!(!x.is_zero_divisor() && !y.is_zero_divisor());
                    let xy = x.mul(&y);
                    prop_assert_eq!(xy.inv().unwrap(), y.inv().unwrap().mul(&x.inv().unwrap()));
                }

                #[test]
                fn quotients_recover_factors(x in arb(), y in arb()) {
                    prop_assume!(!x.is_zero_divisor() && !y.is_zero_divisor());
                    let xy = x.mul(&y);
                    prop_assert_eq!(xy.quo_right(&y).unwrap(), x.clone());
                    prop_assert_eq!(xy.quo_left(&x).unwrap(), y.clone());
                }

                #[test]
                fn zero_divisors_are_rejected(x in arb()) {
                    if x.is_zero_divisor() {
                        prop_assert_eq!(x.inv(), Err(AlgebraError::ZeroDivisorInverse));
                        prop_assert_eq!(
                            <$alg>::one().quo_right(&x),
                            Err(AlgebraError::ZeroDivisorDenominator)
                        );
                    } else {
                        prop_assert!(x.inv().is_ok());
                    }
                }
            }
        }
    };
}

inverse_laws!(complex, Complex<dashu::rational::RBig>);
inverse_laws!(perplex, Perplex<dashu::rational::RBig>);
inverse_laws!(nilplex, Nilplex<dashu::rational::RBig>);
inverse_laws!(heegner_3, Heegner<dashu::rational::RBig, 3>);
inverse_laws!(heegner_67, Heegner<dashu::rational::RBig, 67>);
inverse_laws!(quaternion, Quaternion<dashu::rational::RBig>);
inverse_laws!(octonion, Octonion<dashu::rational::RBig>);
inverse_laws!(bicomplex, Bicomplex<dashu::rational::RBig>);
inverse_laws!(biperplex, Biperplex<dashu::rational::RBig>);
inverse_laws!(binplex, Binplex<dashu::rational::RBig>);
inverse_laws!(tricomplex, Tricomplex<dashu::rational::RBig>);
inverse_laws!(triperplex, Triperplex<dashu::rational::RBig>);
inverse_laws!(trinplex, Trinplex<dashu::rational::RBig>);
inverse_laws!(grassmann2, Grassmann2<dashu::rational::RBig>);
inverse_laws!(grassmann3, Grassmann3<dashu::rational::RBig>);
inverse_laws!(grassmann4, Grassmann4<dashu::rational::RBig>);

// ============================================================================
// Commutative quotients
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn bicomplex_quo_recovers_both_factors(
        x in element::<Bicomplex<dashu::rational::RBig>>(small_rational()),
        y in element::<Bicomplex<dashu::rational::RBig>>(small_rational()),
    ) {
        prop_assume!(!x.is_zero_divisor() && !y.is_zero_divisor());
        let xy = x.mul(&y);
        prop_assert_eq!(xy.quo(&y).unwrap(), x.clone());
        prop_assert_eq!(xy.quo(&x).unwrap(), y.clone());
        prop_assert_eq!(xy.quo(&y), xy.quo_left(&y));
    }

    #[test]
    fn zero_divisor_predicate_matches_norm(x in element::<Triperplex<IBig>>(small_ibig())) {
        prop_assert_eq!(x.is_zero_divisor(), x.norm() == IBig::ZERO);
    }
}

#[test]
fn light_cone_elements_are_zero_divisors() {
    let x: Perplex<dashu::rational::RBig> = common::flat_q(&[3, -3]);
    let y: Perplex<dashu::rational::RBig> = common::flat_q(&[1, 1]);
    assert!(x.is_zero_divisor());
    assert!(x.mul(&y).is_zero());
}
