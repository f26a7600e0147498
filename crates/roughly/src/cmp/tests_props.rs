//! Property tests for the comparison operators.
//!
//! Operand and tolerance strategies stay finite on purpose: the contract
//! only covers finite inputs and non-negative bounds.

use proptest::prelude::*;

use super::*;

fn operand() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e12..1.0e12_f64,
        -10.0..10.0_f64,
        -1.0e-6..1.0e-6_f64,
        Just(0.0),
    ]
}

fn tolerance() -> impl Strategy<Value = Tol> {
    (0.0..1e-3_f64, 0.0..1e-3_f64).prop_map(|(rel, abs)| Tol::new(rel, abs))
}

proptest! {
    #[test]
    fn three_way_partition(a in operand(), b in operand(), tol in tolerance()) {
        let verdicts = [lt(a, b, tol), eq(a, b, tol), gt(a, b, tol)];
        prop_assert_eq!(verdicts.iter().filter(|&&v| v).count(), 1);
    }

    #[test]
    fn eq_is_symmetric(a in operand(), b in operand(), tol in tolerance()) {
        prop_assert_eq!(eq(a, b, tol), eq(b, a, tol));
    }

    #[test]
    fn eq_is_reflexive(a in operand(), tol in tolerance()) {
        prop_assert!(eq(a, a, tol));
    }

    #[test]
    fn inclusive_operators_are_unions(a in operand(), b in operand(), tol in tolerance()) {
        prop_assert_eq!(le(a, b, tol), lt(a, b, tol) || eq(a, b, tol));
        prop_assert_eq!(ge(a, b, tol), gt(a, b, tol) || eq(a, b, tol));
    }

    #[test]
    fn ne_is_the_negation_of_eq(a in operand(), b in operand(), tol in tolerance()) {
        prop_assert_eq!(ne(a, b, tol), !eq(a, b, tol));
    }

    #[test]
    fn zero_tolerances_are_exact(a in operand(), b in operand()) {
        prop_assert_eq!(eq(a, b, Tol::exact()), a == b);
        prop_assert_eq!(lt(a, b, Tol::exact()), a < b);
        prop_assert_eq!(gt(a, b, Tol::exact()), a > b);
    }

    #[test]
    fn verdicts_are_sign_agnostic(a in operand(), b in operand(), tol in tolerance()) {
        prop_assert_eq!(eq(a, b, tol), eq(-a, -b, tol));
        prop_assert_eq!(lt(a, b, tol), gt(-a, -b, tol));
    }
}
