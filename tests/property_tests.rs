use fraction_pies_core::calculator::{calculate, Rules};
use fraction_pies_core::math::{gcd, lcm};
use fraction_pies_core::types::{Fraction, ImproperFraction, MixedNumber, Operation};
use proptest::prelude::*;

fn arb_fraction() -> impl Strategy<Value = Fraction> {
    (0i64..5, 0i64..50, 1i64..50).prop_map(|(whole, num, den)| Fraction::mixed(whole, num, den))
}

fn arb_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![Just(Operation::Add), Just(Operation::Subtract)]
}

proptest! {
    #[test]
    fn lcm_times_gcd_is_product(a in 1u64..10_000, b in 1u64..10_000) {
        prop_assert_eq!(lcm(a, b) * gcd(a, b), a * b);
    }

    #[test]
    fn lcm_with_zero(a in 0u64..10_000) {
        prop_assert_eq!(lcm(a, 0), 0);
        prop_assert_eq!(lcm(0, a), 0);
    }

    #[test]
    fn common_denominator_is_common_multiple(
        f1 in arb_fraction(),
        f2 in arb_fraction(),
        op in arb_operation()
    ) {
        let calc = calculate(f1, f2, op, Rules::default()).unwrap();
        prop_assert_eq!(calc.common_denominator % f1.den as u64, 0);
        prop_assert_eq!(calc.common_denominator % f2.den as u64, 0);
        prop_assert_eq!(calc.converted1.den, calc.common_denominator);
        prop_assert_eq!(calc.result.den, calc.common_denominator);
    }

    #[test]
    fn converted_fractions_keep_their_value(f1 in arb_fraction(), f2 in arb_fraction()) {
        let calc = calculate(f1, f2, Operation::Add, Rules::default()).unwrap();
        // a/b == c/d  <=>  a*d == c*b
        prop_assert_eq!(
            calc.improper1.num * calc.converted1.den,
            calc.converted1.num * calc.improper1.den
        );
        prop_assert_eq!(
            calc.improper2.num * calc.converted2.den,
            calc.converted2.num * calc.improper2.den
        );
    }

    #[test]
    fn subtraction_undoes_addition(f1 in arb_fraction(), f2 in arb_fraction()) {
        let sum = calculate(f1, f2, Operation::Add, Rules::default()).unwrap();
        let diff = calculate(f1, f2, Operation::Subtract, Rules::default()).unwrap();
        prop_assert_eq!(
            sum.result.num - diff.result.num,
            2 * sum.converted2.num as i64
        );
    }

    #[test]
    fn mixed_round_trip(whole in 0u64..100, den in 1u64..100, rem in 0u64..100) {
        let num = rem % den;
        let mixed = MixedNumber { negative: false, whole, num, den };
        let improper = ImproperFraction { num: mixed.improper_num(), den };
        prop_assert_eq!(improper.to_mixed(), mixed);
    }

    #[test]
    fn zero_denominator_never_calculates(f in arb_fraction(), num in 0i64..50) {
        let bad = Fraction::new(num, 0);
        prop_assert!(calculate(bad, f, Operation::Add, Rules::default()).is_err());
        prop_assert!(calculate(f, bad, Operation::Subtract, Rules::default()).is_err());
    }
}
