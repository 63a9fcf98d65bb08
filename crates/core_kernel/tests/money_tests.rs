//! Integration tests for amounts and rates

use core_kernel::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ============= AMOUNT TESTS =============
mod amount_tests {
    use super::*;

    #[test]
    fn test_round_currency_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec!(10.005)), dec!(10.01));
        assert_eq!(round_currency(dec!(-10.005)), dec!(-10.01));
        assert_eq!(round_currency(dec!(10.004)), dec!(10.00));
        assert_eq!(CURRENCY_PRECISION, 2);
    }

    #[test]
    fn test_percentage_of_loss() {
        assert_eq!(percentage_of(dec!(-4800), dec!(60000)), dec!(-8));
    }

    #[test]
    fn test_guards_report_the_field() {
        let err = ensure_non_negative("portfolio_value", dec!(-0.01)).unwrap_err();
        assert_eq!(err.field(), "portfolio_value");
        assert_eq!(err.to_string(), "portfolio_value must not be negative, got -0.01");

        let err = ensure_positive("target_amount", Decimal::ZERO).unwrap_err();
        assert!(matches!(err, ValidationError::NotPositive { field: "target_amount", .. }));
    }
}

// ============= RATE TESTS =============
mod rate_tests {
    use super::*;

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(12));
        assert_eq!(rate.as_decimal(), dec!(0.12));
        assert_eq!(rate.monthly().as_decimal(), dec!(0.01));
        assert_eq!(rate.growth_factor(), dec!(1.12));
        assert_eq!(rate.to_string(), "12%");
    }

    #[test]
    fn test_negative_rate_above_total_loss_is_compoundable() {
        assert!(Rate::new(dec!(-0.99)).ensure_compoundable("annual_return").is_ok());
        assert!(Rate::new(dec!(-1)).ensure_compoundable("annual_return").is_err());
        assert!(Rate::new(dec!(-3)).ensure_compoundable("annual_return").is_err());
    }

    #[test]
    fn test_rate_roundtrips_through_json() {
        let rate = Rate::new(dec!(0.085));
        let json = serde_json::to_string(&rate).unwrap();
        assert_eq!(serde_json::from_str::<Rate>(&json).unwrap(), rate);
    }
}

// ============= PROPERTY TESTS =============
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_moves_at_most_half_a_cent(minor in -1_000_000_000i64..1_000_000_000, extra in 0u32..10) {
            let amount = Decimal::new(minor * 10 + i64::from(extra), 3);
            let rounded = round_currency(amount);
            prop_assert!((rounded - amount).abs() <= dec!(0.005));
            prop_assert!(rounded.scale() <= CURRENCY_PRECISION);
        }

        #[test]
        fn share_of_never_exceeds_one_for_parts(part in 0i64..1_000_000, extra in 0i64..1_000_000) {
            let whole = Decimal::from(part + extra);
            let share = share_of(Decimal::from(part), whole);
            prop_assert!(share >= Decimal::ZERO);
            prop_assert!(share <= Decimal::ONE);
        }
    }
}
