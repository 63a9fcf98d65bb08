//! Integration tests for goal projection

use chrono::NaiveDate;
use domain_goal::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn retirement_goal() -> Goal {
    Goal::new("Retirement", dec!(50000000), date(2045, 1, 1), date(2024, 4, 1))
        .with_current_amount(dec!(12500000))
        .with_monthly_contribution(dec!(50000))
}

fn reference_projection(monthly: f64, current: f64, annual: f64, months: u32) -> f64 {
    let r = annual / 12.0;
    let n = f64::from(months);
    let sip = monthly * (((1.0 + r).powf(n) - 1.0) / r) * (1.0 + r);
    let lump = current * (1.0 + annual).powf(n / 12.0);
    sip + lump
}

// ============= PROJECTION TESTS =============
mod projection_tests {
    use super::*;

    #[test]
    fn test_retirement_goal_on_track() {
        let goal = retirement_goal();
        let projection = project(&goal, date(2026, 1, 1), Rate::new(dec!(0.12))).unwrap();

        assert_eq!(projection.months_remaining, 228);
        assert!(projection.is_on_track);
        assert_eq!(projection.shortfall, None);
        assert_eq!(projection.recommended_monthly_increase, None);

        let expected = reference_projection(50000.0, 12500000.0, 0.12, 228);
        let actual = projection.projected_value.to_f64().unwrap();
        assert!(
            ((actual - expected) / expected).abs() < 1e-6,
            "projected {actual} vs reference {expected}"
        );
        assert!(projection.projected_value.scale() <= 2);
    }

    #[test]
    fn test_on_track_flips_when_target_passes_projection() {
        let as_of = date(2026, 1, 1);
        let rate = Rate::new(dec!(0.12));
        let projected = project(&retirement_goal(), as_of, rate).unwrap().projected_value;

        let mut exact = retirement_goal();
        exact.target_amount = projected;
        let at_target = project(&exact, as_of, rate).unwrap();
        assert!(at_target.is_on_track);
        assert_eq!(at_target.shortfall, None);

        let mut raised = retirement_goal();
        raised.target_amount = projected + dec!(1);
        let above = project(&raised, as_of, rate).unwrap();
        assert!(!above.is_on_track);
        assert_eq!(above.shortfall, Some(dec!(1)));
        assert_eq!(above.recommended_monthly_increase, Some(dec!(0.01)));
    }

    #[test]
    fn test_underfunded_goal() {
        let goal = Goal::new("Education", dec!(5000000), date(2031, 1, 1), date(2025, 1, 1))
            .with_current_amount(dec!(200000))
            .with_monthly_contribution(dec!(10000));

        let projection = project(&goal, date(2026, 1, 1), Rate::new(dec!(0.10))).unwrap();

        assert_eq!(projection.months_remaining, 60);
        assert!(!projection.is_on_track);
        let shortfall = projection.shortfall.unwrap();
        assert_eq!(shortfall, dec!(5000000) - projection.projected_value);
        let per_month = (shortfall / Decimal::from(60))
            .round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity);
        assert_eq!(projection.recommended_monthly_increase, Some(per_month));

        let expected = reference_projection(10000.0, 200000.0, 0.10, 60);
        let actual = projection.projected_value.to_f64().unwrap();
        assert!(((actual - expected) / expected).abs() < 1e-6);
    }

    #[test]
    fn test_no_contribution_grows_corpus_only() {
        let goal = Goal::new("Wealth", dec!(1000000), date(2028, 1, 1), date(2025, 1, 1))
            .with_current_amount(dec!(500000));

        let projection = project(&goal, date(2026, 1, 1), Rate::new(dec!(0.10))).unwrap();

        assert_eq!(projection.contribution_value, Decimal::ZERO);
        assert_eq!(projection.projected_value, dec!(605000.00));
        assert_eq!(projection.shortfall, Some(dec!(395000.00)));
    }

    #[test]
    fn test_negative_return_shrinks_corpus() {
        let goal = Goal::new("Buffer", dec!(100000), date(2027, 1, 1), date(2025, 1, 1))
            .with_current_amount(dec!(100000));

        let projection = project(&goal, date(2026, 1, 1), Rate::new(dec!(-0.10))).unwrap();

        assert_eq!(projection.projected_value, dec!(90000.00));
        assert!(!projection.is_on_track);
    }

    #[test]
    fn test_rate_below_minus_one_rejected() {
        let err = project(&retirement_goal(), date(2026, 1, 1), Rate::new(dec!(-1.5))).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "annual_return", .. }));
    }

    #[test]
    fn test_growth_beyond_decimal_range_rejected() {
        let goal = Goal::new("Moonshot", dec!(1000000), date(2039, 8, 1), date(2026, 1, 1))
            .with_monthly_contribution(dec!(1000));

        let err = project(&goal, date(2026, 1, 1), Rate::new(dec!(6))).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "annual_return", .. }));

        let err = required_monthly_contribution(dec!(1000000), Decimal::ZERO, 163, Rate::new(dec!(6)))
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "annual_return", .. }));
    }

    #[test]
    fn test_projection_serializes() {
        let projection = project(&retirement_goal(), date(2026, 1, 1), Rate::new(dec!(0.12))).unwrap();
        let json = serde_json::to_value(&projection).unwrap();

        assert_eq!(json["months_remaining"], 228);
        assert_eq!(json["is_on_track"], true);
        assert!(json["shortfall"].is_null());
    }
}

// ============= CATEGORY TESTS =============
mod category_tests {
    use super::*;

    #[test]
    fn test_category_defaults_project_over_their_horizon() {
        let as_of = date(2026, 1, 1);

        for category in GoalCategory::ALL {
            let goal = Goal::from_category(category, as_of).unwrap();
            let projection = project(&goal, as_of, Rate::new(dec!(0.12))).unwrap();

            assert_eq!(projection.months_remaining, category.default_years() * 12);
            assert!(!projection.is_on_track, "{category} starts with nothing saved");
            assert_eq!(projection.shortfall, Some(category.default_target()));
        }
    }

    #[test]
    fn test_retirement_default_contribution() {
        let as_of = date(2026, 1, 1);
        let goal = Goal::from_category(GoalCategory::Retirement, as_of).unwrap();
        let rate = Rate::new(dec!(0.12));

        let monthly =
            required_monthly_contribution(goal.target_amount, goal.current_amount, 300, rate).unwrap();
        let funded = goal.with_monthly_contribution(monthly);

        assert!(project(&funded, as_of, rate).unwrap().is_on_track);
    }
}

// ============= PLANNER TESTS =============
mod planner_tests {
    use super::*;

    #[test]
    fn test_required_contribution_puts_goal_on_track() {
        let goal = Goal::new("Home", dec!(3000000), date(2031, 1, 1), date(2025, 1, 1))
            .with_current_amount(dec!(250000));
        let rate = Rate::new(dec!(0.12));
        let as_of = date(2026, 1, 1);

        let needed = required_monthly_contribution(
            goal.target_amount,
            goal.current_amount,
            goal.months_remaining(as_of),
            rate,
        )
        .unwrap();
        assert!(needed > Decimal::ZERO);

        // One cent more absorbs the rounding of `needed`
        let funded = goal.clone().with_monthly_contribution(needed + dec!(0.01));
        assert!(project(&funded, as_of, rate).unwrap().is_on_track);
    }
}

// ============= PROPERTY TESTS =============
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn goal_strategy() -> impl Strategy<Value = (Goal, NaiveDate)> {
        (
            1_000i64..100_000_000,
            0i64..50_000_000,
            0i64..200_000,
            0u32..480,
        )
            .prop_map(|(target, current, monthly, months)| {
                let as_of = date(2026, 1, 1);
                let target_date = as_of
                    .checked_add_months(chrono::Months::new(months))
                    .unwrap();
                let goal = Goal::new("Goal", Decimal::from(target), target_date, date(2025, 1, 1))
                    .with_current_amount(Decimal::from(current))
                    .with_monthly_contribution(Decimal::from(monthly));
                (goal, as_of)
            })
    }

    fn rate_strategy() -> impl Strategy<Value = Rate> {
        (-50i64..=30).prop_map(|pct| Rate::from_percentage(Decimal::from(pct)))
    }

    proptest! {
        #[test]
        fn shortfall_present_iff_off_track((goal, as_of) in goal_strategy(), rate in rate_strategy()) {
            let projection = project(&goal, as_of, rate).unwrap();

            prop_assert_eq!(projection.is_on_track, projection.projected_value >= goal.target_amount);
            prop_assert_eq!(projection.shortfall.is_some(), !projection.is_on_track);
            prop_assert_eq!(projection.recommended_monthly_increase.is_some(), !projection.is_on_track);

            if let Some(shortfall) = projection.shortfall {
                prop_assert!(shortfall > Decimal::ZERO);
                prop_assert_eq!(shortfall, goal.target_amount - projection.projected_value);
            }
        }

        #[test]
        fn recommended_increase_covers_the_shortfall((goal, as_of) in goal_strategy(), rate in rate_strategy()) {
            let projection = project(&goal, as_of, rate).unwrap();

            if let (Some(shortfall), Some(increase)) =
                (projection.shortfall, projection.recommended_monthly_increase)
            {
                if projection.months_remaining > 0 {
                    let months = Decimal::from(projection.months_remaining);
                    prop_assert!(increase > Decimal::ZERO);
                    prop_assert!(increase * months >= shortfall);
                }
            }
        }

        #[test]
        fn more_contribution_never_projects_less(
            (goal, as_of) in goal_strategy(),
            rate in rate_strategy(),
            extra in 1i64..50_000,
        ) {
            let base = project(&goal, as_of, rate).unwrap();
            let richer_goal = goal.clone().with_monthly_contribution(
                goal.monthly_contribution.unwrap_or(Decimal::ZERO) + Decimal::from(extra),
            );
            let richer = project(&richer_goal, as_of, rate).unwrap();

            prop_assert!(richer.projected_value >= base.projected_value);
        }

        #[test]
        fn months_remaining_matches_target_date((goal, as_of) in goal_strategy()) {
            let projection = project(&goal, as_of, Rate::zero()).unwrap();
            prop_assert_eq!(projection.months_remaining, goal.months_remaining(as_of));
        }
    }
}
