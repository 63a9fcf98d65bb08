//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more meaningful
//! error messages than standard assertions.

use domain_family::FamilyPortfolio;
use domain_goal::{Goal, GoalProjection};
use domain_health::{PortfolioSummary, MAX_SCORE, MIN_SCORE};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts that two decimals differ by no more than `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that two scores differ by no more than `tolerance`
pub fn assert_score_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Scores differ by more than tolerance: actual={}, expected={}, tolerance={}",
        actual,
        expected,
        tolerance
    );
}

/// Asserts that a score lies in `[0, 100]`
pub fn assert_score_in_range(score: f64) {
    assert!(
        (MIN_SCORE..=MAX_SCORE).contains(&score),
        "Score {} outside [{}, {}]",
        score,
        MIN_SCORE,
        MAX_SCORE
    );
}

/// Asserts the summary's counts agree with each other and its score is in range
pub fn assert_summary_consistent(summary: &PortfolioSummary) {
    assert_eq!(
        summary.status_counts.total(),
        summary.total_holdings,
        "Status counts {:?} do not sum to {} holdings",
        summary.status_counts,
        summary.total_holdings
    );
    assert_eq!(
        summary.action_required_count,
        summary.status_counts.requiring_action(),
        "Action count disagrees with status counts"
    );
    assert_score_in_range(summary.portfolio_health_score);
    assert_eq!(
        summary.top_performer.is_some(),
        summary.total_holdings > 0,
        "Top performer present iff the portfolio has holdings"
    );
}

/// Asserts the on-track flag, shortfall and recommendation agree with the target
pub fn assert_projection_consistent(projection: &GoalProjection, goal: &Goal) {
    let expected_on_track = projection.projected_value >= goal.target_amount;
    assert_eq!(
        projection.is_on_track, expected_on_track,
        "is_on_track={} but projected={} target={}",
        projection.is_on_track, projection.projected_value, goal.target_amount
    );

    match projection.shortfall {
        Some(shortfall) => {
            assert!(!projection.is_on_track, "Shortfall present on an on-track goal");
            assert_eq!(shortfall, goal.target_amount - projection.projected_value);
            let increase = projection
                .recommended_monthly_increase
                .expect("Off-track goal without a recommended increase");
            if projection.months_remaining > 0 {
                let months = Decimal::from(projection.months_remaining);
                assert!(
                    increase * months >= shortfall,
                    "Increase {} over {} months does not cover shortfall {}",
                    increase, months, shortfall
                );
            }
        }
        None => {
            assert!(projection.is_on_track, "Shortfall missing on an off-track goal");
            assert!(projection.recommended_monthly_increase.is_none());
        }
    }
}

/// Asserts linked contributions sum to 100% when the family holds value, else to zero
pub fn assert_contributions_sum(family: &FamilyPortfolio) {
    let total = family.contribution_total();
    if family.total_value > Decimal::ZERO {
        assert_decimal_approx_eq(total, dec!(100), dec!(0.000001));
    } else {
        assert_eq!(total, Decimal::ZERO, "Contributions must be zero for a valueless family");
    }
}
