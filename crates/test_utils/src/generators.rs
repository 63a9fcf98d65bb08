//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{HoldingId, Rate};
use domain_family::{FamilyMember, Relationship};
use domain_goal::Goal;
use domain_health::{AnalyzeHoldingInput, SubScores};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::builders::{FamilyMemberBuilder, GoalBuilder};

/// Strategy for a score in `[0, 100]`
pub fn score_strategy() -> impl Strategy<Value = f64> {
    0.0..=100.0f64
}

/// Strategy for four in-range sub-scores
pub fn sub_scores_strategy() -> impl Strategy<Value = SubScores> {
    (score_strategy(), score_strategy(), score_strategy(), score_strategy())
        .prop_map(|(returns, risk, consistency, momentum)| SubScores::new(returns, risk, consistency, momentum))
}

/// Strategy for whole-currency non-negative amounts up to ten crore
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(Decimal::from)
}

/// Strategy for a valid holding input
pub fn holding_input_strategy() -> impl Strategy<Value = AnalyzeHoldingInput> {
    (any::<u128>(), amount_strategy(), amount_strategy(), sub_scores_strategy()).prop_map(
        |(id, invested, current, sub_scores)| {
            AnalyzeHoldingInput::new(HoldingId::from_uuid(Uuid::from_u128(id)), invested, current, sub_scores)
        },
    )
}

/// Strategy for a portfolio of up to `max` holdings
pub fn portfolio_strategy(max: usize) -> impl Strategy<Value = Vec<AnalyzeHoldingInput>> {
    prop::collection::vec(holding_input_strategy(), 0..=max)
}

/// Strategy for annual returns between -50% and +30% in whole percent
pub fn rate_strategy() -> impl Strategy<Value = Rate> {
    (-50i64..=30).prop_map(|pct| Rate::from_percentage(Decimal::from(pct)))
}

/// Strategy for a valid goal due within 40 years of the fixture valuation date
pub fn goal_strategy() -> impl Strategy<Value = Goal> {
    (1_000i64..100_000_000, 0i64..50_000_000, 0i64..200_000, 0u32..480).prop_map(
        |(target, current, monthly, months)| {
            GoalBuilder::new()
                .with_target(Decimal::from(target))
                .with_current(Decimal::from(current))
                .with_monthly(Decimal::from(monthly))
                .due_in_months(months)
                .build()
        },
    )
}

/// Strategy for family relationships
pub fn relationship_strategy() -> impl Strategy<Value = Relationship> {
    prop_oneof![
        Just(Relationship::Myself),
        Just(Relationship::Spouse),
        Just(Relationship::Child),
        Just(Relationship::Parent),
        Just(Relationship::Sibling),
        Just(Relationship::Other),
    ]
}

/// Strategy for a valid family member, linked or not
pub fn family_member_strategy() -> impl Strategy<Value = FamilyMember> {
    (
        relationship_strategy(),
        amount_strategy(),
        amount_strategy(),
        -20i64..40,
        any::<bool>(),
    )
        .prop_map(|(relationship, value, invested, xirr, linked)| {
            let builder = FamilyMemberBuilder::new()
                .with_relationship(relationship)
                .with_value(value, invested)
                .with_xirr(Decimal::from(xirr));
            if linked { builder.build() } else { builder.unlinked().build() }
        })
}

/// Strategy for a family of up to `max` members
pub fn family_strategy(max: usize) -> impl Strategy<Value = Vec<FamilyMember>> {
    prop::collection::vec(family_member_strategy(), 0..=max)
}
