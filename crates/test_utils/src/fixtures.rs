//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data with known, hand-checked outcomes.

use chrono::NaiveDate;
use core_kernel::{ClientId, HoldingId, MemberId};
use domain_family::{FamilyMember, Relationship};
use domain_goal::Goal;
use domain_health::{AnalyzeHoldingInput, SubScores};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for dates
pub struct DateFixtures;

impl DateFixtures {
    /// Valuation date used throughout (Jan 1, 2026)
    pub fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    /// Retirement target date, 228 months after `as_of`
    pub fn retirement_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2045, 1, 1).unwrap()
    }

    /// A date already in the past relative to `as_of`
    pub fn overdue_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }
}

/// Fixture for deterministic identifiers
pub struct IdFixtures;

impl IdFixtures {
    pub fn holding(n: u128) -> HoldingId {
        HoldingId::from_uuid(Uuid::from_u128(n))
    }

    pub fn client(n: u128) -> ClientId {
        ClientId::from_uuid(Uuid::from_u128(0xC000 + n))
    }

    pub fn member(n: u128) -> MemberId {
        MemberId::from_uuid(Uuid::from_u128(0xF000 + n))
    }
}

/// Uniform score and invested amount for each holding of the sample portfolio
const SAMPLE_HOLDINGS: [(f64, i64); 7] = [
    (92.0, 150_000),
    (87.0, 120_000),
    (83.0, 100_000),
    (72.0, 80_000),
    (68.0, 75_000),
    (38.0, 60_000),
    (22.0, 50_000),
];

static SAMPLE_PORTFOLIO: Lazy<Vec<AnalyzeHoldingInput>> = Lazy::new(|| {
    SAMPLE_HOLDINGS
        .iter()
        .zip(1u128..)
        .map(|(&(score, invested), n)| {
            let invested = rust_decimal::Decimal::from(invested);
            AnalyzeHoldingInput::new(
                IdFixtures::holding(n),
                invested,
                invested * dec!(1.1),
                SubScores::uniform(score),
            )
        })
        .collect()
});

/// Fixture for holding inputs
pub struct HoldingFixtures;

impl HoldingFixtures {
    /// Sub-scores 95/88/91/90, overall 91.7, in form
    pub fn strong() -> AnalyzeHoldingInput {
        AnalyzeHoldingInput::new(
            IdFixtures::holding(101),
            dec!(100000),
            dec!(125000),
            SubScores::new(95.0, 88.0, 91.0, 90.0),
        )
    }

    /// Sub-scores 32/45/40/30, overall 36.55, off track
    pub fn weak() -> AnalyzeHoldingInput {
        AnalyzeHoldingInput::new(
            IdFixtures::holding(102),
            dec!(80000),
            dec!(72000),
            SubScores::new(32.0, 45.0, 40.0, 30.0),
        )
    }

    /// Seven holdings: three in form, two on track, one off track, one out of form
    ///
    /// Holding 1 is the top performer and holding 7 the worst.
    pub fn sample_portfolio() -> Vec<AnalyzeHoldingInput> {
        SAMPLE_PORTFOLIO.clone()
    }
}

/// Fixture for goals
pub struct GoalFixtures;

impl GoalFixtures {
    /// 5 crore target, 1.25 crore saved, 50,000 a month, due 228 months after `as_of`
    pub fn retirement() -> Goal {
        Goal::new(
            "Retirement",
            dec!(50000000),
            DateFixtures::retirement_date(),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        )
        .with_current_amount(dec!(12500000))
        .with_monthly_contribution(dec!(50000))
    }

    /// Past its target date and short of it
    pub fn overdue() -> Goal {
        Goal::new(
            "Car",
            dec!(800000),
            DateFixtures::overdue_date(),
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        )
        .with_current_amount(dec!(500000))
    }
}

/// Fixture for families
pub struct FamilyFixtures;

impl FamilyFixtures {
    /// Two linked members worth 2,100,000 together plus one unlinked parent
    pub fn sample_family() -> Vec<FamilyMember> {
        let mut head = FamilyMember::new("Rajesh", Relationship::Myself, dec!(1250000), dec!(1000000), dec!(18.5))
            .as_head();
        head.id = IdFixtures::member(1);
        let mut spouse = FamilyMember::new("Priya", Relationship::Spouse, dec!(850000), dec!(700000), dec!(15.2));
        spouse.id = IdFixtures::member(2);
        let mut parent = FamilyMember::new("Kamla", Relationship::Parent, dec!(125000), dec!(100000), dec!(14.5))
            .unlinked();
        parent.id = IdFixtures::member(3);
        vec![head, spouse, parent]
    }
}
