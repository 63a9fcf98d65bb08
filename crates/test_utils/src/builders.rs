//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests only spell out the fields they care about.

use chrono::NaiveDate;
use core_kernel::{HoldingId, MemberId};
use domain_family::{FamilyMember, Relationship};
use domain_goal::Goal;
use domain_health::{AnalyzeHoldingInput, SubScores};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::DateFixtures;

/// Builder for holding inputs
pub struct HoldingInputBuilder {
    holding_id: HoldingId,
    invested_value: Decimal,
    current_value: Decimal,
    sub_scores: SubScores,
    insights: Vec<String>,
}

impl Default for HoldingInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HoldingInputBuilder {
    /// An on-track holding: 100,000 invested, 110,000 current, all sub-scores 60
    pub fn new() -> Self {
        Self {
            holding_id: HoldingId::new(),
            invested_value: dec!(100000),
            current_value: dec!(110000),
            sub_scores: SubScores::uniform(60.0),
            insights: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: HoldingId) -> Self {
        self.holding_id = id;
        self
    }

    pub fn with_invested(mut self, amount: Decimal) -> Self {
        self.invested_value = amount;
        self
    }

    pub fn with_current(mut self, amount: Decimal) -> Self {
        self.current_value = amount;
        self
    }

    /// Sets every sub-score to `score`
    pub fn with_score(mut self, score: f64) -> Self {
        self.sub_scores = SubScores::uniform(score);
        self
    }

    pub fn with_sub_scores(mut self, sub_scores: SubScores) -> Self {
        self.sub_scores = sub_scores;
        self
    }

    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insights.push(insight.into());
        self
    }

    pub fn build(self) -> AnalyzeHoldingInput {
        AnalyzeHoldingInput::new(self.holding_id, self.invested_value, self.current_value, self.sub_scores)
            .with_insights(self.insights)
    }
}

/// Builder for goals
pub struct GoalBuilder {
    name: String,
    target_amount: Decimal,
    current_amount: Decimal,
    target_date: NaiveDate,
    monthly_contribution: Option<Decimal>,
    created_at: NaiveDate,
}

impl Default for GoalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalBuilder {
    /// A 1,000,000 goal due at the retirement date with nothing saved
    pub fn new() -> Self {
        Self {
            name: "Goal".to_string(),
            target_amount: dec!(1000000),
            current_amount: Decimal::ZERO,
            target_date: DateFixtures::retirement_date(),
            monthly_contribution: None,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_target(mut self, amount: Decimal) -> Self {
        self.target_amount = amount;
        self
    }

    pub fn with_current(mut self, amount: Decimal) -> Self {
        self.current_amount = amount;
        self
    }

    pub fn with_monthly(mut self, amount: Decimal) -> Self {
        self.monthly_contribution = Some(amount);
        self
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.target_date = date;
        self
    }

    /// Sets the target date `months` months after the fixture valuation date
    pub fn due_in_months(mut self, months: u32) -> Self {
        self.target_date = DateFixtures::as_of()
            .checked_add_months(chrono::Months::new(months))
            .unwrap();
        self
    }

    pub fn build(self) -> Goal {
        let mut goal = Goal::new(self.name, self.target_amount, self.target_date, self.created_at)
            .with_current_amount(self.current_amount);
        goal.monthly_contribution = self.monthly_contribution;
        goal
    }
}

/// Builder for family members
pub struct FamilyMemberBuilder {
    id: MemberId,
    name: String,
    relationship: Relationship,
    portfolio_value: Decimal,
    invested_amount: Decimal,
    xirr: Decimal,
    is_linked: bool,
    is_head: bool,
}

impl Default for FamilyMemberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyMemberBuilder {
    /// A linked member worth 500,000 on 400,000 invested at 12% XIRR
    pub fn new() -> Self {
        Self {
            id: MemberId::new(),
            name: "Member".to_string(),
            relationship: Relationship::Other,
            portfolio_value: dec!(500000),
            invested_amount: dec!(400000),
            xirr: dec!(12),
            is_linked: true,
            is_head: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationship = relationship;
        self
    }

    pub fn with_value(mut self, value: Decimal, invested: Decimal) -> Self {
        self.portfolio_value = value;
        self.invested_amount = invested;
        self
    }

    pub fn with_xirr(mut self, xirr: Decimal) -> Self {
        self.xirr = xirr;
        self
    }

    pub fn unlinked(mut self) -> Self {
        self.is_linked = false;
        self
    }

    pub fn head(mut self) -> Self {
        self.is_head = true;
        self
    }

    pub fn build(self) -> FamilyMember {
        FamilyMember {
            id: self.id,
            name: self.name,
            relationship: self.relationship,
            portfolio_value: self.portfolio_value,
            invested_amount: self.invested_amount,
            xirr: self.xirr,
            is_linked: self.is_linked,
            is_head: self.is_head,
        }
    }
}
