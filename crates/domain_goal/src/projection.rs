//! Goal projection
//!
//! Combines the SIP future value with the grown current corpus and compares
//! the result against the goal's target.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{round_currency, round_currency_up, GoalId, Rate, ValidationError};

use crate::goal::Goal;
use crate::planner::{lump_sum_future_value, sip_future_value};

/// Horizon over which a goal is projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind", content = "months")]
pub enum ProjectionHorizon {
    /// Whole months between the as-of date and the goal's target date
    #[default]
    TargetDate,
    /// A fixed planning horizon, independent of the target date
    FixedMonths(u32),
}

/// Outcome of projecting a goal forward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    pub goal_id: GoalId,
    pub as_of: NaiveDate,
    pub months_remaining: u32,
    /// Future value of the monthly SIP
    pub contribution_value: Decimal,
    /// Future value of the amount already saved
    pub corpus_value: Decimal,
    /// Sum of both, rounded to currency precision
    pub projected_value: Decimal,
    pub is_on_track: bool,
    /// Present only when the goal is not on track
    pub shortfall: Option<Decimal>,
    /// Extra monthly SIP that would cover the shortfall, present only when not on track
    pub recommended_monthly_increase: Option<Decimal>,
}

impl GoalProjection {
    fn settle(
        goal: &Goal,
        as_of: NaiveDate,
        months_remaining: u32,
        contribution_value: Decimal,
        corpus_value: Decimal,
        projected_value: Decimal,
    ) -> Self {
        let is_on_track = projected_value >= goal.target_amount;
        let shortfall = (!is_on_track).then(|| goal.target_amount - projected_value);
        // Rounds up: increase * months >= shortfall
        let recommended_monthly_increase = shortfall.map(|gap| {
            if months_remaining == 0 {
                Decimal::ZERO
            } else {
                round_currency_up(gap / Decimal::from(months_remaining))
            }
        });

        Self {
            goal_id: goal.id,
            as_of,
            months_remaining,
            contribution_value,
            corpus_value,
            projected_value,
            is_on_track,
            shortfall,
            recommended_monthly_increase,
        }
    }

    /// Projected value as a share of the target, capped at 1
    pub fn funded_ratio(&self, target_amount: Decimal) -> Decimal {
        if target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.projected_value
            .checked_div(target_amount)
            .map_or(Decimal::ONE, |ratio| ratio.min(Decimal::ONE))
    }
}

/// Projects goals under a fixed return assumption
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProjector {
    annual_return: Rate,
    horizon: ProjectionHorizon,
}

impl GoalProjector {
    /// Creates a projector that runs each goal up to its target date
    pub fn new(annual_return: Rate) -> Self {
        Self {
            annual_return,
            horizon: ProjectionHorizon::TargetDate,
        }
    }

    /// Uses a fixed horizon instead of the goal's target date
    pub fn with_horizon(mut self, horizon: ProjectionHorizon) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn annual_return(&self) -> Rate {
        self.annual_return
    }

    pub fn horizon(&self) -> ProjectionHorizon {
        self.horizon
    }

    /// Projects `goal` from `as_of`
    ///
    /// # Errors
    ///
    /// - Any amount error from [`Goal::validate`]
    /// - `ValidationError::OutOfRange` if the return is at or below -100%, or
    ///   compounding overflows the decimal range
    pub fn project(&self, goal: &Goal, as_of: NaiveDate) -> Result<GoalProjection, ValidationError> {
        goal.validate()?;
        let annual_return = self.annual_return.ensure_compoundable("annual_return")?;

        let months = match self.horizon {
            ProjectionHorizon::TargetDate => goal.months_remaining(as_of),
            ProjectionHorizon::FixedMonths(months) => months,
        };

        if months == 0 {
            let projection = GoalProjection::settle(
                goal,
                as_of,
                0,
                Decimal::ZERO,
                goal.current_amount,
                goal.current_amount,
            );
            debug!(goal_id = %goal.id, on_track = projection.is_on_track, "goal horizon elapsed");
            return Ok(projection);
        }

        let contribution = goal.monthly_contribution.unwrap_or(Decimal::ZERO);
        let contribution_value = sip_future_value(contribution, annual_return, months)?;
        let corpus_value = lump_sum_future_value(goal.current_amount, annual_return, months)?;
        let projected_value = contribution_value
            .checked_add(corpus_value)
            .map(round_currency)
            .ok_or_else(|| {
                ValidationError::out_of_range("projected_value", "sum exceeds the representable range")
            })?;

        let projection = GoalProjection::settle(
            goal,
            as_of,
            months,
            round_currency(contribution_value),
            round_currency(corpus_value),
            projected_value,
        );

        debug!(
            goal_id = %goal.id,
            months,
            rate = %annual_return,
            projected = %projection.projected_value,
            on_track = projection.is_on_track,
            "goal projected"
        );

        Ok(projection)
    }
}

/// Projects `goal` to its target date at `annual_return`
pub fn project(
    goal: &Goal,
    as_of: NaiveDate,
    annual_return: Rate,
) -> Result<GoalProjection, ValidationError> {
    GoalProjector::new(annual_return).project(goal, as_of)
}
