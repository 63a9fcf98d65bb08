//! Savings goal definition

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{
    ensure_non_negative, ensure_positive, months_between, share_of, GoalId, MonthSpan,
    ValidationError,
};

use crate::category::GoalCategory;

/// A savings goal with an optional monthly SIP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,
    /// Display name (e.g. "Retirement")
    pub name: String,
    /// Amount to accumulate, must be positive
    pub target_amount: Decimal,
    /// Amount already saved
    pub current_amount: Decimal,
    /// Date by which the target should be reached
    pub target_date: NaiveDate,
    /// Recurring monthly contribution
    pub monthly_contribution: Option<Decimal>,
    #[serde(default)]
    pub category: Option<GoalCategory>,
    /// When the goal was set up
    pub created_at: NaiveDate,
}

impl Goal {
    /// Creates a goal with nothing saved and no SIP
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `target_amount` - Amount to accumulate
    /// * `target_date` - Date by which the target should be reached
    /// * `created_at` - Creation date
    pub fn new(
        name: impl Into<String>,
        target_amount: Decimal,
        target_date: NaiveDate,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id: GoalId::new_v7(),
            name: name.into(),
            target_amount,
            current_amount: Decimal::ZERO,
            target_date,
            monthly_contribution: None,
            category: None,
            created_at,
        }
    }

    /// Creates a goal from a category's default target and horizon
    ///
    /// The target date falls `default_years` after `as_of`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::OutOfRange` if the target date falls past the calendar's end
    pub fn from_category(category: GoalCategory, as_of: NaiveDate) -> Result<Self, ValidationError> {
        let target_date = as_of
            .checked_add_months(Months::new(category.default_years().saturating_mul(12)))
            .ok_or_else(|| {
                ValidationError::out_of_range("target_date", "default horizon runs past the calendar")
            })?;
        Ok(Self::new(category.label(), category.default_target(), target_date, as_of)
            .with_category(category))
    }

    /// Tags the goal with a category
    pub fn with_category(mut self, category: GoalCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the amount already saved
    pub fn with_current_amount(mut self, amount: Decimal) -> Self {
        self.current_amount = amount;
        self
    }

    /// Sets the monthly SIP
    pub fn with_monthly_contribution(mut self, amount: Decimal) -> Self {
        self.monthly_contribution = Some(amount);
        self
    }

    /// Checks the goal's amounts
    ///
    /// # Errors
    ///
    /// - `ValidationError::NotPositive` if the target amount is zero or negative
    /// - `ValidationError::Negative` if the current amount or monthly contribution is negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("target_amount", self.target_amount)?;
        ensure_non_negative("current_amount", self.current_amount)?;
        if let Some(contribution) = self.monthly_contribution {
            ensure_non_negative("monthly_contribution", contribution)?;
        }
        Ok(())
    }

    /// Share of the target already saved, capped at 1
    pub fn progress(&self) -> Decimal {
        if self.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        share_of(self.current_amount, self.target_amount).min(Decimal::ONE)
    }

    /// Whole months from `as_of` to the target date, zero once the date has passed
    pub fn months_remaining(&self, as_of: NaiveDate) -> u32 {
        let months = months_between(as_of, self.target_date).max(0);
        u32::try_from(months).unwrap_or(u32::MAX)
    }

    /// Remaining horizon as years and months ("19 yr 2 mo left")
    pub fn time_remaining(&self, as_of: NaiveDate) -> MonthSpan {
        MonthSpan::from_months(i64::from(self.months_remaining(as_of)))
    }
}
