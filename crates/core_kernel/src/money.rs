//! Decimal amount helpers and rates
//!
//! Monetary amounts are plain `Decimal` values; this module holds the guards
//! and ratio helpers every aggregate needs, so that no division in the engine
//! can produce a panic or a meaningless result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Decimal places used for reported currency amounts
pub const CURRENCY_PRECISION: u32 = 2;

/// Rounds an amount to currency precision (half away from zero)
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_PRECISION,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Rounds an amount up to the next whole cent
///
/// Used for amounts someone must pay to close a gap, so that paying the
/// rounded figure never leaves the gap open.
pub fn round_currency_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_PRECISION,
        rust_decimal::RoundingStrategy::ToPositiveInfinity,
    )
}

/// Returns `part / whole`, or zero when `whole` is zero
pub fn share_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part / whole
}

/// Returns `part / whole * 100`, or zero when `whole` is zero
///
/// # Example
///
/// ```rust
/// use core_kernel::percentage_of;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(percentage_of(dec!(25), dec!(200)), dec!(12.5));
/// assert_eq!(percentage_of(dec!(25), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    share_of(part, whole) * dec!(100)
}

/// Rejects negative amounts; money is never clamped
pub fn ensure_non_negative(field: &'static str, amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::negative(field, amount));
    }
    Ok(amount)
}

/// Rejects zero and negative amounts
pub fn ensure_positive(field: &'static str, amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::not_positive(field, amount));
    }
    Ok(amount)
}

/// A rate of return expressed as a decimal fraction (e.g. 0.12 for 12%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.12 for 12%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 12.0 for 12%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Zero rate of return
    pub fn zero() -> Self {
        Self { value: Decimal::ZERO }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value.saturating_mul(dec!(100))
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Nominal monthly rate (annual / 12)
    pub fn monthly(&self) -> Rate {
        Rate::new(self.value / dec!(12))
    }

    /// One period of growth: `1 + rate`
    pub fn growth_factor(&self) -> Decimal {
        Decimal::ONE.saturating_add(self.value)
    }

    /// Rejects rates at or below -100%, for which compounding is undefined,
    /// and rates whose growth factor does not fit in a `Decimal`
    pub fn ensure_compoundable(self, field: &'static str) -> Result<Self, ValidationError> {
        if self.value <= Decimal::NEGATIVE_ONE {
            return Err(ValidationError::out_of_range(
                field,
                format!("rate {} must be greater than -100%", self),
            ));
        }
        if self.value.checked_add(Decimal::ONE).is_none() {
            return Err(ValidationError::out_of_range(field, "rate exceeds the representable range"));
        }
        Ok(self)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}
