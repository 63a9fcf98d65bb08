//! Validation errors shared by every engine operation
//!
//! The engine performs no I/O, so malformed input is the only way an
//! operation can fail.

use rust_decimal::Decimal;
use thiserror::Error;

/// Out-of-contract numeric input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: Decimal },

    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

impl ValidationError {
    pub fn non_finite(field: &'static str) -> Self {
        ValidationError::NonFinite { field }
    }

    pub fn negative(field: &'static str, value: Decimal) -> Self {
        ValidationError::Negative { field, value }
    }

    pub fn not_positive(field: &'static str, value: Decimal) -> Self {
        ValidationError::NotPositive { field, value }
    }

    pub fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonFinite { field }
            | ValidationError::Negative { field, .. }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}
