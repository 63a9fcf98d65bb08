//! Sub-score aggregation
//!
//! A holding is scored on four axes (returns, risk, consistency, momentum),
//! each an estimate in `[0, 100]`. The overall score is a fixed weighted sum
//! that is then classified through the status table.
//!
//! # Leniency
//!
//! Sub-scores come from upstream estimation and may drift slightly outside
//! their range. Finite out-of-range values are clamped to `[0, 100]` and
//! logged; only non-finite values are rejected. Monetary inputs elsewhere in
//! the engine are never clamped.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::ValidationError;
use crate::status::HealthStatus;

/// Lowest valid score
pub const MIN_SCORE: f64 = 0.0;
/// Highest valid score
pub const MAX_SCORE: f64 = 100.0;

/// The four sub-scores of a holding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub returns: f64,
    pub risk: f64,
    pub consistency: f64,
    pub momentum: f64,
}

impl SubScores {
    pub fn new(returns: f64, risk: f64, consistency: f64, momentum: f64) -> Self {
        Self {
            returns,
            risk,
            consistency,
            momentum,
        }
    }

    /// The same score on every axis
    pub fn uniform(score: f64) -> Self {
        Self::new(score, score, score, score)
    }

    /// Returns a copy with every sub-score clamped into `[0, 100]`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonFinite` naming the first NaN or infinite sub-score
    pub fn clamped(&self) -> Result<SubScores, ValidationError> {
        Ok(SubScores {
            returns: clamp_score("returns", self.returns)?,
            risk: clamp_score("risk", self.risk)?,
            consistency: clamp_score("consistency", self.consistency)?,
            momentum: clamp_score("momentum", self.momentum)?,
        })
    }
}

/// Weight of each sub-score in the overall score
///
/// Weights are decimal so the weighted sum of whole-number sub-scores is
/// exact and lands on tier thresholds without float drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub returns: Decimal,
    pub risk: Decimal,
    pub consistency: Decimal,
    pub momentum: Decimal,
}

/// Fixed sub-score weights; they sum to 1
pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    returns: dec!(0.40),
    risk: dec!(0.25),
    consistency: dec!(0.20),
    momentum: dec!(0.15),
};

impl ScoreWeights {
    pub fn total(&self) -> Decimal {
        self.returns + self.risk + self.consistency + self.momentum
    }

    /// Weighted sum of the given sub-scores
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonFinite` naming the first sub-score that is NaN or infinite
    pub fn apply(&self, scores: &SubScores) -> Result<Decimal, ValidationError> {
        Ok(self.returns * score_to_decimal("returns", scores.returns)?
            + self.risk * score_to_decimal("risk", scores.risk)?
            + self.consistency * score_to_decimal("consistency", scores.consistency)?
            + self.momentum * score_to_decimal("momentum", scores.momentum)?)
    }
}

/// Result of classifying a set of sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Sub-scores after clamping
    pub sub_scores: SubScores,
    pub overall_score: f64,
    pub status: HealthStatus,
}

/// Combines sub-scores into an overall score and classifies it
///
/// # Errors
///
/// Returns `ValidationError::NonFinite` if any sub-score is NaN or infinite
///
/// # Example
///
/// ```rust
/// use domain_health::{classify, HealthStatus, SubScores};
///
/// let result = classify(&SubScores::new(95.0, 88.0, 91.0, 90.0)).unwrap();
/// assert!((result.overall_score - 91.7).abs() < 1e-9);
/// assert_eq!(result.status, HealthStatus::InForm);
/// ```
pub fn classify(sub_scores: &SubScores) -> Result<Classification, ValidationError> {
    let sub_scores = sub_scores.clamped()?;
    let overall_score = decimal_to_score(SCORE_WEIGHTS.apply(&sub_scores)?);
    let status = HealthStatus::from_score(overall_score);

    debug!(overall_score, status = %status, "Classified sub-scores");

    Ok(Classification {
        sub_scores,
        overall_score,
        status,
    })
}

/// Validates a single score and clamps it into `[0, 100]`
pub fn clamp_score(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::non_finite(field));
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        warn!(field, value, "Sub-score outside [0, 100], clamping");
    }
    Ok(normalize_score(value))
}

pub(crate) fn score_to_decimal(field: &'static str, value: f64) -> Result<Decimal, ValidationError> {
    Decimal::from_f64(value).ok_or_else(|| ValidationError::non_finite(field))
}

/// Nearest `f64` to an exact decimal score, clamped into `[0, 100]`
pub(crate) fn decimal_to_score(value: Decimal) -> f64 {
    normalize_score(value.to_f64().unwrap_or(MIN_SCORE))
}

/// Clamps into `[0, 100]`; adding zero turns -0.0 into 0.0
pub(crate) fn normalize_score(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE) + 0.0
}
