//! Per-holding analysis
//!
//! Turns a raw `AnalyzeHoldingInput` into a `HoldingAnalysis`: validated
//! amounts, classified scores, status text from the status table, and gain
//! figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ensure_non_negative, percentage_of, HoldingId, ValidationError};
use crate::score::{classify, SubScores};
use crate::status::HealthStatus;

/// Raw input for analysing one holding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeHoldingInput {
    pub holding_id: HoldingId,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    pub sub_scores: SubScores,
    /// Free-text insights from upstream, passed through untouched
    #[serde(default)]
    pub insights: Vec<String>,
}

impl AnalyzeHoldingInput {
    pub fn new(
        holding_id: HoldingId,
        invested_value: Decimal,
        current_value: Decimal,
        sub_scores: SubScores,
    ) -> Self {
        Self {
            holding_id,
            invested_value,
            current_value,
            sub_scores,
            insights: Vec::new(),
        }
    }

    pub fn with_insights(mut self, insights: Vec<String>) -> Self {
        self.insights = insights;
        self
    }
}

/// Health analysis of a single holding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingAnalysis {
    pub holding_id: HoldingId,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    /// Sub-scores after clamping
    pub sub_scores: SubScores,
    pub overall_score: f64,
    pub status: HealthStatus,
    pub status_label: String,
    pub status_description: String,
    pub action_hint: String,
    pub insights: Vec<String>,
    /// Current value minus invested value
    pub absolute_gain: Decimal,
    /// Gain as a percentage of invested value, 0 when nothing is invested
    pub absolute_gain_percent: Decimal,
    /// 1-based position in best-first order, set by `rank_holdings`
    pub rank_in_portfolio: Option<usize>,
}

impl HoldingAnalysis {
    /// Whether the holding is off-track or out-of-form
    pub fn requires_action(&self) -> bool {
        self.status.requires_action()
    }
}

/// Analyses one holding
///
/// # Errors
///
/// - `ValidationError::Negative` if the invested or current value is negative
/// - `ValidationError::NonFinite` if any sub-score is NaN or infinite
pub fn analyze_holding(input: AnalyzeHoldingInput) -> Result<HoldingAnalysis, ValidationError> {
    let invested_value = ensure_non_negative("invested_value", input.invested_value)?;
    let current_value = ensure_non_negative("current_value", input.current_value)?;
    let classification = classify(&input.sub_scores)?;

    let absolute_gain = current_value - invested_value;
    let status = classification.status;
    let info = status.info();

    Ok(HoldingAnalysis {
        holding_id: input.holding_id,
        invested_value,
        current_value,
        sub_scores: classification.sub_scores,
        overall_score: classification.overall_score,
        status,
        status_label: info.label.to_string(),
        status_description: info.description.to_string(),
        action_hint: info.action_hint.to_string(),
        insights: input.insights,
        absolute_gain,
        absolute_gain_percent: percentage_of(absolute_gain, invested_value).round_dp(2),
        rank_in_portfolio: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_analyze_in_form_holding() {
        let input = AnalyzeHoldingInput::new(
            HoldingId::new(),
            dec!(100000),
            dec!(125000),
            SubScores::new(95.0, 88.0, 91.0, 90.0),
        )
        .with_insights(vec!["Beating category average".to_string()]);

        let analysis = analyze_holding(input).unwrap();

        assert_eq!(analysis.status, HealthStatus::InForm);
        assert_eq!(analysis.status_label, "In-form");
        assert_eq!(analysis.action_hint, "Continue investing");
        assert_eq!(analysis.absolute_gain, dec!(25000));
        assert_eq!(analysis.absolute_gain_percent, dec!(25));
        assert_eq!(analysis.insights.len(), 1);
        assert!(analysis.rank_in_portfolio.is_none());
        assert!(!analysis.requires_action());
    }

    #[test]
    fn test_zero_invested_has_zero_gain_percent() {
        let input = AnalyzeHoldingInput::new(
            HoldingId::new(),
            Decimal::ZERO,
            dec!(500),
            SubScores::uniform(60.0),
        );

        let analysis = analyze_holding(input).unwrap();
        assert_eq!(analysis.absolute_gain, dec!(500));
        assert_eq!(analysis.absolute_gain_percent, Decimal::ZERO);
    }

    #[test]
    fn test_negative_amounts_are_rejected() {
        let input = AnalyzeHoldingInput::new(
            HoldingId::new(),
            dec!(-1),
            dec!(500),
            SubScores::uniform(60.0),
        );
        assert!(matches!(
            analyze_holding(input),
            Err(ValidationError::Negative { field: "invested_value", .. })
        ));
    }

    #[test]
    fn test_insights_default_when_absent_from_json() {
        let json = r#"{
            "holding_id": "00000000-0000-0000-0000-000000000001",
            "invested_value": "1000",
            "current_value": "900",
            "sub_scores": {"returns": 32.0, "risk": 45.0, "consistency": 40.0, "momentum": 30.0}
        }"#;
        let input: AnalyzeHoldingInput = serde_json::from_str(json).unwrap();
        assert!(input.insights.is_empty());

        let analysis = analyze_holding(input).unwrap();
        assert_eq!(analysis.status, HealthStatus::OffTrack);
        assert_eq!(analysis.absolute_gain_percent, dec!(-10));
    }
}
