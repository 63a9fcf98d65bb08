//! Health status tiers and their display table
//!
//! Every per-status fact (score threshold, label, description, action hint,
//! portfolio label, whether action is required) lives in `STATUS_TABLE`.
//! Adding a tier means adding a variant and one table row.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-tier health classification of a holding or portfolio
///
/// Variants are declared best first, so the derived ordering sorts
/// `InForm` before `OutOfForm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Performing great
    InForm,
    /// Performing good
    OnTrack,
    /// Underperforming, stop adding money
    OffTrack,
    /// Persistently poor, exit candidate
    OutOfForm,
}

/// One row of the status table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusInfo {
    pub status: HealthStatus,
    /// Inclusive lower bound of the overall score for this tier
    pub min_score: f64,
    pub label: &'static str,
    pub description: &'static str,
    pub action_hint: &'static str,
    /// Label used when the status describes a whole portfolio
    pub portfolio_label: &'static str,
    /// Whether holdings in this tier count towards `action_required_count`
    pub requires_action: bool,
}

/// Status table, best tier first, in `HealthStatus` declaration order
pub const STATUS_TABLE: [StatusInfo; 4] = [
    StatusInfo {
        status: HealthStatus::InForm,
        min_score: 75.0,
        label: "In-form",
        description: "Performing great",
        action_hint: "Continue investing",
        portfolio_label: "Excellent",
        requires_action: false,
    },
    StatusInfo {
        status: HealthStatus::OnTrack,
        min_score: 50.0,
        label: "On-track",
        description: "Performing good",
        action_hint: "Hold / invest more",
        portfolio_label: "Good",
        requires_action: false,
    },
    StatusInfo {
        status: HealthStatus::OffTrack,
        min_score: 25.0,
        label: "Off-track",
        description: "Don't invest further",
        action_hint: "Review and monitor",
        portfolio_label: "Needs Attention",
        requires_action: true,
    },
    StatusInfo {
        status: HealthStatus::OutOfForm,
        min_score: f64::NEG_INFINITY,
        label: "Out-of-form",
        description: "Exit now",
        action_hint: "Consider exiting",
        portfolio_label: "Poor",
        requires_action: true,
    },
];

impl HealthStatus {
    /// All statuses, best first
    pub const ALL: [HealthStatus; 4] = [
        HealthStatus::InForm,
        HealthStatus::OnTrack,
        HealthStatus::OffTrack,
        HealthStatus::OutOfForm,
    ];

    /// Classifies an overall score using inclusive lower bounds, top-down
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_health::HealthStatus;
    ///
    /// assert_eq!(HealthStatus::from_score(75.0), HealthStatus::InForm);
    /// assert_eq!(HealthStatus::from_score(74.999), HealthStatus::OnTrack);
    /// ```
    pub fn from_score(score: f64) -> Self {
        STATUS_TABLE
            .iter()
            .find(|row| score >= row.min_score)
            .map_or(HealthStatus::OutOfForm, |row| row.status)
    }

    /// Table row for this status
    pub fn info(&self) -> &'static StatusInfo {
        &STATUS_TABLE[self.sort_order()]
    }

    /// Position in desirability order (0 = best)
    pub fn sort_order(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn description(&self) -> &'static str {
        self.info().description
    }

    pub fn action_hint(&self) -> &'static str {
        self.info().action_hint
    }

    pub fn portfolio_label(&self) -> &'static str {
        self.info().portfolio_label
    }

    pub fn requires_action(&self) -> bool {
        self.info().requires_action
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of portfolio health over time, supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTrend {
    Improving,
    Stable,
    Declining,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_follow_declaration_order() {
        for (index, status) in HealthStatus::ALL.iter().enumerate() {
            assert_eq!(STATUS_TABLE[index].status, *status);
            assert_eq!(status.sort_order(), index);
        }
    }

    #[test]
    fn test_thresholds_descend() {
        for pair in STATUS_TABLE.windows(2) {
            assert!(pair[0].min_score > pair[1].min_score);
        }
    }

    #[test]
    fn test_sampled_scores() {
        for score in [92.0, 87.0, 83.0] {
            assert_eq!(HealthStatus::from_score(score), HealthStatus::InForm);
        }
        for score in [72.0, 68.0] {
            assert_eq!(HealthStatus::from_score(score), HealthStatus::OnTrack);
        }
        assert_eq!(HealthStatus::from_score(38.0), HealthStatus::OffTrack);
        assert_eq!(HealthStatus::from_score(22.0), HealthStatus::OutOfForm);
    }

    #[test]
    fn test_nan_falls_to_lowest_tier() {
        assert_eq!(HealthStatus::from_score(f64::NAN), HealthStatus::OutOfForm);
    }

    #[test]
    fn test_action_hints() {
        assert_eq!(HealthStatus::InForm.action_hint(), "Continue investing");
        assert_eq!(HealthStatus::OutOfForm.action_hint(), "Consider exiting");
        assert!(!HealthStatus::OnTrack.requires_action());
        assert!(HealthStatus::OffTrack.requires_action());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&HealthStatus::OutOfForm).unwrap();
        assert_eq!(json, "\"out_of_form\"");
        let parsed: HealthTrend = serde_json::from_str("\"declining\"").unwrap();
        assert_eq!(parsed, HealthTrend::Declining);
    }
}
