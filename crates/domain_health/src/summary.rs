//! Portfolio-level aggregation of holding analyses
//!
//! The composite score is the invested-value-weighted mean of the holdings'
//! overall scores and is classified through the same status table as a
//! single holding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

use core_kernel::{ensure_non_negative, share_of, HoldingId, ValidationError};
use crate::holding::HoldingAnalysis;
use crate::score::{clamp_score, decimal_to_score, score_to_decimal};
use crate::status::{HealthStatus, HealthTrend};

/// Number of holdings in each status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub in_form: usize,
    pub on_track: usize,
    pub off_track: usize,
    pub out_of_form: usize,
}

impl StatusCounts {
    pub fn get(&self, status: HealthStatus) -> usize {
        match status {
            HealthStatus::InForm => self.in_form,
            HealthStatus::OnTrack => self.on_track,
            HealthStatus::OffTrack => self.off_track,
            HealthStatus::OutOfForm => self.out_of_form,
        }
    }

    pub fn record(&mut self, status: HealthStatus) {
        let slot = match status {
            HealthStatus::InForm => &mut self.in_form,
            HealthStatus::OnTrack => &mut self.on_track,
            HealthStatus::OffTrack => &mut self.off_track,
            HealthStatus::OutOfForm => &mut self.out_of_form,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.in_form + self.on_track + self.off_track + self.out_of_form
    }

    /// Holdings in tiers that call for action
    pub fn requiring_action(&self) -> usize {
        HealthStatus::ALL
            .iter()
            .filter(|status| status.requires_action())
            .map(|status| self.get(*status))
            .sum()
    }
}

/// Portfolio-wide health summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_holdings: usize,
    pub status_counts: StatusCounts,
    /// Invested-value-weighted mean of holding scores, in `[0, 100]`
    pub portfolio_health_score: f64,
    pub status: HealthStatus,
    pub health_trend: Option<HealthTrend>,
    pub top_performer: Option<HoldingId>,
    pub worst_performer: Option<HoldingId>,
    pub action_required_count: usize,
}

impl PortfolioSummary {
    /// "Excellent", "Good", "Needs Attention" or "Poor"
    pub fn health_label(&self) -> &'static str {
        self.status.portfolio_label()
    }
}

/// Builds a `PortfolioSummary` from holding analyses
///
/// # Example
///
/// ```rust,ignore
/// let summary = PortfolioSummaryBuilder::new()
///     .with_trend(HealthTrend::Improving)
///     .summarize(&holdings)?;
/// assert_eq!(summary.status_counts.total(), holdings.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioSummaryBuilder {
    trend: Option<HealthTrend>,
}

impl PortfolioSummaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Threads an externally computed trend through to the summary
    pub fn with_trend(mut self, trend: HealthTrend) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Aggregates the holdings
    ///
    /// An empty portfolio, or one with nothing invested, has a composite
    /// score of 0.
    ///
    /// # Errors
    ///
    /// - `ValidationError::Negative` if a holding has a negative invested value
    /// - `ValidationError::NonFinite` if a holding's overall score is NaN or infinite
    pub fn summarize(&self, holdings: &[HoldingAnalysis]) -> Result<PortfolioSummary, ValidationError> {
        let mut status_counts = StatusCounts::default();
        let mut total_invested = Decimal::ZERO;

        for holding in holdings {
            ensure_non_negative("invested_value", holding.invested_value)?;
            clamp_score("overall_score", holding.overall_score)?;
            status_counts.record(holding.status);
            total_invested += holding.invested_value;
        }

        let portfolio_health_score = if total_invested.is_zero() {
            0.0
        } else {
            let mut weighted = Decimal::ZERO;
            for holding in holdings {
                let score = score_to_decimal("overall_score", holding.overall_score)?;
                weighted += share_of(holding.invested_value, total_invested) * score;
            }
            decimal_to_score(weighted)
        };
        let status = HealthStatus::from_score(portfolio_health_score);

        let top_performer = holdings.iter().min_by(|a, b| compare_best_first(a, b)).map(|h| h.holding_id);
        let worst_performer = holdings.iter().min_by(|a, b| compare_worst_first(a, b)).map(|h| h.holding_id);

        debug!(
            total_holdings = holdings.len(),
            portfolio_health_score,
            status = %status,
            "Summarized portfolio"
        );

        Ok(PortfolioSummary {
            total_holdings: holdings.len(),
            status_counts,
            portfolio_health_score,
            status,
            health_trend: self.trend,
            top_performer,
            worst_performer,
            action_required_count: status_counts.requiring_action(),
        })
    }
}

/// Summarizes holdings without a trend tag
pub fn summarize(holdings: &[HoldingAnalysis]) -> Result<PortfolioSummary, ValidationError> {
    PortfolioSummaryBuilder::new().summarize(holdings)
}

/// Best-first order: higher score, then higher invested value, then lower holding id
pub fn compare_best_first(a: &HoldingAnalysis, b: &HoldingAnalysis) -> Ordering {
    b.overall_score
        .total_cmp(&a.overall_score)
        .then_with(|| b.invested_value.cmp(&a.invested_value))
        .then_with(|| a.holding_id.cmp(&b.holding_id))
}

/// Worst-first order: lower score, then higher invested value, then lower holding id
fn compare_worst_first(a: &HoldingAnalysis, b: &HoldingAnalysis) -> Ordering {
    a.overall_score
        .total_cmp(&b.overall_score)
        .then_with(|| b.invested_value.cmp(&a.invested_value))
        .then_with(|| a.holding_id.cmp(&b.holding_id))
}

/// Sorts holdings best first and assigns `rank_in_portfolio` from 1
pub fn rank_holdings(mut holdings: Vec<HoldingAnalysis>) -> Vec<HoldingAnalysis> {
    holdings.sort_by(compare_best_first);
    for (index, holding) in holdings.iter_mut().enumerate() {
        holding.rank_in_portfolio = Some(index + 1);
    }
    holdings
}

/// Groups holdings by status, best status first, preserving input order within a group
pub fn group_by_status(holdings: &[HoldingAnalysis]) -> BTreeMap<HealthStatus, Vec<&HoldingAnalysis>> {
    let mut groups: BTreeMap<HealthStatus, Vec<&HoldingAnalysis>> = BTreeMap::new();
    for holding in holdings {
        groups.entry(holding.status).or_default().push(holding);
    }
    groups
}
