//! Engine input and output records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{ClientId, ValidationError};
use domain_health::{AnalyzeHoldingInput, HealthStatus, HealthTrend, HoldingAnalysis, PortfolioSummary};

/// Everything needed to score one client's portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSnapshot {
    pub client_id: ClientId,
    pub as_of: NaiveDate,
    pub holdings: Vec<AnalyzeHoldingInput>,
    #[serde(default)]
    pub trend: Option<HealthTrend>,
}

impl ClientSnapshot {
    pub fn new(client_id: ClientId, as_of: NaiveDate, holdings: Vec<AnalyzeHoldingInput>) -> Self {
        Self {
            client_id,
            as_of,
            holdings,
            trend: None,
        }
    }

    pub fn with_trend(mut self, trend: HealthTrend) -> Self {
        self.trend = Some(trend);
        self
    }
}

/// A scored portfolio with its holdings ranked best-first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHealthReport {
    pub client_id: ClientId,
    pub as_of: NaiveDate,
    pub summary: PortfolioSummary,
    pub holdings: Vec<HoldingAnalysis>,
}

impl PortfolioHealthReport {
    pub fn status(&self) -> HealthStatus {
        self.summary.status
    }

    /// Holdings whose status calls for a review or exit, worst first
    pub fn action_items(&self) -> impl Iterator<Item = &HoldingAnalysis> {
        self.holdings.iter().rev().filter(|h| h.requires_action())
    }
}

/// Serialisable form of one client's batch result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClientOutcome {
    Scored(PortfolioHealthReport),
    Rejected { client_id: ClientId, error: String },
}

impl ClientOutcome {
    pub fn from_result(client_id: ClientId, result: Result<PortfolioHealthReport, ValidationError>) -> Self {
        match result {
            Ok(report) => ClientOutcome::Scored(report),
            Err(error) => ClientOutcome::Rejected {
                client_id,
                error: error.to_string(),
            },
        }
    }

    pub fn client_id(&self) -> ClientId {
        match self {
            ClientOutcome::Scored(report) => report.client_id,
            ClientOutcome::Rejected { client_id, .. } => *client_id,
        }
    }
}
