//! Holding Health Domain
//!
//! This crate classifies fund holdings into a four-tier health state and
//! rolls holdings up into a portfolio summary.
//!
//! # Key Concepts
//!
//! - **Sub-scores**: returns, risk, consistency and momentum, each in `[0, 100]`
//! - **Overall score**: `0.40*returns + 0.25*risk + 0.20*consistency + 0.15*momentum`
//! - **Health status**: `InForm >= 75 > OnTrack >= 50 > OffTrack >= 25 > OutOfForm`
//! - **Portfolio summary**: status counts, invested-value-weighted composite score,
//!   top and worst performers, and the number of holdings needing action
//!
//! Every operation is a pure function over its inputs and returns a fresh record.

pub mod status;
pub mod score;
pub mod holding;
pub mod summary;

pub use status::{HealthStatus, HealthTrend, StatusInfo, STATUS_TABLE};
pub use score::{classify, clamp_score, Classification, ScoreWeights, SubScores, SCORE_WEIGHTS, MAX_SCORE, MIN_SCORE};
pub use holding::{analyze_holding, AnalyzeHoldingInput, HoldingAnalysis};
pub use summary::{
    compare_best_first, group_by_status, rank_holdings, summarize, PortfolioSummary,
    PortfolioSummaryBuilder, StatusCounts,
};
pub use core_kernel::ValidationError;
