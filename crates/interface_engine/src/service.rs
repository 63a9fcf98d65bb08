//! Engine facade over the domain crates

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use core_kernel::{ClientId, Rate, ValidationError};
use domain_family::{FamilyAggregator, FamilyMember, FamilyPortfolio};
use domain_goal::{required_monthly_contribution, Goal, GoalProjection, GoalProjector};
use domain_health::{
    analyze_holding, rank_holdings, AnalyzeHoldingInput, HealthTrend, HoldingAnalysis,
    PortfolioSummaryBuilder,
};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::report::{ClientSnapshot, PortfolioHealthReport};

/// Stateless entry point holding the engine's configured assumptions
#[derive(Debug, Clone)]
pub struct PortfolioEngine {
    config: EngineConfig,
    projector: GoalProjector,
}

impl Default for PortfolioEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        let projector = GoalProjector::new(config.default_annual_return);
        Self { config, projector }
    }
}

impl PortfolioEngine {
    /// Creates an engine from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Validation` if the default annual return is at or below -100%.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let projector = GoalProjector::new(config.default_annual_return);
        Ok(Self { config, projector })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scores and classifies a single holding
    #[instrument(skip(self, input), fields(holding_id = %input.holding_id))]
    pub fn analyze_holding(&self, input: AnalyzeHoldingInput) -> Result<HoldingAnalysis, ValidationError> {
        analyze_holding(input)
    }

    /// Analyses every holding, summarises them and ranks them best-first
    ///
    /// The first invalid holding fails the whole portfolio.
    #[instrument(skip(self, inputs), fields(client_id = %client_id, holdings = inputs.len()))]
    pub fn analyze_portfolio(
        &self,
        client_id: ClientId,
        as_of: NaiveDate,
        inputs: Vec<AnalyzeHoldingInput>,
        trend: Option<HealthTrend>,
    ) -> Result<PortfolioHealthReport, ValidationError> {
        let analyses = inputs
            .into_iter()
            .map(analyze_holding)
            .collect::<Result<Vec<_>, _>>()?;

        let builder = match trend {
            Some(trend) => PortfolioSummaryBuilder::new().with_trend(trend),
            None => PortfolioSummaryBuilder::new(),
        };
        let summary = builder.summarize(&analyses)?;

        info!(
            score = summary.portfolio_health_score,
            status = %summary.status,
            action_required = summary.action_required_count,
            "portfolio analysed"
        );

        Ok(PortfolioHealthReport {
            client_id,
            as_of,
            summary,
            holdings: rank_holdings(analyses),
        })
    }

    /// Projects a goal at the configured default return
    #[instrument(skip(self, goal), fields(goal_id = %goal.id))]
    pub fn project_goal(&self, goal: &Goal, as_of: NaiveDate) -> Result<GoalProjection, ValidationError> {
        self.projector.project(goal, as_of)
    }

    /// Projects a goal at an explicit annual return
    #[instrument(skip(self, goal), fields(goal_id = %goal.id, rate = %annual_return))]
    pub fn project_goal_with(
        &self,
        goal: &Goal,
        as_of: NaiveDate,
        annual_return: Rate,
    ) -> Result<GoalProjection, ValidationError> {
        GoalProjector::new(annual_return)
            .with_horizon(self.projector.horizon())
            .project(goal, as_of)
    }

    /// Monthly SIP that would reach the goal's target from its current corpus
    #[instrument(skip(self, goal), fields(goal_id = %goal.id))]
    pub fn required_contribution(&self, goal: &Goal, as_of: NaiveDate) -> Result<Decimal, ValidationError> {
        goal.validate()?;
        required_monthly_contribution(
            goal.target_amount,
            goal.current_amount,
            goal.months_remaining(as_of),
            self.config.default_annual_return,
        )
    }

    /// Rolls linked members up into a household composite
    #[instrument(skip(self, members), fields(members = members.len()))]
    pub fn aggregate_family(&self, members: &[FamilyMember]) -> Result<FamilyPortfolio, ValidationError> {
        FamilyAggregator::new().aggregate(members)
    }

    /// Scores each client independently; one client's bad data never affects another
    #[instrument(skip(self, snapshots), fields(clients = snapshots.len()))]
    pub fn score_clients(
        &self,
        snapshots: Vec<ClientSnapshot>,
    ) -> Vec<(ClientId, Result<PortfolioHealthReport, ValidationError>)> {
        snapshots
            .into_iter()
            .map(|snapshot| {
                let client_id = snapshot.client_id;
                let result =
                    self.analyze_portfolio(client_id, snapshot.as_of, snapshot.holdings, snapshot.trend);
                if let Err(error) = &result {
                    warn!(client_id = %client_id, error = %error, "client rejected");
                }
                (client_id, result)
            })
            .collect()
    }
}
