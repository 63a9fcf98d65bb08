//! Portfolio Engine - Batch Scoring Binary
//!
//! Reads a JSON array of client snapshots and writes one outcome per client
//! to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Score snapshots from a file
//! cargo run --bin portfolio-engine -- snapshots.json
//!
//! # Or from stdin, with JSON logs
//! ENGINE_LOG_JSON=true cargo run --bin portfolio-engine < snapshots.json
//! ```
//!
//! # Environment Variables
//!
//! * `ENGINE_DEFAULT_ANNUAL_RETURN` - Return assumed for goal projections (default: 0.12)
//! * `ENGINE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `ENGINE_LOG_JSON` - Emit JSON log lines (default: false)

use std::io::{self, Read, Write};

use anyhow::Context;

use interface_engine::{telemetry, ClientOutcome, ClientSnapshot, EngineConfig, PortfolioEngine};

fn main() -> anyhow::Result<()> {
    let config = EngineConfig::from_env().context("loading engine configuration")?;
    telemetry::init_tracing(&config);

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading snapshots from stdin")?;
            buffer
        }
    };

    let snapshots: Vec<ClientSnapshot> =
        serde_json::from_str(&input).context("parsing client snapshots")?;

    tracing::info!(clients = snapshots.len(), "Scoring client portfolios");

    let engine = PortfolioEngine::new(config)?;
    let outcomes: Vec<ClientOutcome> = engine
        .score_clients(snapshots)
        .into_iter()
        .map(|(client_id, result)| ClientOutcome::from_result(client_id, result))
        .collect();

    let rejected = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, ClientOutcome::Rejected { .. }))
        .count();
    tracing::info!(scored = outcomes.len() - rejected, rejected, "Scoring complete");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, &outcomes).context("writing outcomes")?;
    writeln!(handle)?;
    Ok(())
}
