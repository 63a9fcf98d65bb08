//! Portfolio Engine Facade
//!
//! Wires the domain crates together behind [`PortfolioEngine`], loads
//! [`EngineConfig`] from the environment and sets up tracing.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_engine::{EngineConfig, PortfolioEngine, telemetry};
//!
//! let config = EngineConfig::from_env()?;
//! telemetry::init_tracing(&config);
//! let engine = PortfolioEngine::new(config)?;
//! let outcomes = engine.score_clients(snapshots);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod service;
pub mod telemetry;

pub use config::EngineConfig;
pub use error::EngineError;
pub use report::{ClientOutcome, ClientSnapshot, PortfolioHealthReport};
pub use service::PortfolioEngine;
