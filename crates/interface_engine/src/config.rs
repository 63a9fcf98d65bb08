//! Engine configuration

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use core_kernel::Rate;

use crate::error::EngineError;

/// Environment variable prefix, e.g. `ENGINE_DEFAULT_ANNUAL_RETURN`
pub const ENV_PREFIX: &str = "ENGINE";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Annual return assumed when a goal is projected without an explicit rate
    pub default_annual_return: Rate,
    /// Log filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub log_json: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_annual_return: Rate::new(Decimal::new(12, 2)),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from `ENGINE_*` variables, reading `.env` first if present
    pub fn from_env() -> Result<Self, EngineError> {
        dotenvy::dotenv().ok();
        Self::load(None)
    }

    /// Loads configuration from an explicit variable map instead of the process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, EngineError> {
        Self::load(Some(vars))
    }

    fn load(vars: Option<HashMap<String, String>>) -> Result<Self, EngineError> {
        let config: EngineConfig = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(vars))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a default return at or below -100%
    pub fn validate(&self) -> Result<(), EngineError> {
        self.default_annual_return
            .ensure_compoundable("default_annual_return")?;
        Ok(())
    }
}
