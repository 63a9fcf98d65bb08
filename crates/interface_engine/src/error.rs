//! Engine error handling

use thiserror::Error;

use core_kernel::ValidationError;

/// Errors surfaced by the engine facade
///
/// Domain operations only ever fail with [`ValidationError`]; `Config`
/// comes from setting the engine up.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl EngineError {
    /// Short machine-readable kind, used in batch output
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "validation_error",
            EngineError::Config(_) => "config_error",
        }
    }
}
