//! Error handling for the group-formation engine
//!
//! Parcels that cannot be grouped are data, not errors; only caller
//! contract violations and configuration faults surface here.

use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    /// Grouping parameters violate the min ≤ max contract or contain
    /// out-of-range values.
    #[error("Invalid grouping parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

/// Result type alias for the engine
pub type EngineResult<T> = Result<T, EngineError>;
