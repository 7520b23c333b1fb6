//! Strategy error types

use hedge_indicators::IndicatorError;
use thiserror::Error;

/// Strategy-specific errors
#[derive(Debug, Error)]
pub enum StrategyError {
    /// Unknown strategy name in registry
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Invalid strategy parameters
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Required indicator column missing from the table
    #[error("Missing indicator: {0}")]
    MissingIndicator(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<IndicatorError> for StrategyError {
    fn from(err: IndicatorError) -> Self {
        match err {
            IndicatorError::MissingColumn(name) => StrategyError::MissingIndicator(name),
            other => StrategyError::InvalidParams(other.to_string()),
        }
    }
}
