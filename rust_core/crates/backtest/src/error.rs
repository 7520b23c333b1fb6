//! Backtest error types.

use hedge_types::{CoreError, ErrorResult};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur during pipeline orchestration.
#[derive(Debug, Error)]
pub enum BacktestError {
    /// JSON config parse error
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Config validation error
    #[error("config validation error: {0}")]
    ConfigValidation(String),

    /// Result serialization error
    #[error("result serialization error: {0}")]
    ResultSerialize(String),

    /// Data loading or validation error
    #[error("data error: {0}")]
    Data(#[from] hedge_data::DataError),

    /// Indicator computation error
    #[error("indicator error: {0}")]
    Indicator(#[from] hedge_indicators::IndicatorError),

    /// Signal rule error
    #[error("strategy error: {0}")]
    Strategy(#[from] hedge_strategy::StrategyError),

    /// Not enough rows to simulate
    #[error("insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Required number of bars
        required: usize,
        /// Available number of bars
        available: usize,
    },

    /// Price and signal series differ in length
    #[error("length mismatch: {prices} price bars, {signals} signals")]
    LengthMismatch {
        /// Number of price bars
        prices: usize,
        /// Number of signals
        signals: usize,
    },

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl BacktestError {
    /// Returns true if this is a config parse/validation error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BacktestError::ConfigParse(_) | BacktestError::ConfigValidation(_)
        )
    }

    /// Returns the error category for the output contract.
    /// Categories: `config`, `market_data`, `runtime`
    #[must_use]
    pub fn error_category(&self) -> &'static str {
        match self {
            // Invalid parameters, wherever they were detected
            BacktestError::ConfigParse(_)
            | BacktestError::ConfigValidation(_)
            | BacktestError::Strategy(_)
            | BacktestError::Indicator(hedge_indicators::IndicatorError::InvalidParams(_)) => {
                "config"
            }

            BacktestError::Data(_)
            | BacktestError::InsufficientData { .. }
            | BacktestError::LengthMismatch { .. } => "market_data",

            BacktestError::Indicator(_)
            | BacktestError::ResultSerialize(_)
            | BacktestError::Io(_) => "runtime",
        }
    }
}

impl From<CoreError> for BacktestError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Json(e) => BacktestError::ConfigParse(e.to_string()),
            CoreError::Config(msg) => BacktestError::ConfigValidation(msg),
        }
    }
}

impl From<BacktestError> for ErrorResult {
    fn from(err: BacktestError) -> Self {
        let details = match &err {
            BacktestError::InsufficientData {
                required,
                available,
            } => json!({ "required": required, "available": available }),
            BacktestError::LengthMismatch { prices, signals } => {
                json!({ "prices": prices, "signals": signals })
            }
            _ => json!({}),
        };
        Self {
            category: err.error_category().to_string(),
            message: err.to_string(),
            details,
        }
    }
}
