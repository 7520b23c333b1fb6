//! Indicator error types.

use thiserror::Error;

/// Errors that can occur during indicator computation or registry operations.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// Unknown indicator name requested from registry
    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),

    /// Invalid parameters for the indicator
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A required column is not present in the table
    #[error("missing indicator column: {0}")]
    MissingColumn(String),

    /// A column does not line up with the price bars
    #[error("column {name} has {actual} values, table has {expected} rows")]
    LengthMismatch {
        /// Column name.
        name: String,
        /// Number of bars in the table.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

impl IndicatorError {
    /// Creates an `InvalidParams` error with a message.
    #[must_use]
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        IndicatorError::InvalidParams(msg.into())
    }
}
