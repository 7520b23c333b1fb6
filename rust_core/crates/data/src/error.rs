//! Data-layer error types.

use thiserror::Error;

/// Errors that can occur while loading or validating a price table.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required file was not found on disk.
    #[error("File not found: {0} ({1})")]
    FileNotFound(String, String),

    /// Parquet or JSON parsing/decoding failed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A required column is missing.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A column has an unexpected data type.
    #[error("Invalid column type: {0}")]
    InvalidColumnType(String),

    /// The file extension does not map to a known table format.
    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),

    /// No rows were loaded after reading data.
    #[error("Empty data")]
    EmptyData,

    /// Data violated a table contract rule.
    #[error("Corrupt data: {0}")]
    CorruptData(String),
}
