//! Hedge Data
//!
//! Price table ingestion (Parquet and EOD-style JSON rows) and validation.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Data-layer error types.
pub mod error;
/// EOD-style JSON row parsing.
pub mod json;
/// Parquet loading and format dispatch.
pub mod loader;
/// Price table contract checks.
pub mod validation;

/// Re-export: data-layer error type.
pub use error::DataError;
/// Re-export: parse JSON rows into price bars.
pub use json::parse_price_bars_json;
/// Re-export: load price bars from Parquet.
pub use loader::load_price_bars;
/// Re-export: load and validate a price table by extension.
pub use loader::load_price_table;
/// Re-export: price table validation.
pub use validation::validate_price_bars;
