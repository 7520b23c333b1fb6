//! Warmup trimming helpers.

use hedge_indicators::IndicatorTable;

use crate::error::BacktestError;

/// Drops the leading rows in which any of `required` is undefined.
///
/// Returns the trimmed table and the number of dropped rows.
///
/// # Errors
/// Returns [`BacktestError::InsufficientData`] when no row is fully defined,
/// and [`BacktestError::Indicator`] when a column is missing.
pub fn trim_warmup(
    table: &IndicatorTable,
    required: &[String],
) -> Result<(IndicatorTable, usize), BacktestError> {
    let first = table
        .first_complete_row(required)?
        .ok_or(BacktestError::InsufficientData {
            required: 1,
            available: 0,
        })?;

    tracing::info!(
        "Warmup validated: {} rows dropped, {} of {} rows simulated",
        first,
        table.len() - first,
        table.len()
    );

    Ok((table.slice_from(first), first))
}
