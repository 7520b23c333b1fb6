//! Price table contract checks.

use crate::error::DataError;
use hedge_types::PriceBar;

/// Validates a price table before it enters the pipeline.
///
/// Gaps between dates are accepted; only ordering is enforced.
///
/// # Errors
/// - [`DataError::EmptyData`] when `bars` is empty.
/// - [`DataError::CorruptData`] when a row violates the table contract.
pub fn validate_price_bars(bars: &[PriceBar]) -> Result<(), DataError> {
    if bars.is_empty() {
        return Err(DataError::EmptyData);
    }

    for (i, bar) in bars.iter().enumerate() {
        if !bar.open.is_finite()
            || !bar.high.is_finite()
            || !bar.low.is_finite()
            || !bar.close.is_finite()
            || !bar.adjusted_close.is_finite()
            || !bar.volume.is_finite()
        {
            return Err(DataError::CorruptData(format!(
                "NaN/Inf at index {i}: {bar:?}"
            )));
        }

        if bar.open <= 0.0 || bar.high <= 0.0 || bar.low <= 0.0 || bar.close <= 0.0 {
            return Err(DataError::CorruptData(format!(
                "Non-positive price at index {i}: open={}, high={}, low={}, close={}",
                bar.open, bar.high, bar.low, bar.close
            )));
        }

        if bar.adjusted_close <= 0.0 {
            return Err(DataError::CorruptData(format!(
                "Non-positive adjusted_close at index {i}: {}",
                bar.adjusted_close
            )));
        }

        if bar.volume < 0.0 {
            return Err(DataError::CorruptData(format!(
                "Negative volume at index {i}: {}",
                bar.volume
            )));
        }

        if bar.low > bar.open || bar.low > bar.close || bar.high < bar.open || bar.high < bar.close
        {
            return Err(DataError::CorruptData(format!(
                "Invalid OHLC at index {i}: low={}, high={}, open={}, close={}",
                bar.low, bar.high, bar.open, bar.close
            )));
        }

        if i > 0 && bar.date <= bars[i - 1].date {
            return Err(DataError::CorruptData(format!(
                "Non-monotonic date at index {i}: {} <= {}",
                bar.date,
                bars[i - 1].date
            )));
        }
    }

    Ok(())
}
