//! Simple Moving Average (SMA) indicator

use crate::traits::Indicator;
use hedge_types::{column, PriceBar, PriceField};

/// Simple Moving Average
///
/// Calculates the arithmetic mean of the last N values of the source column.
#[derive(Debug, Clone)]
pub struct SMA {
    /// Number of periods for the moving average
    pub period: usize,
    /// Input column
    pub source: PriceField,
}

impl SMA {
    /// Creates a new SMA over the adjusted close.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            period,
            source: PriceField::AdjustedClose,
        }
    }

    /// Reads from another column.
    #[must_use]
    pub fn with_source(mut self, source: PriceField) -> Self {
        self.source = source;
        self
    }
}

/// Rolling mean of `values` over `period` entries.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    let len = values.len();
    let mut result = vec![f64::NAN; len];

    if len < period || period == 0 {
        return result;
    }

    let mut sum: f64 = values[..period].iter().sum();
    result[period - 1] = sum / period as f64;

    for i in period..len {
        sum += values[i] - values[i - period];
        result[i] = sum / period as f64;
    }

    result
}

impl Indicator for SMA {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        rolling_mean(&column(bars, self.source), self.period)
    }

    fn name(&self) -> &str {
        "SMA"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
