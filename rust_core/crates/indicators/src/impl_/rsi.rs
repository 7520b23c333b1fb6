//! Relative Strength Index (RSI) indicator

use crate::impl_::ewm::wilder_smooth;
use crate::traits::Indicator;
use hedge_types::{column, PriceBar, PriceField};

/// Relative Strength Index
///
/// Gains and losses of consecutive bars are Wilder-smoothed
/// (`alpha = 1 / period`); `RSI = 100 - 100 / (1 + avg_gain / avg_loss)`.
/// The first bar counts as a zero change, so the first value is defined at
/// index `period - 1`.
///
/// Zero-denominator cases: only gains gives 100, no movement at all gives 50.
#[derive(Debug, Clone)]
pub struct RSI {
    /// Smoothing period
    pub period: usize,
    /// Input column
    pub source: PriceField,
}

impl RSI {
    /// Creates a new RSI over the adjusted close.
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

impl Indicator for RSI {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        let prices = column(bars, self.source);
        let len = prices.len();

        let mut gains = vec![0.0; len];
        let mut losses = vec![0.0; len];
        for i in 1..len {
            let delta = prices[i] - prices[i - 1];
            if delta > 0.0 {
                gains[i] = delta;
            } else if delta < 0.0 {
                losses[i] = -delta;
            }
        }

        let avg_gain = wilder_smooth(&gains, self.period);
        let avg_loss = wilder_smooth(&losses, self.period);

        avg_gain
            .iter()
            .zip(&avg_loss)
            .map(|(&gain, &loss)| {
                if gain.is_nan() || loss.is_nan() {
                    f64::NAN
                } else if loss == 0.0 {
                    if gain == 0.0 {
                        50.0
                    } else {
                        100.0
                    }
                } else {
                    100.0 - 100.0 / (1.0 + gain / loss)
                }
            })
            .collect()
    }

    fn name(&self) -> &str {
        "RSI"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
