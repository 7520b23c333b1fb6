//! Bollinger Bands indicator

use crate::traits::{IntoMultiVecs, MultiOutputIndicator};
use hedge_types::{column, PriceBar, PriceField};

/// Bollinger Bands result containing upper, middle, and lower bands.
#[derive(Debug, Clone)]
pub struct BollingerResult {
    /// Upper band = SMA + std_factor * std
    pub upper: Vec<f64>,
    /// Middle band = SMA
    pub middle: Vec<f64>,
    /// Lower band = SMA - std_factor * std
    pub lower: Vec<f64>,
}

impl IntoMultiVecs for BollingerResult {
    fn into_vecs(self) -> Vec<Vec<f64>> {
        vec![self.upper, self.middle, self.lower]
    }
}

/// Bollinger Bands
///
/// Calculates three bands based on standard deviation around a simple moving average:
/// - Upper Band = SMA + (std_factor * StdDev)
/// - Middle Band = SMA
/// - Lower Band = SMA - (std_factor * StdDev)
///
/// Uses the sample standard deviation (n-1); a period below 2 yields NaN.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    /// Period for the SMA and standard deviation
    pub period: usize,
    /// Multiplier for standard deviation (typically 2.0)
    pub std_factor: f64,
    /// Input column
    pub source: PriceField,
}

impl BollingerBands {
    /// Creates new Bollinger Bands over the adjusted close.
    #[must_use]
    pub fn new(period: usize, std_factor: f64) -> Self {
        Self {
            period,
            std_factor,
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

impl MultiOutputIndicator for BollingerBands {
    type Output = BollingerResult;

    #[allow(clippy::cast_precision_loss)]
    fn compute_all(&self, bars: &[PriceBar]) -> Self::Output {
        let prices = column(bars, self.source);
        let len = prices.len();
        let mut upper = vec![f64::NAN; len];
        let mut middle = vec![f64::NAN; len];
        let mut lower = vec![f64::NAN; len];

        if len < self.period || self.period < 2 {
            return BollingerResult {
                upper,
                middle,
                lower,
            };
        }

        let n = self.period as f64;
        for i in (self.period - 1)..len {
            let window = &prices[i + 1 - self.period..=i];

            let sma = window.iter().sum::<f64>() / n;
            let variance = window.iter().map(|x| (x - sma).powi(2)).sum::<f64>() / (n - 1.0);
            let std = variance.sqrt();

            middle[i] = sma;
            upper[i] = sma + self.std_factor * std;
            lower[i] = sma - self.std_factor * std;
        }

        BollingerResult {
            upper,
            middle,
            lower,
        }
    }

    fn name(&self) -> &str {
        "BOLLINGER"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["upper", "middle", "lower"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_bar(close: f64) -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            adjusted_close: close,
            volume: 0.0,
        }
    }

    #[test]
    fn test_bollinger_basic() {
        let bars: Vec<PriceBar> = vec![1.0, 2.0, 3.0, 4.0, 5.0]
            .into_iter()
            .map(make_bar)
            .collect();

        let bb = BollingerBands::new(3, 2.0);
        let result = bb.compute_all(&bars);

        assert!(result.middle[0].is_nan());
        assert!(result.middle[1].is_nan());

        // At index 2: window = [1, 2, 3]
        // SMA = 2.0
        // Sample variance = (1 + 0 + 1) / 2 = 1
        let expected_sma = 2.0;
        let expected_std = 1.0;

        assert!((result.middle[2] - expected_sma).abs() < 1e-10);
        assert!((result.upper[2] - (expected_sma + 2.0 * expected_std)).abs() < 1e-10);
        assert!((result.lower[2] - (expected_sma - 2.0 * expected_std)).abs() < 1e-10);
    }

    #[test]
    fn test_bollinger_constant_input() {
        let bars: Vec<PriceBar> = vec![100.0; 10].into_iter().map(make_bar).collect();

        let result = BollingerBands::new(5, 2.0).compute_all(&bars);

        for i in 4..10 {
            assert!((result.middle[i] - 100.0).abs() < 1e-10);
            assert!((result.upper[i] - 100.0).abs() < 1e-10);
            assert!((result.lower[i] - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_bollinger_symmetry() {
        let bars: Vec<PriceBar> = vec![1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0, 2.0]
            .into_iter()
            .map(make_bar)
            .collect();

        let result = BollingerBands::new(3, 2.0).compute_all(&bars);

        for i in 2..bars.len() {
            let mid = result.middle[i];
            let upper_dist = result.upper[i] - mid;
            let lower_dist = mid - result.lower[i];
            assert!(
                (upper_dist - lower_dist).abs() < 1e-10,
                "Bands not symmetric at index {i}"
            );
        }
    }

    #[test]
    fn test_bollinger_period_one_undefined() {
        let bars: Vec<PriceBar> = vec![1.0, 2.0].into_iter().map(make_bar).collect();

        let result = BollingerBands::new(1, 2.0).compute_all(&bars);

        assert!(result.upper.iter().all(|v| v.is_nan()));
        assert!(result.middle.iter().all(|v| v.is_nan()));
        assert!(result.lower.iter().all(|v| v.is_nan()));
    }
}
