//! Average Directional Index (ADX) indicator

use crate::impl_::ewm::wilder_smooth;
use crate::traits::Indicator;
use hedge_types::PriceBar;

/// Average Directional Index
///
/// Reads raw high, low and close:
/// - `+DM = max(high - prev_high, 0)`, `-DM = max(prev_low - low, 0)`
///   (undefined on the first bar)
/// - `TR = max(high - low, |high - prev_close|, |low - prev_close|)`,
///   `high - low` on the first bar
/// - ATR, +DM and -DM are Wilder-smoothed; `±DI = 100 * DM / ATR`
/// - `DX = 100 * |+DI - -DI| / (+DI + -DI)`, ADX = Wilder-smoothed DX
///
/// A flat market (ATR = 0 or +DI + -DI = 0) resolves to DI = 0 and DX = 0.
/// The first defined value is at index `2 * period - 1`.
#[derive(Debug, Clone)]
pub struct ADX {
    /// Smoothing period
    pub period: usize,
}

impl ADX {
    /// Creates a new ADX with the given period.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Intermediate ADX series, exposed for diagnostics and tests.
#[derive(Debug, Clone)]
pub struct DirectionalSeries {
    /// Smoothed true range
    pub atr: Vec<f64>,
    /// +DI
    pub plus_di: Vec<f64>,
    /// -DI
    pub minus_di: Vec<f64>,
    /// Directional index
    pub dx: Vec<f64>,
    /// Smoothed directional index
    pub adx: Vec<f64>,
}

fn directional_indicator(dm: f64, atr: f64) -> f64 {
    if dm.is_nan() || atr.is_nan() {
        f64::NAN
    } else if atr == 0.0 {
        0.0
    } else {
        100.0 * dm / atr
    }
}

impl ADX {
    /// Computes every intermediate series.
    #[must_use]
    pub fn compute_series(&self, bars: &[PriceBar]) -> DirectionalSeries {
        let len = bars.len();
        let mut plus_dm = vec![f64::NAN; len];
        let mut minus_dm = vec![f64::NAN; len];
        let mut tr = vec![f64::NAN; len];

        if let Some(first) = bars.first() {
            tr[0] = first.high - first.low;
        }
        for i in 1..len {
            let (prev, cur) = (&bars[i - 1], &bars[i]);
            plus_dm[i] = (cur.high - prev.high).max(0.0);
            minus_dm[i] = (prev.low - cur.low).max(0.0);
            tr[i] = (cur.high - cur.low)
                .max((cur.high - prev.close).abs())
                .max((cur.low - prev.close).abs());
        }

        let atr = wilder_smooth(&tr, self.period);
        let smoothed_plus = wilder_smooth(&plus_dm, self.period);
        let smoothed_minus = wilder_smooth(&minus_dm, self.period);

        let plus_di: Vec<f64> = smoothed_plus
            .iter()
            .zip(&atr)
            .map(|(&dm, &atr)| directional_indicator(dm, atr))
            .collect();
        let minus_di: Vec<f64> = smoothed_minus
            .iter()
            .zip(&atr)
            .map(|(&dm, &atr)| directional_indicator(dm, atr))
            .collect();

        let dx: Vec<f64> = plus_di
            .iter()
            .zip(&minus_di)
            .map(|(&plus, &minus)| {
                let di_sum = plus + minus;
                if di_sum.is_nan() {
                    f64::NAN
                } else if di_sum == 0.0 {
                    0.0
                } else {
                    100.0 * (plus - minus).abs() / di_sum
                }
            })
            .collect();

        let adx = wilder_smooth(&dx, self.period);

        DirectionalSeries {
            atr,
            plus_di,
            minus_di,
            dx,
            adx,
        }
    }
}

impl Indicator for ADX {
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64> {
        self.compute_series(bars).adx
    }

    fn name(&self) -> &str {
        "ADX"
    }

    fn warmup_periods(&self) -> usize {
        2 * self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_bar(high: f64, low: f64, close: f64) -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            open: close,
            high,
            low,
            close,
            adjusted_close: close,
            volume: 0.0,
        }
    }

    fn trending_bars(n: usize) -> Vec<PriceBar> {
        (0..n)
            .map(|i| {
                let base = 100.0 + i as f64;
                make_bar(base + 1.0, base - 1.0, base)
            })
            .collect()
    }

    #[test]
    fn test_adx_warmup_boundaries() {
        let bars = trending_bars(40);
        let series = ADX::new(5).compute_series(&bars);

        assert!(series.atr[3].is_nan());
        assert!(series.atr[4].is_finite());
        assert!(series.plus_di[4].is_nan());
        assert!(series.plus_di[5].is_finite());
        assert!(series.adx[8].is_nan());
        assert!(series.adx[9].is_finite());
    }

    #[test]
    fn test_adx_strong_uptrend() {
        let bars = trending_bars(60);
        let series = ADX::new(14).compute_series(&bars);

        // Only upward movement: -DI = 0, DX = 100.
        let last = bars.len() - 1;
        assert!(series.minus_di[last].abs() < 1e-10);
        assert!((series.dx[last] - 100.0).abs() < 1e-10);
        assert!((series.adx[last] - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_adx_flat_market_is_zero() {
        let bars: Vec<PriceBar> = (0..40).map(|_| make_bar(50.0, 50.0, 50.0)).collect();
        let result = ADX::new(14).compute(&bars);

        assert!(result[26].is_nan());
        for value in &result[27..] {
            assert!(value.abs() < 1e-10);
        }
    }

    #[test]
    fn test_adx_true_range_uses_previous_close() {
        // Gap up: |high - prev_close| dominates high - low.
        let bars = vec![make_bar(11.0, 9.0, 10.0), make_bar(21.0, 20.0, 20.5)];
        let series = ADX::new(1).compute_series(&bars);

        // period 1: ATR equals the raw true range.
        assert!((series.atr[0] - 2.0).abs() < 1e-10);
        assert!((series.atr[1] - 11.0).abs() < 1e-10);
        // +DM = 10, -DM = 0
        assert!((series.plus_di[1] - 100.0 * 10.0 / 11.0).abs() < 1e-10);
        assert!(series.minus_di[1].abs() < 1e-10);
    }

    #[test]
    fn test_adx_range_bounds() {
        let bars: Vec<PriceBar> = (0..80)
            .map(|i| {
                let base = 100.0 + 10.0 * ((i as f64) * 0.3).sin();
                make_bar(base + 2.0, base - 2.0, base)
            })
            .collect();
        let result = ADX::new(14).compute(&bars);

        for value in result.iter().filter(|v| v.is_finite()) {
            assert!((0.0..=100.0 + 1e-9).contains(value));
        }
    }
}
