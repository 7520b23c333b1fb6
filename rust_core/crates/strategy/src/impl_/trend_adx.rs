//! Trend/ADX hedge rule
//!
//! Hedge while the fast moving average is below the slow one AND the trend
//! is strong (ADX above a threshold).

use hedge_indicators::IndicatorTable;
use hedge_types::{HedgeSignal, IndicatorSpec, PriceField, SignalSnapshot};
use serde::{Deserialize, Serialize};

use crate::error::StrategyError;
use crate::traits::SignalRule;

fn default_fast_ma() -> usize {
    20
}

fn default_slow_ma() -> usize {
    60
}

fn default_adx_period() -> usize {
    14
}

fn default_adx_threshold() -> f64 {
    25.0
}

/// Trend/ADX rule parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrendAdxParams {
    /// Fast moving average period
    #[serde(default = "default_fast_ma")]
    pub fast_ma: usize,
    /// Slow moving average period
    #[serde(default = "default_slow_ma")]
    pub slow_ma: usize,
    /// ADX smoothing period
    #[serde(default = "default_adx_period")]
    pub adx_period: usize,
    /// Trend strength above which the hedge may activate
    #[serde(default = "default_adx_threshold")]
    pub adx_threshold: f64,
    /// Column the moving averages read
    #[serde(default)]
    pub price_source: PriceField,
}

impl Default for TrendAdxParams {
    fn default() -> Self {
        Self {
            fast_ma: default_fast_ma(),
            slow_ma: default_slow_ma(),
            adx_period: default_adx_period(),
            adx_threshold: default_adx_threshold(),
            price_source: PriceField::default(),
        }
    }
}

impl TrendAdxParams {
    /// Checks parameter constraints without clamping.
    ///
    /// # Errors
    /// Returns `StrategyError::InvalidParams` on a zero period or a threshold
    /// outside `[0, 100]`.
    pub fn validate(&self) -> Result<(), StrategyError> {
        for (name, value) in [
            ("fast_ma", self.fast_ma),
            ("slow_ma", self.slow_ma),
            ("adx_period", self.adx_period),
        ] {
            if value == 0 {
                return Err(StrategyError::InvalidParams(format!("{name} must be > 0")));
            }
        }
        if !(0.0..=100.0).contains(&self.adx_threshold) {
            return Err(StrategyError::InvalidParams(format!(
                "adx_threshold must be within [0, 100], got {}",
                self.adx_threshold
            )));
        }
        Ok(())
    }

    fn fast_spec(&self) -> IndicatorSpec {
        IndicatorSpec::Sma {
            period: self.fast_ma,
            source: self.price_source,
        }
    }

    fn slow_spec(&self) -> IndicatorSpec {
        IndicatorSpec::Sma {
            period: self.slow_ma,
            source: self.price_source,
        }
    }

    fn adx_spec(&self) -> IndicatorSpec {
        IndicatorSpec::Adx {
            period: self.adx_period,
        }
    }
}

/// Elementwise rule: hedge iff `fast < slow` and `adx > threshold`.
///
/// Any NaN input compares false and yields no instruction.
#[must_use]
pub fn hedge_signal(fast: f64, slow: f64, adx: f64, threshold: f64) -> HedgeSignal {
    if fast < slow && adx > threshold {
        HedgeSignal::Hedge
    } else {
        HedgeSignal::None
    }
}

/// Trend/ADX hedge rule.
#[derive(Debug, Clone)]
pub struct TrendAdxHedge {
    params: TrendAdxParams,
}

impl TrendAdxHedge {
    /// Creates the rule from validated parameters.
    ///
    /// # Errors
    /// Returns `StrategyError::InvalidParams` when validation fails.
    pub fn new(params: TrendAdxParams) -> Result<Self, StrategyError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Creates the rule from JSON parameters; `null` means all defaults.
    ///
    /// # Errors
    /// Returns `StrategyError::Json` on malformed or unknown fields and
    /// `StrategyError::InvalidParams` when validation fails.
    pub fn from_params(params: &serde_json::Value) -> Result<Self, StrategyError> {
        let params: TrendAdxParams = if params.is_null() {
            TrendAdxParams::default()
        } else {
            serde_json::from_value(params.clone())?
        };
        Self::new(params)
    }

    /// Rule parameters.
    #[must_use]
    pub fn params(&self) -> &TrendAdxParams {
        &self.params
    }

    fn inputs<'a>(
        &self,
        table: &'a IndicatorTable,
    ) -> Result<(&'a [f64], &'a [f64], &'a [f64]), StrategyError> {
        let [fast, slow, adx] = [
            self.params.fast_spec(),
            self.params.slow_spec(),
            self.params.adx_spec(),
        ]
        .map(|spec| spec.column_names().remove(0));
        Ok((
            table.require(&fast)?,
            table.require(&slow)?,
            table.require(&adx)?,
        ))
    }
}

impl SignalRule for TrendAdxHedge {
    fn name(&self) -> &str {
        "trend_adx_hedge"
    }

    fn required_indicators(&self) -> Vec<IndicatorSpec> {
        vec![
            self.params.fast_spec(),
            self.params.slow_spec(),
            self.params.adx_spec(),
        ]
    }

    fn generate(&self, table: &IndicatorTable) -> Result<Vec<HedgeSignal>, StrategyError> {
        let (fast, slow, adx) = self.inputs(table)?;
        let threshold = self.params.adx_threshold;

        Ok(fast
            .iter()
            .zip(slow)
            .zip(adx)
            .map(|((&f, &s), &a)| hedge_signal(f, s, a, threshold))
            .collect())
    }

    fn snapshot_at(
        &self,
        table: &IndicatorTable,
        idx: usize,
    ) -> Result<SignalSnapshot, StrategyError> {
        let (fast, slow, adx) = self.inputs(table)?;
        let bar = table.bars().get(idx).ok_or_else(|| {
            StrategyError::InvalidParams(format!(
                "row {idx} out of range for table of {} rows",
                table.len()
            ))
        })?;
        let threshold = self.params.adx_threshold;

        Ok(SignalSnapshot {
            date: bar.date,
            active: hedge_signal(fast[idx], slow[idx], adx[idx], threshold).is_hedge(),
            fast_ma: fast[idx],
            slow_ma: slow[idx],
            adx: adx[idx],
            threshold,
        })
    }
}
