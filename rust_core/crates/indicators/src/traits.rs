//! Indicator traits and cache keys.
//!
//! Defines the core traits and types for indicators.

use hedge_types::{IndicatorSpec, PriceBar, PriceField};

/// Cache key of a computed indicator series: name plus parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndicatorKey {
    /// Indicator name (e.g., "SMA", "ADX", `BOLLINGER_upper`).
    pub name: String,
    /// Parameters for the indicator
    pub params: IndicatorParams,
}

impl IndicatorKey {
    /// Creates a new indicator key.
    #[must_use]
    pub fn new(name: impl Into<String>, params: IndicatorParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Creates a composite key for multi-output indicators.
    #[must_use]
    pub fn with_output_suffix(&self, output_name: &str) -> Self {
        Self {
            name: format!("{name}_{output_name}", name = self.name),
            params: self.params.clone(),
        }
    }
}

impl From<&IndicatorSpec> for IndicatorKey {
    fn from(spec: &IndicatorSpec) -> Self {
        let params = match *spec {
            IndicatorSpec::Sma { period, source } | IndicatorSpec::Rsi { period, source } => {
                IndicatorParams::Period { period, source }
            }
            IndicatorSpec::Bollinger {
                period,
                std_multiplier,
                source,
            } => IndicatorParams::Bollinger {
                period,
                std_factor_bits: std_multiplier.to_bits(),
                source,
            },
            IndicatorSpec::Adx { period } => IndicatorParams::Ohlc { period },
        };
        IndicatorKey::new(spec.kind(), params)
    }
}

/// Parameters for indicator configuration.
/// Floats are stored as bit patterns so the enum stays hashable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndicatorParams {
    /// Single price column with a period (SMA, RSI).
    Period {
        /// Window or smoothing length.
        period: usize,
        /// Input column.
        source: PriceField,
    },

    /// Bollinger Bands parameters
    Bollinger {
        /// Window length for SMA/std calculation.
        period: usize,
        /// `f64::to_bits` of the standard deviation factor
        std_factor_bits: u64,
        /// Input column.
        source: PriceField,
    },

    /// High/low/close indicators with a period (ADX).
    Ohlc {
        /// Smoothing length.
        period: usize,
    },
}

impl IndicatorParams {
    /// Period shared by every parameter kind.
    #[must_use]
    pub fn period(&self) -> usize {
        match *self {
            IndicatorParams::Period { period, .. }
            | IndicatorParams::Bollinger { period, .. }
            | IndicatorParams::Ohlc { period } => period,
        }
    }
}

/// Trait for single-output indicators.
///
/// All indicators compute over the full bar series and return a Vec<f64>
/// of the same length. Values before the warmup period are NaN.
pub trait Indicator: Send + Sync {
    /// Computes the indicator for all bars.
    ///
    /// Returns Vec<f64> with the same length as bars.
    /// Values at indices < `warmup_periods() - 1` are `f64::NAN`.
    fn compute(&self, bars: &[PriceBar]) -> Vec<f64>;

    /// Name of the indicator (e.g., "SMA", "ADX").
    fn name(&self) -> &str;

    /// Minimum number of bars required for the first valid output.
    fn warmup_periods(&self) -> usize;
}

/// Trait for multi-output indicators like Bollinger Bands.
///
/// These indicators produce multiple series (e.g., upper, middle, lower bands)
/// that are computed together for efficiency.
pub trait MultiOutputIndicator: Send + Sync {
    /// Type of the output structure
    type Output: IntoMultiVecs;

    /// Computes all outputs at once.
    fn compute_all(&self, bars: &[PriceBar]) -> Self::Output;

    /// Name of the indicator.
    fn name(&self) -> &str;

    /// Minimum number of bars for valid output.
    fn warmup_periods(&self) -> usize;

    /// List of output names (used for cache keys).
    fn output_names(&self) -> &'static [&'static str];
}

/// Trait for converting multi-output results into a vector of vectors.
pub trait IntoMultiVecs {
    /// Converts the output structure into a vector of value vectors.
    fn into_vecs(self) -> Vec<Vec<f64>>;
}
