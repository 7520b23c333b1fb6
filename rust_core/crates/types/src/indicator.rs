use crate::price_field::PriceField;

/// Request for one indicator column (or column group) of the price table.
///
/// Deserialized from `{"kind": "SMA", "period": 20, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndicatorSpec {
    /// Simple moving average
    Sma {
        /// Window length
        period: usize,
        /// Input column
        #[serde(default)]
        source: PriceField,
    },
    /// Relative strength index
    Rsi {
        /// Smoothing period
        period: usize,
        /// Input column
        #[serde(default)]
        source: PriceField,
    },
    /// Bollinger bands (upper, middle, lower)
    Bollinger {
        /// Window length
        period: usize,
        /// Band width in standard deviations
        #[serde(default = "default_std_multiplier")]
        std_multiplier: f64,
        /// Input column
        #[serde(default)]
        source: PriceField,
    },
    /// Average directional index (reads high, low and close)
    Adx {
        /// Smoothing period
        period: usize,
    },
}

fn default_std_multiplier() -> f64 {
    2.0
}

impl IndicatorSpec {
    /// Upper-case kind tag as used in the JSON form.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            IndicatorSpec::Sma { .. } => "SMA",
            IndicatorSpec::Rsi { .. } => "RSI",
            IndicatorSpec::Bollinger { .. } => "BOLLINGER",
            IndicatorSpec::Adx { .. } => "ADX",
        }
    }

    /// Smoothing/window period.
    #[must_use]
    pub fn period(&self) -> usize {
        match *self {
            IndicatorSpec::Sma { period, .. }
            | IndicatorSpec::Rsi { period, .. }
            | IndicatorSpec::Bollinger { period, .. }
            | IndicatorSpec::Adx { period } => period,
        }
    }

    /// Names of the table columns this spec produces, in output order.
    ///
    /// Columns read from a source other than the adjusted close carry the
    /// source as a suffix (`sma_20_close`).
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        match *self {
            IndicatorSpec::Sma { period, source } => {
                vec![with_source(format!("sma_{period}"), source)]
            }
            IndicatorSpec::Rsi { period, source } => {
                vec![with_source(format!("rsi_{period}"), source)]
            }
            IndicatorSpec::Bollinger {
                period,
                std_multiplier,
                source,
            } => ["upper", "middle", "lower"]
                .iter()
                .map(|band| {
                    with_source(format!("bb_{band}_{period}_{std_multiplier}"), source)
                })
                .collect(),
            IndicatorSpec::Adx { period } => vec![format!("adx_{period}")],
        }
    }
}

fn with_source(name: String, source: PriceField) -> String {
    if source == PriceField::AdjustedClose {
        name
    } else {
        format!("{name}_{source}")
    }
}
