use crate::error::CoreError;
use crate::indicator::IndicatorSpec;
use crate::price_field::PriceField;

/// Top-level pipeline configuration (one symbol, one strategy).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PipelineConfig {
    /// Schema version
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Trading symbol (informational)
    pub symbol: String,
    /// Signal rule name
    #[serde(default = "default_strategy_name")]
    pub strategy_name: String,
    /// Rule-specific parameters, interpreted by the selected rule
    #[serde(default)]
    pub strategy_parameters: serde_json::Value,
    /// Simulation parameters
    #[serde(default)]
    pub backtest: BacktestParams,
    /// Indicators computed in addition to the rule's own requirements
    #[serde(default)]
    pub extra_indicators: Vec<IndicatorSpec>,
    /// Price table location (`.parquet` or `.json`)
    #[serde(default)]
    pub data_path: Option<String>,
}

impl PipelineConfig {
    /// Configuration schema version understood by this crate.
    pub const SCHEMA_VERSION: &'static str = "1";

    /// Parses a JSON configuration and checks its schema version.
    ///
    /// # Errors
    /// Returns [`CoreError::Json`] on malformed input and
    /// [`CoreError::Config`] on an unsupported schema version.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(json)?;
        config.check_schema_version()?;
        Ok(config)
    }

    /// Fails unless `schema_version` is [`Self::SCHEMA_VERSION`].
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] naming the unsupported version.
    pub fn check_schema_version(&self) -> Result<(), CoreError> {
        if self.schema_version == Self::SCHEMA_VERSION {
            Ok(())
        } else {
            Err(CoreError::Config(format!(
                "unsupported schema_version '{}'",
                self.schema_version
            )))
        }
    }
}

fn default_schema_version() -> String {
    PipelineConfig::SCHEMA_VERSION.to_string()
}

fn default_strategy_name() -> String {
    "trend_adx_hedge".to_string()
}

/// Parameters of one backtest run.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BacktestParams {
    /// Starting value of both equity curves
    #[serde(default = "default_initial_capital")]
    pub initial_capital: f64,
    /// Fraction of the position neutralized while hedged (> 1 over-hedges)
    #[serde(default = "default_hedge_ratio")]
    pub hedge_ratio: f64,
    /// Stop-loss distance above the entry price; 0 disables the stop
    #[serde(default)]
    pub stop_loss_perc: f64,
    /// Execution price used on hedge entry and exit
    #[serde(default)]
    pub entry_price_policy: EntryPricePolicy,
    /// Price column driving returns and the stop-loss
    #[serde(default)]
    pub price_source: PriceField,
}

fn default_initial_capital() -> f64 {
    50_000.0
}

fn default_hedge_ratio() -> f64 {
    1.0
}

impl Default for BacktestParams {
    fn default() -> Self {
        Self {
            initial_capital: default_initial_capital(),
            hedge_ratio: default_hedge_ratio(),
            stop_loss_perc: 0.0,
            entry_price_policy: EntryPricePolicy::default(),
            price_source: PriceField::default(),
        }
    }
}

/// Execution price on hedge transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPricePolicy {
    /// Close (per `price_source`) of the bar the decision was made on
    #[default]
    PreviousClose,
    /// Raw open of the bar the transition takes effect on
    CurrentOpen,
}
