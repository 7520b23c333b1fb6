//! High-level pipeline runner helpers.

use std::path::Path;
use std::time::Instant;

use hedge_data::{load_price_table, validate_price_bars};
use hedge_indicators::compute_indicators;
use hedge_strategy::{latest_snapshot, StrategyRegistry};
use hedge_types::{PipelineConfig, PipelineReport, PriceBar};

use crate::engine::{run_backtest, validate_params};
use crate::error::BacktestError;
use crate::result_builder;
use crate::warmup::trim_warmup;

/// Main entry point: receives config JSON, returns report JSON.
///
/// # Errors
/// - [`BacktestError::ConfigParse`] when JSON parsing fails.
/// - [`BacktestError::ConfigValidation`] for invalid configuration values or
///   a missing `data_path`.
/// - Any error from loading the price table or running the pipeline.
pub fn run_pipeline_from_json(config_json: &str) -> Result<String, BacktestError> {
    let config = PipelineConfig::from_json(config_json)?;

    validate_config(&config)?;

    let data_path = config
        .data_path
        .as_deref()
        .ok_or_else(|| BacktestError::ConfigValidation("data_path is required".to_string()))?;
    let bars = load_price_table(Path::new(data_path))?;

    let report = execute(&config, bars)?;

    serde_json::to_string(&report).map_err(|e| BacktestError::ResultSerialize(e.to_string()))
}

/// Runs the full pipeline on an in-memory price table.
///
/// Never fails: any error is reported as an `ok: false` report carrying
/// its category and message.
#[must_use]
pub fn run_pipeline(config: &PipelineConfig, bars: Vec<PriceBar>) -> PipelineReport {
    match execute(config, bars) {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!("pipeline failed: {err}");
            PipelineReport::failure(err.into())
        }
    }
}

/// Checks the configuration before any data is touched.
///
/// # Errors
/// Returns [`BacktestError::ConfigValidation`] for an empty symbol or strategy
/// name, an unsupported schema version, or invalid backtest parameters.
pub fn validate_config(config: &PipelineConfig) -> Result<(), BacktestError> {
    config.check_schema_version()?;
    if config.symbol.trim().is_empty() {
        return Err(BacktestError::ConfigValidation("symbol is empty".to_string()));
    }
    if config.strategy_name.trim().is_empty() {
        return Err(BacktestError::ConfigValidation(
            "strategy_name is empty".to_string(),
        ));
    }
    validate_params(&config.backtest)
}

fn execute(config: &PipelineConfig, bars: Vec<PriceBar>) -> Result<PipelineReport, BacktestError> {
    let start = Instant::now();

    validate_config(config)?;
    validate_price_bars(&bars)?;

    let rule = StrategyRegistry::with_defaults()
        .create(&config.strategy_name, &config.strategy_parameters)?;

    let mut specs = rule.required_indicators();
    specs.extend(config.extra_indicators.iter().copied());
    let table = compute_indicators(&bars, &specs)?;

    let latest_signal = latest_snapshot(&table, rule.as_ref())?;
    let (table, warmup_rows) = trim_warmup(&table, &rule.required_columns())?;

    let signals = rule.generate(&table)?;
    let result = run_backtest(table.bars(), &signals, &config.backtest)?;

    tracing::info!(
        symbol = %config.symbol,
        strategy = rule.name(),
        bars = result.len(),
        trades = result.trades.len(),
        "pipeline finished"
    );

    let meta = result_builder::build_meta(
        &result,
        bars.len(),
        warmup_rows,
        start.elapsed().as_secs_f64(),
    );
    Ok(result_builder::build_report(
        &config.symbol,
        result,
        latest_signal,
        meta,
    ))
}
