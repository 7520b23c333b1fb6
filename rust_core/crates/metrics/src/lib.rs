//! Hedge Metrics
//!
//! Computes the KPI set of hedged and benchmark equity curves, trade-log
//! statistics, and metric definitions for downstream consumers.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// KPI computation entrypoint.
pub mod compute;
/// Metric definition catalog for output contract.
pub mod definitions;
/// Equity-curve metric helpers.
pub mod equity_metrics;
/// Output formatting helpers.
pub mod output;
/// Trade-based metric helpers.
pub mod trade_metrics;

pub use compute::analyze;
pub use definitions::{MetricDefinition, MetricDefinitions};
pub use equity_metrics::{drawdown_stats, max_drawdown, DrawdownStats};
pub use output::{kpis_to_map, MetricsOutput};
pub use trade_metrics::summarize_trades;
