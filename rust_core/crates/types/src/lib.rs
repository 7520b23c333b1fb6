//! Hedge Types
//!
//! Core data structures for the hedge overlay pipeline.
//! This crate provides price bars, hedge signals, position states,
//! hedge trades, configuration, and backtest/report results.

#![deny(clippy::all)]

pub mod bar;
pub mod config;
pub mod error;
pub mod indicator;
pub mod position;
pub mod price_field;
pub mod result;
pub mod signal;
pub mod trade;

// Re-export main types for convenience
pub use bar::{column, PriceBar};
pub use config::{BacktestParams, EntryPricePolicy, PipelineConfig};
pub use error::CoreError;
pub use indicator::IndicatorSpec;
pub use position::PositionState;
pub use price_field::{ParsePriceFieldError, PriceField};
pub use result::{
    BacktestResult, EquityRow, ErrorResult, KpiReport, Kpis, MetricDefinition, MetricValue,
    PipelineReport, ReportMeta, SignalSnapshot, TradeStats,
};
pub use signal::HedgeSignal;
pub use trade::{ExitReason, HedgeTrade};
