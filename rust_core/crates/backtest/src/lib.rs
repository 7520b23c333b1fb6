//! Hedge Backtest
//!
//! Runs the hedge overlay pipeline: indicator computation, signal
//! construction, the bar-by-bar hedge state machine, equity composition,
//! and report assembly.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

pub mod engine;
pub mod equity;
pub mod error;
pub mod event_loop;
mod result_builder;
pub mod runner;
pub mod warmup;

pub use engine::{run_backtest, validate_params, BacktestEngine, HedgeState};
pub use equity::{compose, exposure, EquityCurves};
pub use error::BacktestError;
pub use runner::{run_pipeline, run_pipeline_from_json, validate_config};
pub use warmup::trim_warmup;
