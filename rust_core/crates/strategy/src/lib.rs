//! Hedge Strategy
//!
//! Signal layer of the hedge overlay: turns indicator columns into one
//! hedge instruction per bar.
//!
//! # Features
//! - `SignalRule` trait for implementing hedge rules
//! - `StrategyRegistry` for dynamic rule creation from JSON parameters
//! - Trend/ADX hedge rule
//! - Latest-signal snapshot for status reporting
//!
//! # Example
//! ```ignore
//! use hedge_strategy::{latest_snapshot, StrategyRegistry};
//!
//! let registry = StrategyRegistry::with_defaults();
//! let rule = registry.create("trend_adx_hedge", &serde_json::json!({"fast_ma": 20}))?;
//! let table = hedge_indicators::compute_indicators(&bars, &rule.required_indicators())?;
//! let signals = rule.generate(&table)?;
//! let status = latest_snapshot(&table, rule.as_ref())?;
//! ```

#![deny(clippy::all)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod impl_;
pub mod registry;
pub mod snapshot;
pub mod traits;

// Re-export main types
pub use error::StrategyError;
pub use registry::StrategyRegistry;
pub use snapshot::latest_snapshot;
pub use traits::SignalRule;

// Re-export rule implementations
pub use impl_::trend_adx::{hedge_signal, TrendAdxHedge, TrendAdxParams};
