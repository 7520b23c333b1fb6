//! Hedge Indicators
//!
//! Technical indicator library for the hedge overlay.
//!
//! # Features
//! - Indicator trait with vectorized computation
//! - Multi-output indicators (Bollinger Bands)
//! - Caching system for computed indicators
//! - Registry for indicator factories
//! - Spec-driven computation into an [`IndicatorTable`]
//!
//! # Available Indicators
//! - SMA: Simple Moving Average
//! - RSI: Relative Strength Index (Wilder smoothing)
//! - Bollinger Bands: Upper, Middle, Lower bands (sample std)
//! - ADX: Average Directional Index (Wilder smoothing)

#![deny(clippy::all)]

pub mod cache;
pub mod compute;
pub mod error;
pub mod impl_;
pub mod registry;
pub mod table;
pub mod traits;

// Re-export main types
pub use cache::IndicatorCache;
pub use compute::{compute_indicators, compute_indicators_cached, validate_spec};
pub use error::IndicatorError;
pub use registry::IndicatorRegistry;
pub use table::IndicatorTable;
pub use traits::{Indicator, IndicatorKey, IndicatorParams, IntoMultiVecs, MultiOutputIndicator};

// Re-export indicator implementations
pub use impl_::{
    adx::{DirectionalSeries, ADX},
    bollinger::{BollingerBands, BollingerResult},
    ewm::{ewm_mean, wilder_smooth},
    rsi::RSI,
    sma::{rolling_mean, SMA},
};
