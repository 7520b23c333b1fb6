//! Indicator implementations
//!
//! Contains all concrete indicator implementations and the shared
//! exponential smoothing kernel.

pub mod adx;
pub mod bollinger;
pub mod ewm;
pub mod rsi;
pub mod sma;
