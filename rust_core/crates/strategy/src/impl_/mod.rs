//! Signal rule implementations

pub mod trend_adx;
