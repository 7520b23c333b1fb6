//! Equity/return compositor.
//!
//! Turns a position series into exposure-weighted returns and the two
//! equity curves. Vectorized: no state beyond the running products.

use hedge_metrics::equity_metrics::pct_returns;
use hedge_types::PositionState;

/// Equity curves of one run, aligned with the price series.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityCurves {
    /// Hedged strategy equity
    pub hedged: Vec<f64>,
    /// Buy-and-hold benchmark equity
    pub long_only: Vec<f64>,
    /// `returns[i] * (position[i] - 1)`
    pub hedge_only_returns: Vec<f64>,
}

/// Fraction of one unit held long on a bar.
///
/// `hedge_ratio > 1` over-hedges into a net short exposure.
#[must_use]
pub fn exposure(position: PositionState, hedge_ratio: f64) -> f64 {
    (1.0 - hedge_ratio) + hedge_ratio * position.as_f64()
}

/// Composes both equity curves from prices and positions.
///
/// Both curves start exactly at `initial_capital`.
#[must_use]
pub fn compose(
    prices: &[f64],
    position: &[PositionState],
    initial_capital: f64,
    hedge_ratio: f64,
) -> EquityCurves {
    let returns = pct_returns(prices);

    let mut hedged = Vec::with_capacity(returns.len());
    let mut long_only = Vec::with_capacity(returns.len());
    let mut hedge_only_returns = Vec::with_capacity(returns.len());
    let mut hedged_value = initial_capital;
    let mut long_value = initial_capital;

    for (&ret, &pos) in returns.iter().zip(position) {
        long_value *= 1.0 + ret;
        hedged_value *= 1.0 + ret * exposure(pos, hedge_ratio);
        long_only.push(long_value);
        hedged.push(hedged_value);
        hedge_only_returns.push(ret * (pos.as_f64() - 1.0));
    }

    EquityCurves {
        hedged,
        long_only,
        hedge_only_returns,
    }
}
