//! Helpers for equity-curve derived metrics.

/// Trading bars per year used for annualization.
pub const BARS_PER_YEAR: f64 = 252.0;

/// Per-bar simple returns; the first entry is 0.
#[must_use]
pub fn pct_returns(equity: &[f64]) -> Vec<f64> {
    if equity.is_empty() {
        return Vec::new();
    }
    std::iter::once(0.0)
        .chain(equity.windows(2).map(|w| w[1] / w[0] - 1.0))
        .collect()
}

/// Worst relative decline from the running peak, as a non-positive fraction.
#[must_use]
pub fn max_drawdown(equity: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;

    for &value in equity {
        peak = peak.max(value);
        if peak > 0.0 {
            worst = worst.min((value - peak) / peak);
        }
    }

    worst
}

/// Absolute drawdown detail of an equity curve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawdownStats {
    /// Relative max drawdown (non-positive)
    pub max_drawdown: f64,
    /// Largest peak-to-trough decline in currency
    pub max_drawdown_abs: f64,
    /// Longest stretch of bars spent below a prior peak
    pub max_duration_bars: u64,
}

/// Computes relative and absolute max drawdown and the longest duration.
///
/// A drawdown ends on the first bar that makes a new high; one still open
/// on the last bar counts up to the end of the curve.
#[must_use]
pub fn drawdown_stats(equity: &[f64]) -> DrawdownStats {
    let Some(&first) = equity.first() else {
        return DrawdownStats::default();
    };

    let mut high_water = first;
    let mut max_abs = 0.0_f64;
    let mut start = 0usize;
    let mut longest = 0usize;
    let mut in_drawdown = false;

    for (idx, &value) in equity.iter().enumerate() {
        if value >= high_water {
            if in_drawdown {
                longest = longest.max(idx - start);
                in_drawdown = false;
            }
            high_water = value;
        } else {
            if !in_drawdown {
                start = idx;
                in_drawdown = true;
            }
            max_abs = max_abs.max(high_water - value);
        }
    }

    if in_drawdown {
        longest = longest.max(equity.len() - start);
    }

    DrawdownStats {
        max_drawdown: max_drawdown(equity),
        max_drawdown_abs: max_abs,
        max_duration_bars: u64::try_from(longest).unwrap_or(u64::MAX),
    }
}

/// Annualized Sharpe ratio (risk-free rate 0, sample std).
///
/// Zero when fewer than two returns exist or their std is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sharpe_ratio(returns: &[f64]) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std = var.sqrt();
    if std == 0.0 || !std.is_finite() {
        return 0.0;
    }
    mean / std * BARS_PER_YEAR.sqrt()
}

/// Sum of positive returns over the absolute sum of negative returns.
///
/// `+inf` when no negative return exists.
#[must_use]
pub fn profit_factor(returns: &[f64]) -> f64 {
    let (gains, losses) = returns.iter().fold((0.0, 0.0), |(g, l), &r| {
        if r > 0.0 {
            (g + r, l)
        } else if r < 0.0 {
            (g, l - r)
        } else {
            (g, l)
        }
    });
    if losses == 0.0 {
        f64::INFINITY
    } else {
        gains / losses
    }
}

/// Compound annual growth over `num_bars` bars.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn annualized_return(total_return: f64, num_bars: usize) -> f64 {
    if num_bars == 0 {
        return 0.0;
    }
    (1.0 + total_return).powf(BARS_PER_YEAR / num_bars as f64) - 1.0
}

/// Equity curve compounded from per-bar returns, starting at 1.
#[must_use]
pub fn compound(returns: &[f64]) -> Vec<f64> {
    returns
        .iter()
        .scan(1.0, |acc, r| {
            *acc *= 1.0 + r;
            Some(*acc)
        })
        .collect()
}
