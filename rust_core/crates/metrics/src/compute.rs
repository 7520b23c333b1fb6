//! KPI computation entrypoint.

use hedge_types::Kpis;

use crate::equity_metrics::{
    annualized_return, compound, max_drawdown, pct_returns, profit_factor, sharpe_ratio,
};
use crate::trade_metrics::count_position_changes;

/// Computes the fixed KPI set of one equity curve.
///
/// `positions` are numeric exposure states aligned with `equity`
/// (1.0 exposed, 0.0 hedged). `hedge_only_returns`, when given, feeds
/// `short_only_max_drawdown`; undefined entries count as 0.
///
/// Fewer than two equity points yields an all-zero record. Zero-denominator
/// ratios resolve to `+inf` instead of failing.
#[must_use]
pub fn analyze(equity: &[f64], positions: &[f64], hedge_only_returns: Option<&[f64]>) -> Kpis {
    if equity.len() < 2 {
        return Kpis::default();
    }

    let first = equity[0];
    let last = equity[equity.len() - 1];
    let returns = pct_returns(equity);

    let max_dd = max_drawdown(equity);
    let annualized = annualized_return(last / first - 1.0, equity.len());
    let return_on_max_drawdown = if max_dd == 0.0 {
        f64::INFINITY
    } else {
        annualized / max_dd.abs()
    };

    let short_only_max_drawdown = hedge_only_returns.map_or(0.0, |returns| {
        let cleaned: Vec<f64> = returns
            .iter()
            .map(|r| if r.is_finite() { *r } else { 0.0 })
            .collect();
        max_drawdown(&compound(&cleaned))
    });

    Kpis {
        net_profit: last - first,
        profit_factor: profit_factor(&returns),
        sharpe_ratio: sharpe_ratio(&returns),
        max_drawdown: max_dd,
        return_on_max_drawdown,
        num_trades: count_position_changes(positions),
        short_only_max_drawdown,
    }
}
