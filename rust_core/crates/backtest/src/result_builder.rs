//! Pipeline report assembly helpers.

use hedge_metrics::{analyze, kpis_to_map, summarize_trades, MetricDefinitions};
use hedge_types::{
    BacktestResult, EquityRow, KpiReport, PipelineReport, ReportMeta, SignalSnapshot,
};

/// Builds a successful report payload.
#[must_use]
pub(crate) fn build_report(
    symbol: &str,
    result: BacktestResult,
    latest_signal: Option<SignalSnapshot>,
    meta: ReportMeta,
) -> PipelineReport {
    let positions = result.position_values();
    let hedged = analyze(
        &result.hedged_equity,
        &positions,
        Some(&result.hedge_only_returns),
    );
    // buy-and-hold never changes position
    let benchmark = analyze(&result.long_only_equity, &vec![1.0; result.len()], None);

    let trade_stats = summarize_trades(&result.trades);
    let equity_curve = equity_rows(&result);

    PipelineReport {
        ok: true,
        error: None,
        symbol: Some(symbol.to_string()),
        kpis: Some(KpiReport {
            hedged: kpis_to_map(&hedged),
            benchmark: kpis_to_map(&benchmark),
        }),
        metric_definitions: Some(MetricDefinitions::definitions()),
        trades: Some(result.trades),
        trade_stats: Some(trade_stats),
        equity_curve: Some(equity_curve),
        latest_signal,
        meta: Some(meta),
    }
}

/// Builds metadata for a report.
#[must_use]
pub(crate) fn build_meta(
    result: &BacktestResult,
    bars_total: usize,
    warmup_rows: usize,
    runtime_seconds: f64,
) -> ReportMeta {
    ReportMeta {
        runtime_seconds,
        bars_total: bars_total as u64,
        warmup_rows: warmup_rows as u64,
        bars_simulated: result.len() as u64,
        start_date: result.dates.first().copied(),
        end_date: result.dates.last().copied(),
    }
}

fn equity_rows(result: &BacktestResult) -> Vec<EquityRow> {
    result
        .dates
        .iter()
        .zip(&result.hedged_equity)
        .zip(&result.long_only_equity)
        .zip(&result.position)
        .zip(&result.hedge_only_returns)
        .map(
            |((((&date, &hedged), &long_only), &position), &hedge_only_return)| EquityRow {
                date,
                hedged,
                long_only,
                position,
                hedge_only_return,
            },
        )
        .collect()
}
