use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::position::PositionState;
use crate::trade::HedgeTrade;

/// Output of one engine run. All series are aligned 1:1 with `dates`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BacktestResult {
    /// Bar dates
    pub dates: Vec<NaiveDate>,
    /// Hedged strategy equity
    pub hedged_equity: Vec<f64>,
    /// Buy-and-hold benchmark equity
    pub long_only_equity: Vec<f64>,
    /// Return contribution of the short/flat leg alone
    pub hedge_only_returns: Vec<f64>,
    /// Exposure state per bar
    pub position: Vec<PositionState>,
    /// Completed hedge segments
    pub trades: Vec<HedgeTrade>,
}

impl BacktestResult {
    /// Number of simulated bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true when no bar was simulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Positions as numeric values (1.0 exposed, 0.0 hedged).
    #[must_use]
    pub fn position_values(&self) -> Vec<f64> {
        self.position.iter().map(|p| p.as_f64()).collect()
    }
}

/// Fixed KPI set of one equity curve. Values are unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Kpis {
    /// Final minus initial equity
    pub net_profit: f64,
    /// Sum of positive returns over absolute sum of negative returns
    pub profit_factor: f64,
    /// Annualized Sharpe ratio of per-bar returns
    pub sharpe_ratio: f64,
    /// Worst peak-to-trough decline as a (non-positive) fraction
    pub max_drawdown: f64,
    /// Annualized return over absolute max drawdown
    pub return_on_max_drawdown: f64,
    /// Bars where the position differs from the previous bar
    pub num_trades: u64,
    /// Max drawdown of the compounded hedge-only returns
    pub short_only_max_drawdown: f64,
}

/// Statistics over the hedge trade log.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TradeStats {
    /// Hedge segments, including one still open at the end
    pub total_trades: u64,
    /// Segments closed by the stop-loss
    pub stop_loss_exits: u64,
    /// Segments closed by the signal
    pub signal_exits: u64,
    /// Segments still open on the last bar
    pub open_at_end: u64,
    /// Segments where price fell between entry and exit
    pub winning_hedges: u64,
    /// `winning_hedges / total_trades`
    pub win_rate: f64,
    /// Mean of `hedge_return`
    pub avg_hedge_return: f64,
    /// Mean number of hedged bars per segment
    pub avg_bars_hedged: f64,
}

/// Metric value supporting numeric values or sentinel strings ("inf").
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    /// Numeric metric value.
    Number(f64),
    /// String metric value.
    Text(String),
}

impl Default for MetricValue {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl MetricValue {
    /// Numeric value, mapping the text sentinels back to floats.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(v) => Some(*v),
            MetricValue::Text(s) => match s.as_str() {
                "inf" => Some(f64::INFINITY),
                "-inf" => Some(f64::NEG_INFINITY),
                _ => None,
            },
        }
    }
}

/// Metric definition metadata for output consumers.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetricDefinition {
    /// Unit of the metric (e.g. ratio, `account_currency`)
    pub unit: String,
    /// Human-readable description
    pub description: String,
    /// Allowed domain of values
    pub domain: String,
    /// Source of the metric (equity, positions, trades)
    pub source: String,
    /// Value type for serialization
    #[serde(rename = "type")]
    pub value_type: String,
}

/// Error result information
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ErrorResult {
    /// Error category
    pub category: String,
    /// Error message
    pub message: String,
    /// Additional error details
    #[serde(default)]
    pub details: serde_json::Value,
}

/// One row of the reported equity curve.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquityRow {
    /// Bar date
    pub date: NaiveDate,
    /// Hedged strategy equity
    pub hedged: f64,
    /// Benchmark equity
    pub long_only: f64,
    /// Exposure state
    pub position: PositionState,
    /// Hedge-only return of the bar
    pub hedge_only_return: f64,
}

/// Hedge status on the most recent fully defined bar.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SignalSnapshot {
    /// Bar date
    pub date: NaiveDate,
    /// Whether the rule asks for a hedge
    pub active: bool,
    /// Fast moving average
    pub fast_ma: f64,
    /// Slow moving average
    pub slow_ma: f64,
    /// Trend strength
    pub adx: f64,
    /// Trend strength threshold
    pub threshold: f64,
}

/// KPI mappings of both curves, as emitted in the report.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KpiReport {
    /// Hedged strategy
    pub hedged: BTreeMap<String, MetricValue>,
    /// Buy-and-hold benchmark
    pub benchmark: BTreeMap<String, MetricValue>,
}

/// Report metadata
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportMeta {
    /// Pipeline runtime in seconds
    #[serde(default)]
    pub runtime_seconds: f64,
    /// Rows in the input table
    #[serde(default)]
    pub bars_total: u64,
    /// Leading rows dropped for indicator warm-up
    #[serde(default)]
    pub warmup_rows: u64,
    /// Rows passed to the engine
    #[serde(default)]
    pub bars_simulated: u64,
    /// First simulated date
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last simulated date
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Pipeline report container.
/// Uses `BTreeMap` for deterministic (sorted) key order in JSON output.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipelineReport {
    /// Success flag
    pub ok: bool,
    /// Error information if not ok
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResult>,
    /// Symbol of the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// KPI mappings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kpis: Option<KpiReport>,
    /// Metric definitions (output contract, sorted for determinism)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_definitions: Option<BTreeMap<String, MetricDefinition>>,
    /// Hedge trade log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trades: Option<Vec<HedgeTrade>>,
    /// Trade log statistics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_stats: Option<TradeStats>,
    /// Equity curve rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equity_curve: Option<Vec<EquityRow>>,
    /// Hedge status on the last bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_signal: Option<SignalSnapshot>,
    /// Report metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ReportMeta>,
}

impl PipelineReport {
    /// Report carrying only an error.
    #[must_use]
    pub fn failure(error: ErrorResult) -> Self {
        Self {
            ok: false,
            error: Some(error),
            symbol: None,
            kpis: None,
            metric_definitions: None,
            trades: None,
            trade_stats: None,
            equity_curve: None,
            latest_signal: None,
            meta: None,
        }
    }
}
