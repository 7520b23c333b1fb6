//! Output formatting helpers for metrics.

use std::collections::BTreeMap;

use hedge_types::{Kpis, MetricDefinition, MetricValue};
use serde::{Deserialize, Serialize};

use crate::definitions::MetricDefinitions;

const CURRENCY_DECIMALS: u32 = 2;
const RATIO_DECIMALS: u32 = 6;

/// Output payload for metrics including definitions.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsOutput {
    /// Rounded metric values keyed by metric name.
    pub metrics: BTreeMap<String, MetricValue>,
    /// Metric definition catalog keyed by metric name.
    pub definitions: BTreeMap<String, MetricDefinition>,
}

impl MetricsOutput {
    /// Builds the output payload of one KPI record.
    #[must_use]
    pub fn new(kpis: &Kpis) -> Self {
        Self {
            metrics: kpis_to_map(kpis),
            definitions: MetricDefinitions::definitions(),
        }
    }
}

/// Converts a KPI record into the rounded output mapping.
///
/// Non-finite values become text sentinels since JSON has no infinity.
#[must_use]
#[allow(clippy::cast_precision_loss)] // trade counts stay far below 2^53
pub fn kpis_to_map(kpis: &Kpis) -> BTreeMap<String, MetricValue> {
    let mut map = BTreeMap::new();
    map.insert(
        "net_profit".to_string(),
        metric_value(kpis.net_profit, CURRENCY_DECIMALS),
    );
    map.insert(
        "profit_factor".to_string(),
        metric_value(kpis.profit_factor, RATIO_DECIMALS),
    );
    map.insert(
        "sharpe_ratio".to_string(),
        metric_value(kpis.sharpe_ratio, RATIO_DECIMALS),
    );
    map.insert(
        "max_drawdown".to_string(),
        metric_value(kpis.max_drawdown, RATIO_DECIMALS),
    );
    map.insert(
        "return_on_max_drawdown".to_string(),
        metric_value(kpis.return_on_max_drawdown, RATIO_DECIMALS),
    );
    map.insert(
        "num_trades".to_string(),
        MetricValue::Number(kpis.num_trades as f64),
    );
    map.insert(
        "short_only_max_drawdown".to_string(),
        metric_value(kpis.short_only_max_drawdown, RATIO_DECIMALS),
    );
    map
}

fn metric_value(value: f64, decimals: u32) -> MetricValue {
    if value.is_nan() {
        MetricValue::Text("nan".to_string())
    } else if value == f64::INFINITY {
        MetricValue::Text("inf".to_string())
    } else if value == f64::NEG_INFINITY {
        MetricValue::Text("-inf".to_string())
    } else {
        MetricValue::Number(round_to_decimals(value, decimals))
    }
}

#[allow(clippy::cast_possible_wrap)] // decimals is always small (< 10)
fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
