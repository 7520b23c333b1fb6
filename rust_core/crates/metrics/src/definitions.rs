//! Metric definition catalog.

use std::collections::BTreeMap;

/// Re-exported metric definition type shared with output contract.
pub use hedge_types::MetricDefinition;

/// Provides the default metric definitions for the output contract.
#[derive(Debug, Default)]
pub struct MetricDefinitions;

impl MetricDefinitions {
    /// Returns the metric definitions keyed by metric name.
    /// Uses `BTreeMap` for deterministic (sorted) key order in JSON output.
    #[must_use]
    pub fn definitions() -> BTreeMap<String, MetricDefinition> {
        [
            (
                "net_profit",
                "account_currency",
                "Final equity minus initial equity",
                "any",
                "equity",
                "number",
            ),
            (
                "profit_factor",
                "ratio",
                "Sum of positive bar returns over absolute sum of negative bar returns",
                ">=0 or inf",
                "equity",
                "number|string",
            ),
            (
                "sharpe_ratio",
                "ratio",
                "Mean over sample std of bar returns, annualized with sqrt(252)",
                "any",
                "equity",
                "number",
            ),
            (
                "max_drawdown",
                "ratio",
                "Worst decline from the running equity peak",
                "-1..0",
                "equity",
                "number",
            ),
            (
                "return_on_max_drawdown",
                "ratio",
                "Annualized return over absolute max drawdown",
                "any or inf",
                "equity",
                "number|string",
            ),
            (
                "num_trades",
                "count",
                "Bars whose position differs from the previous bar",
                ">=0",
                "positions",
                "number",
            ),
            (
                "short_only_max_drawdown",
                "ratio",
                "Max drawdown of the compounded hedge-only returns",
                "-1..0",
                "hedge_only_returns",
                "number",
            ),
        ]
        .into_iter()
        .map(|(name, unit, description, domain, source, value_type)| {
            (
                name.to_string(),
                MetricDefinition {
                    unit: unit.to_string(),
                    description: description.to_string(),
                    domain: domain.to_string(),
                    source: source.to_string(),
                    value_type: value_type.to_string(),
                },
            )
        })
        .collect()
    }
}
