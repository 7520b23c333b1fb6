//! Latest hedge status
//!
//! What a notifier reports: is the hedge active on the most recent bar
//! whose inputs are all defined.

use hedge_indicators::IndicatorTable;
use hedge_types::SignalSnapshot;

use crate::error::StrategyError;
use crate::traits::SignalRule;

/// Snapshot of `rule` on the last row where all of its columns are defined.
///
/// Returns `None` when no row is fully defined.
///
/// # Errors
/// Returns [`StrategyError::MissingIndicator`] when a required column is
/// absent.
pub fn latest_snapshot(
    table: &IndicatorTable,
    rule: &dyn SignalRule,
) -> Result<Option<SignalSnapshot>, StrategyError> {
    let columns = rule
        .required_columns()
        .iter()
        .map(|name| table.require(name))
        .collect::<Result<Vec<_>, _>>()?;

    let last_defined =
        (0..table.len()).rev().find(|&i| columns.iter().all(|col| !col[i].is_nan()));

    last_defined
        .map(|idx| rule.snapshot_at(table, idx))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_::trend_adx::TrendAdxHedge;
    use chrono::NaiveDate;
    use hedge_types::PriceBar;
    use serde_json::json;

    fn make_table(fast: Vec<f64>, slow: Vec<f64>, adx: Vec<f64>) -> IndicatorTable {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let bars = (0..fast.len())
            .map(|i| PriceBar {
                date: start + chrono::Duration::days(i as i64),
                open: 1.0,
                high: 1.0,
                low: 1.0,
                close: 1.0,
                adjusted_close: 1.0,
                volume: 0.0,
            })
            .collect();
        let mut table = IndicatorTable::new(bars);
        table.insert_column("sma_2", fast).unwrap();
        table.insert_column("sma_3", slow).unwrap();
        table.insert_column("adx_2", adx).unwrap();
        table
    }

    fn rule() -> TrendAdxHedge {
        TrendAdxHedge::from_params(&json!({"fast_ma": 2, "slow_ma": 3, "adx_period": 2}))
            .unwrap()
    }

    #[test]
    fn test_latest_snapshot_uses_last_row() {
        let table = make_table(
            vec![f64::NAN, 5.0, 4.0],
            vec![f64::NAN, 6.0, 6.0],
            vec![f64::NAN, 10.0, 40.0],
        );

        let snapshot = latest_snapshot(&table, &rule()).unwrap().unwrap();
        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert!(snapshot.active);
        assert!((snapshot.threshold - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_latest_snapshot_skips_trailing_undefined() {
        let table = make_table(
            vec![5.0, 5.0, f64::NAN],
            vec![6.0, 6.0, 6.0],
            vec![10.0, 10.0, 10.0],
        );

        let snapshot = latest_snapshot(&table, &rule()).unwrap().unwrap();
        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert!(!snapshot.active);
    }

    #[test]
    fn test_latest_snapshot_none_when_undefined() {
        let table = make_table(vec![f64::NAN], vec![f64::NAN], vec![f64::NAN]);
        assert!(latest_snapshot(&table, &rule()).unwrap().is_none());
    }
}
