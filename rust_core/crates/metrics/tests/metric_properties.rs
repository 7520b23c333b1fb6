use hedge_metrics::{analyze, drawdown_stats, kpis_to_map, max_drawdown};
use hedge_types::MetricValue;
use proptest::prelude::*;

fn equity_curve() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0_f64..10_000.0, 1..200).prop_map(|mut values| {
        values[0] = values[0].max(1.0);
        values
    })
}

proptest! {
    #[test]
    fn prop_max_drawdown_bounded(equity in equity_curve()) {
        let dd = max_drawdown(&equity);
        prop_assert!((-1.0..=0.0).contains(&dd), "drawdown {dd}");
    }

    #[test]
    fn prop_drawdown_stats_consistent(equity in equity_curve()) {
        let stats = drawdown_stats(&equity);
        prop_assert!((stats.max_drawdown - max_drawdown(&equity)).abs() < 1e-12);
        prop_assert!(stats.max_drawdown_abs >= 0.0);
        prop_assert!(stats.max_duration_bars <= equity.len() as u64);
    }

    #[test]
    fn prop_analyze_repeatable(
        equity in prop::collection::vec(1.0_f64..10_000.0, 2..100),
    ) {
        let positions = vec![1.0; equity.len()];
        let first = analyze(&equity, &positions, None);
        let second = analyze(&equity, &positions, None);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.num_trades, 0);
        prop_assert!((-1.0..=0.0).contains(&first.max_drawdown));
    }
}

#[test]
fn test_output_contract_serializes_infinity_as_text() {
    let kpis = analyze(&[100.0, 101.0, 102.0], &[1.0, 1.0, 1.0], None);
    let map = kpis_to_map(&kpis);

    assert_eq!(map["profit_factor"], MetricValue::Text("inf".to_string()));
    assert_eq!(map["profit_factor"].as_f64(), Some(f64::INFINITY));

    let json = serde_json::to_string(&map).unwrap();
    assert!(json.contains("\"return_on_max_drawdown\":\"inf\""));
}
