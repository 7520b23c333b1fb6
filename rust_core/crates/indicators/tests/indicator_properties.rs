use chrono::{Duration, NaiveDate};
use hedge_indicators::{compute_indicators, Indicator, ADX, RSI, SMA};
use hedge_types::{IndicatorSpec, PriceBar, PriceField};
use proptest::prelude::*;

fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            date: start + Duration::days(i as i64),
            open: close,
            high: close * 1.02,
            low: close * 0.98,
            close,
            adjusted_close: close,
            volume: 1.0,
        })
        .collect()
}

fn flat_bars(n: usize, price: f64) -> Vec<PriceBar> {
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    (0..n)
        .map(|i| PriceBar {
            date: start + Duration::days(i as i64),
            open: price,
            high: price,
            low: price,
            close: price,
            adjusted_close: price,
            volume: 0.0,
        })
        .collect()
}

fn all_specs() -> Vec<IndicatorSpec> {
    vec![
        IndicatorSpec::Sma {
            period: 5,
            source: PriceField::AdjustedClose,
        },
        IndicatorSpec::Rsi {
            period: 7,
            source: PriceField::AdjustedClose,
        },
        IndicatorSpec::Bollinger {
            period: 10,
            std_multiplier: 2.0,
            source: PriceField::AdjustedClose,
        },
        IndicatorSpec::Adx { period: 6 },
    ]
}

#[test]
fn test_flat_series_resolves_without_nan_after_warmup() {
    let bars = flat_bars(60, 30_000.0);
    let table = compute_indicators(&bars, &all_specs()).unwrap();

    let rsi = table.column("rsi_7").unwrap();
    let adx = table.column("adx_6").unwrap();
    assert!(rsi[6..].iter().all(|v| (v - 50.0).abs() < 1e-10));
    assert!(adx[11..].iter().all(|v| v.abs() < 1e-10));
}

#[test]
fn test_warmup_lengths_match_trait() {
    let bars = bars_from_closes(&(1..=50).map(f64::from).collect::<Vec<_>>());

    let sma = SMA::new(10);
    let rsi = RSI::new(10);
    let adx = ADX::new(10);

    for indicator in [&sma as &dyn Indicator, &rsi, &adx] {
        let values = indicator.compute(&bars);
        let first = values.iter().position(|v| !v.is_nan()).unwrap();
        assert_eq!(
            first + 1,
            indicator.warmup_periods(),
            "{}",
            indicator.name()
        );
    }
}

proptest! {
    #[test]
    fn prop_compute_indicators_is_repeatable(
        closes in prop::collection::vec(10.0f64..1_000.0, 1..80)
    ) {
        let bars = bars_from_closes(&closes);
        let first = compute_indicators(&bars, &all_specs()).unwrap();
        let second = compute_indicators(&bars, &all_specs()).unwrap();

        for name in first.column_names() {
            let a = first.column(name).unwrap();
            let b = second.column(name).unwrap();
            prop_assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(b) {
                prop_assert_eq!(x.to_bits(), y.to_bits());
            }
        }
    }

    #[test]
    fn prop_sma_of_constant_is_constant(
        price in 1.0f64..100_000.0,
        len in 1usize..60,
        period in 1usize..20,
    ) {
        let bars = flat_bars(len, price);
        let values = SMA::new(period).compute(&bars);

        for value in values.iter().filter(|v| !v.is_nan()) {
            prop_assert!((value - price).abs() <= price * 1e-12);
        }
    }

    #[test]
    fn prop_rsi_and_adx_stay_in_range(
        closes in prop::collection::vec(10.0f64..1_000.0, 30..120)
    ) {
        let bars = bars_from_closes(&closes);
        let rsi = RSI::new(14).compute(&bars);
        let adx = ADX::new(7).compute(&bars);

        for value in rsi.iter().chain(&adx).filter(|v| !v.is_nan()) {
            prop_assert!((0.0..=100.0 + 1e-9).contains(value));
        }
    }
}
