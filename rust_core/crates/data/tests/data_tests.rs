use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field};
use chrono::NaiveDate;
use tempfile::tempdir;

use hedge_data::{
    load_price_bars, load_price_table, parse_price_bars_json, validate_price_bars, DataError,
};

mod common;
use common::{days_since_epoch, sample_bars, write_bar_parquet, write_custom_parquet};
use proptest::prelude::*;

#[test]
fn test_load_price_bars_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("btc.parquet");
    let bars = sample_bars();
    write_bar_parquet(&path, &bars).unwrap();

    let loaded = load_price_bars(&path).unwrap();
    assert_eq!(loaded, bars);
}

#[test]
fn test_load_price_table_validates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.parquet");
    let mut bars = sample_bars();
    bars[1].low = bars[1].high + 1.0;
    write_bar_parquet(&path, &bars).unwrap();

    // Raw loading does not validate.
    assert!(load_price_bars(&path).is_ok());

    let err = load_price_table(&path).unwrap_err();
    assert!(matches!(err, DataError::CorruptData(_)));
}

#[test]
fn test_load_price_table_rejects_non_monotonic_dates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("unordered.parquet");
    let mut bars = sample_bars();
    bars.swap(0, 1);
    write_bar_parquet(&path, &bars).unwrap();

    let err = load_price_table(&path).unwrap_err();
    assert!(matches!(err, DataError::CorruptData(_)));
}

#[test]
fn test_load_int_volume_and_adj_close_alias() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("int_volume.parquet");
    let date = days_since_epoch(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

    let fields = vec![
        Field::new("date", DataType::Date32, false),
        Field::new("open", DataType::Float64, false),
        Field::new("high", DataType::Float64, false),
        Field::new("low", DataType::Float64, false),
        Field::new("close", DataType::Float64, false),
        Field::new("adj_close", DataType::Float64, false),
        Field::new("volume", DataType::Int64, false),
    ];
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Date32Array::from(vec![date])),
        Arc::new(Float64Array::from(vec![10.0])),
        Arc::new(Float64Array::from(vec![11.0])),
        Arc::new(Float64Array::from(vec![9.0])),
        Arc::new(Float64Array::from(vec![10.5])),
        Arc::new(Float64Array::from(vec![10.4])),
        Arc::new(Int64Array::from(vec![500_i64])),
    ];
    write_custom_parquet(&path, fields, columns).unwrap();

    let bars = load_price_table(&path).unwrap();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    assert!((bars[0].adjusted_close - 10.4).abs() < 1e-10);
    assert!((bars[0].volume - 500.0).abs() < 1e-10);
}

#[test]
fn test_load_missing_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.parquet");
    let fields = vec![
        Field::new("date", DataType::Date32, false),
        Field::new("open", DataType::Float64, false),
    ];
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Date32Array::from(vec![19_000])),
        Arc::new(Float64Array::from(vec![1.0])),
    ];
    write_custom_parquet(&path, fields, columns).unwrap();

    let err = load_price_bars(&path).unwrap_err();
    assert!(matches!(err, DataError::MissingColumn(ref c) if c == "high"));
}

#[test]
fn test_load_wrong_date_type() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("float_date.parquet");
    let fields = vec![Field::new("date", DataType::Float64, false)];
    let columns: Vec<ArrayRef> = vec![Arc::new(Float64Array::from(vec![1.0]))];
    write_custom_parquet(&path, fields, columns).unwrap();

    let err = load_price_bars(&path).unwrap_err();
    assert!(matches!(err, DataError::InvalidColumnType(ref c) if c == "date"));
}

#[test]
fn test_load_missing_file() {
    let err = load_price_bars(std::path::Path::new("/nonexistent/prices.parquet")).unwrap_err();
    assert!(matches!(err, DataError::FileNotFound(_, _)));
}

#[test]
fn test_load_price_table_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("eod.json");
    std::fs::write(
        &path,
        r#"[
            {"date": "2024-01-02", "open": "42000", "high": "45500", "low": "41800",
             "close": "44950", "adjusted_close": "44950", "volume": "2100"},
            {"date": "2024-01-03", "open": 44950, "high": 45100, "low": 40700,
             "close": 42850, "adjusted_close": 42850, "volume": 3400}
        ]"#,
    )
    .unwrap();

    let bars = load_price_table(&path).unwrap();
    assert_eq!(bars, sample_bars());
}

#[test]
fn test_load_price_table_json_rejects_nulls() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nulls.json");
    std::fs::write(
        &path,
        r#"[{"date": "2024-01-02", "open": 1, "high": 2, "low": 1,
             "close": null, "adjusted_close": 1.5}]"#,
    )
    .unwrap();

    let err = load_price_table(&path).unwrap_err();
    assert!(matches!(err, DataError::CorruptData(_)));
}

#[test]
fn test_load_price_table_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prices.csv");
    std::fs::write(&path, "date,open\n").unwrap();

    let err = load_price_table(&path).unwrap_err();
    assert!(matches!(err, DataError::UnsupportedFormat(_)));
}

#[test]
fn test_parse_json_keeps_order_for_validation() {
    let payload = r#"[
        {"date": "2024-01-03", "open": 1, "high": 2, "low": 1, "close": 1.5, "adj_close": 1.5},
        {"date": "2024-01-02", "open": 1, "high": 2, "low": 1, "close": 1.5, "adj_close": 1.5}
    ]"#;
    let bars = parse_price_bars_json(payload).unwrap();
    assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    assert!(validate_price_bars(&bars).is_err());
}

proptest! {
    #[test]
    fn prop_valid_sequences_pass_validation(seq in generators::valid_bar_sequence(20)) {
        validate_price_bars(&seq).unwrap();
    }
}
