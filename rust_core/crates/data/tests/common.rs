use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use hedge_types::PriceBar;
use parquet::arrow::arrow_writer::ArrowWriter;

pub fn days_since_epoch(date: NaiveDate) -> i32 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    i32::try_from((date - epoch).num_days()).unwrap()
}

pub fn write_bar_parquet(path: &Path, bars: &[PriceBar]) -> Result<(), Box<dyn std::error::Error>> {
    let dates: Vec<i32> = bars.iter().map(|b| days_since_epoch(b.date)).collect();
    let opens: Vec<f64> = bars.iter().map(|b| b.open).collect();
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let adjusted: Vec<f64> = bars.iter().map(|b| b.adjusted_close).collect();
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

    let fields = vec![
        Field::new("date", DataType::Date32, false),
        Field::new("open", DataType::Float64, false),
        Field::new("high", DataType::Float64, false),
        Field::new("low", DataType::Float64, false),
        Field::new("close", DataType::Float64, false),
        Field::new("adjusted_close", DataType::Float64, false),
        Field::new("volume", DataType::Float64, false),
    ];

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Date32Array::from(dates)),
        Arc::new(Float64Array::from(opens)),
        Arc::new(Float64Array::from(highs)),
        Arc::new(Float64Array::from(lows)),
        Arc::new(Float64Array::from(closes)),
        Arc::new(Float64Array::from(adjusted)),
        Arc::new(Float64Array::from(volumes)),
    ];

    write_custom_parquet(path, fields, columns)
}

pub fn write_custom_parquet(
    path: &Path,
    fields: Vec<Field>,
    columns: Vec<ArrayRef>,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), columns)?;
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close().map(|_| ()).map_err(|e| e.into())
}

pub fn sample_bars() -> Vec<PriceBar> {
    vec![
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: 42_000.0,
            high: 45_500.0,
            low: 41_800.0,
            close: 44_950.0,
            adjusted_close: 44_950.0,
            volume: 2_100.0,
        },
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            open: 44_950.0,
            high: 45_100.0,
            low: 40_700.0,
            close: 42_850.0,
            adjusted_close: 42_850.0,
            volume: 3_400.0,
        },
    ]
}
