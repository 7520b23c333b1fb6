use std::path::Path;

use arrow::array::{Array, Date32Array, Float64Array, Int64Array};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::info;

use crate::error::DataError;
use crate::json::parse_price_bars_json;
use crate::validation::validate_price_bars;
use hedge_types::PriceBar;

/// Loads price bars from a Parquet file with schema:
/// `date` (Date32), `open`, `high`, `low`, `close`, `adjusted_close`
/// (or `adj_close`) as Float64, and `volume` as Float64 or Int64.
///
/// # Errors
/// Returns [`DataError`] when the file is missing, a column is missing or
/// mistyped, a cell is null, or the file holds no rows.
pub fn load_price_bars(path: &Path) -> Result<Vec<PriceBar>, DataError> {
    let file = std::fs::File::open(path)
        .map_err(|e| DataError::FileNotFound(path.display().to_string(), e.to_string()))?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| DataError::ParseError(e.to_string()))?;
    let reader = builder
        .build()
        .map_err(|e| DataError::ParseError(e.to_string()))?;

    let mut bars = Vec::new();
    let mut processed_rows = 0usize;

    for batch_result in reader {
        let batch = batch_result.map_err(|e| DataError::ParseError(e.to_string()))?;

        let date_arr = batch
            .column_by_name("date")
            .ok_or_else(|| DataError::MissingColumn("date".to_string()))?
            .as_any()
            .downcast_ref::<Date32Array>()
            .ok_or_else(|| DataError::InvalidColumnType("date".to_string()))?;

        let open_arr = numeric_f64_column(&batch, &["open"])?;
        let high_arr = numeric_f64_column(&batch, &["high"])?;
        let low_arr = numeric_f64_column(&batch, &["low"])?;
        let close_arr = numeric_f64_column(&batch, &["close"])?;
        let adj_arr = numeric_f64_column(&batch, &["adjusted_close", "adj_close"])?;
        let volume_arr = numeric_f64_or_i64_column(&batch, "volume")?;

        for row_idx in 0..batch.num_rows() {
            let row = processed_rows + row_idx;
            let date = (!date_arr.is_null(row_idx))
                .then(|| date_arr.value_as_date(row_idx))
                .flatten()
                .ok_or_else(|| DataError::CorruptData(format!("Invalid date at row {row}")))?;

            bars.push(PriceBar {
                date,
                open: non_null(open_arr, row_idx, "open", row)?,
                high: non_null(high_arr, row_idx, "high", row)?,
                low: non_null(low_arr, row_idx, "low", row)?,
                close: non_null(close_arr, row_idx, "close", row)?,
                adjusted_close: non_null(adj_arr, row_idx, "adjusted_close", row)?,
                volume: volume_arr.value(row_idx, row)?,
            });
        }

        processed_rows += batch.num_rows();
    }

    if bars.is_empty() {
        return Err(DataError::EmptyData);
    }

    Ok(bars)
}

/// Loads a price table by file extension (`.parquet` or `.json`) and
/// validates it.
///
/// # Errors
/// Returns [`DataError`] on unsupported extensions, I/O or decode failures,
/// and contract violations.
pub fn load_price_table(path: &Path) -> Result<Vec<PriceBar>, DataError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let bars = match extension.as_str() {
        "parquet" => load_price_bars(path)?,
        "json" => {
            let payload = std::fs::read_to_string(path)
                .map_err(|e| DataError::FileNotFound(path.display().to_string(), e.to_string()))?;
            parse_price_bars_json(&payload)?
        }
        _ => return Err(DataError::UnsupportedFormat(path.display().to_string())),
    };

    validate_price_bars(&bars)?;

    info!(
        path = %path.display(),
        rows = bars.len(),
        first = %bars[0].date,
        last = %bars[bars.len() - 1].date,
        "price table loaded"
    );

    Ok(bars)
}

fn non_null(arr: &Float64Array, idx: usize, name: &str, row: usize) -> Result<f64, DataError> {
    if arr.is_null(idx) {
        return Err(DataError::CorruptData(format!(
            "Null {name} at row {row}"
        )));
    }
    Ok(arr.value(idx))
}

enum NumericAccessor<'a> {
    F64(&'a Float64Array),
    I64(&'a Int64Array),
}

impl NumericAccessor<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn value(&self, idx: usize, row: usize) -> Result<f64, DataError> {
        let is_null = match self {
            NumericAccessor::F64(arr) => arr.is_null(idx),
            NumericAccessor::I64(arr) => arr.is_null(idx),
        };
        if is_null {
            return Err(DataError::CorruptData(format!("Null volume at row {row}")));
        }
        Ok(match self {
            NumericAccessor::F64(arr) => arr.value(idx),
            NumericAccessor::I64(arr) => arr.value(idx) as f64,
        })
    }
}

fn numeric_f64_column<'a>(
    batch: &'a RecordBatch,
    names: &[&str],
) -> Result<&'a Float64Array, DataError> {
    let (name, col) = names
        .iter()
        .find_map(|name| batch.column_by_name(name).map(|col| (*name, col)))
        .ok_or_else(|| DataError::MissingColumn(names[0].to_string()))?;
    col.as_any()
        .downcast_ref::<Float64Array>()
        .ok_or_else(|| DataError::InvalidColumnType(name.to_string()))
}

fn numeric_f64_or_i64_column<'a>(
    batch: &'a RecordBatch,
    name: &str,
) -> Result<NumericAccessor<'a>, DataError> {
    let col = batch
        .column_by_name(name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;

    if let Some(arr) = col.as_any().downcast_ref::<Float64Array>() {
        Ok(NumericAccessor::F64(arr))
    } else if let Some(arr) = col.as_any().downcast_ref::<Int64Array>() {
        Ok(NumericAccessor::I64(arr))
    } else {
        Err(DataError::InvalidColumnType(name.to_string()))
    }
}
