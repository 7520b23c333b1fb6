//! EOD-style JSON price rows.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::DataError;
use hedge_types::PriceBar;

/// Numeric cell that may arrive as a number, a numeric string, or null.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumericCell {
    Number(f64),
    Text(String),
    Null(()),
}

impl NumericCell {
    /// Unparseable strings and nulls become NaN and fail validation later.
    fn to_f64(&self) -> f64 {
        match self {
            NumericCell::Number(v) => *v,
            NumericCell::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            NumericCell::Null(()) => f64::NAN,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRow {
    date: NaiveDate,
    open: NumericCell,
    high: NumericCell,
    low: NumericCell,
    close: NumericCell,
    #[serde(alias = "adj_close")]
    adjusted_close: NumericCell,
    #[serde(default)]
    volume: Option<NumericCell>,
}

impl From<RawRow> for PriceBar {
    fn from(row: RawRow) -> Self {
        PriceBar {
            date: row.date,
            open: row.open.to_f64(),
            high: row.high.to_f64(),
            low: row.low.to_f64(),
            close: row.close.to_f64(),
            adjusted_close: row.adjusted_close.to_f64(),
            volume: row.volume.map_or(0.0, |v| v.to_f64()),
        }
    }
}

/// Parses a JSON array of daily rows into price bars (input order kept).
///
/// # Errors
/// - [`DataError::ParseError`] when the payload is not an array of rows.
/// - [`DataError::EmptyData`] when the array is empty.
pub fn parse_price_bars_json(payload: &str) -> Result<Vec<PriceBar>, DataError> {
    let rows: Vec<RawRow> =
        serde_json::from_str(payload).map_err(|e| DataError::ParseError(e.to_string()))?;

    if rows.is_empty() {
        return Err(DataError::EmptyData);
    }

    Ok(rows.into_iter().map(PriceBar::from).collect())
}
