use chrono::NaiveDate;

use crate::price_field::PriceField;

/// One daily OHLCV row of the price table.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PriceBar {
    /// Trading date (rows are strictly increasing by date)
    pub date: NaiveDate,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Split/dividend adjusted close
    #[serde(alias = "adj_close")]
    pub adjusted_close: f64,
    /// Volume
    #[serde(default)]
    pub volume: f64,
}

impl PriceBar {
    /// Returns the value of the requested field.
    #[must_use]
    pub fn price(&self, field: PriceField) -> f64 {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
            PriceField::AdjustedClose => self.adjusted_close,
            PriceField::Volume => self.volume,
        }
    }
}

/// Extracts one field of every bar as a column.
#[must_use]
pub fn column(bars: &[PriceBar], field: PriceField) -> Vec<f64> {
    bars.iter().map(|bar| bar.price(field)).collect()
}
