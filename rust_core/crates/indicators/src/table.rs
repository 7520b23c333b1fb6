//! Price bars with aligned indicator columns.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use hedge_types::PriceBar;

use crate::error::IndicatorError;

/// Price bars plus named indicator columns aligned 1:1 with the bars.
///
/// Undefined (warm-up) entries are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTable {
    bars: Vec<PriceBar>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl IndicatorTable {
    /// Creates a table without indicator columns.
    #[must_use]
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self {
            bars,
            columns: BTreeMap::new(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns true when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Price bars of the table.
    #[must_use]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Dates of all rows.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Indicator column names in sorted order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Gets an indicator column.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Gets an indicator column that must exist.
    ///
    /// # Errors
    /// Returns [`IndicatorError::MissingColumn`] when absent.
    pub fn require(&self, name: &str) -> Result<&[f64], IndicatorError> {
        self.column(name)
            .ok_or_else(|| IndicatorError::MissingColumn(name.to_string()))
    }

    /// Adds or replaces a column.
    ///
    /// # Errors
    /// Returns [`IndicatorError::LengthMismatch`] when `values` is not aligned
    /// with the bars.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), IndicatorError> {
        let name = name.into();
        if values.len() != self.bars.len() {
            return Err(IndicatorError::LengthMismatch {
                name,
                expected: self.bars.len(),
                actual: values.len(),
            });
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// Index of the first row where every named column is defined.
    ///
    /// # Errors
    /// Returns [`IndicatorError::MissingColumn`] when a name is absent.
    pub fn first_complete_row(&self, names: &[String]) -> Result<Option<usize>, IndicatorError> {
        let columns = names
            .iter()
            .map(|name| self.require(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((0..self.len()).find(|&i| columns.iter().all(|col| !col[i].is_nan())))
    }

    /// Rows `start..`, with every column sliced alike.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> Self {
        let start = start.min(self.len());
        Self {
            bars: self.bars[start..].to_vec(),
            columns: self
                .columns
                .iter()
                .map(|(name, values)| (name.clone(), values[start..].to_vec()))
                .collect(),
        }
    }
}
