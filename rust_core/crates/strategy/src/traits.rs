//! Signal rule trait
//!
//! A signal rule declares the indicator columns it reads and turns an
//! indicator table into one hedge instruction per row.

use hedge_indicators::IndicatorTable;
use hedge_types::{HedgeSignal, IndicatorSpec, SignalSnapshot};

use crate::error::StrategyError;

/// Trait for hedge signal rules.
///
/// Rules are stateless: the same table always yields the same signals, so a
/// rule can be shared between concurrent runs.
pub trait SignalRule: Send + Sync {
    /// Name of the rule for registry lookup.
    fn name(&self) -> &str;

    /// Indicators the rule reads.
    ///
    /// Used for pre-computation and warm-up trimming.
    fn required_indicators(&self) -> Vec<IndicatorSpec>;

    /// Column names of [`SignalRule::required_indicators`].
    fn required_columns(&self) -> Vec<String> {
        self.required_indicators()
            .iter()
            .flat_map(IndicatorSpec::column_names)
            .collect()
    }

    /// Elementwise hedge instruction for every row of `table`.
    ///
    /// Rows with an undefined input yield [`HedgeSignal::None`].
    ///
    /// # Errors
    /// Returns [`StrategyError::MissingIndicator`] when a required column is
    /// absent.
    fn generate(&self, table: &IndicatorTable) -> Result<Vec<HedgeSignal>, StrategyError>;

    /// Status of the rule at row `idx`.
    ///
    /// # Errors
    /// Returns [`StrategyError::MissingIndicator`] when a required column is
    /// absent.
    fn snapshot_at(&self, table: &IndicatorTable, idx: usize)
        -> Result<SignalSnapshot, StrategyError>;
}
