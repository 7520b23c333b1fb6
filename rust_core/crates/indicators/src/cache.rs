//! Indicator cache for avoiding redundant computations.

use crate::traits::{Indicator, IndicatorKey, IntoMultiVecs, MultiOutputIndicator};
use chrono::NaiveDate;
use hedge_types::PriceBar;
use std::collections::{hash_map::Entry, HashMap};

/// Exact identity of a price series: dates plus the bit pattern of every
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SeriesFingerprint(Vec<(NaiveDate, [u64; 6])>);

impl SeriesFingerprint {
    fn bar_bits(bar: &PriceBar) -> (NaiveDate, [u64; 6]) {
        (
            bar.date,
            [
                bar.open.to_bits(),
                bar.high.to_bits(),
                bar.low.to_bits(),
                bar.close.to_bits(),
                bar.adjusted_close.to_bits(),
                bar.volume.to_bits(),
            ],
        )
    }

    fn of(bars: &[PriceBar]) -> Self {
        Self(bars.iter().map(Self::bar_bits).collect())
    }

    fn matches(&self, bars: &[PriceBar]) -> bool {
        self.0.len() == bars.len()
            && self
                .0
                .iter()
                .zip(bars)
                .all(|(bits, bar)| *bits == Self::bar_bits(bar))
    }
}

/// Cache for computed indicator values.
///
/// Stores computed indicator series to avoid redundant calculations.
/// Uses `IndicatorKey` as cache keys. A cache belongs to one price series:
/// handing it any other series drops every stored value first.
#[derive(Debug, Default)]
pub struct IndicatorCache {
    cache: HashMap<IndicatorKey, Vec<f64>>,
    series: Option<SeriesFingerprint>,
}

impl IndicatorCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if an indicator is already cached.
    #[must_use]
    pub fn contains(&self, key: &IndicatorKey) -> bool {
        self.cache.contains_key(key)
    }

    /// Gets cached values for an indicator, if present.
    #[must_use]
    pub fn get(&self, key: &IndicatorKey) -> Option<&[f64]> {
        self.cache.get(key).map(Vec::as_slice)
    }

    /// Length of the series the cache was filled from.
    #[must_use]
    pub fn series_len(&self) -> Option<usize> {
        self.series.as_ref().map(|fingerprint| fingerprint.0.len())
    }

    /// Binds the cache to `bars`.
    ///
    /// Returns true when the cache held values of another series, which are
    /// discarded.
    pub fn bind(&mut self, bars: &[PriceBar]) -> bool {
        if self.series.as_ref().is_some_and(|s| s.matches(bars)) {
            return false;
        }
        let foreign = self.series.is_some();
        self.cache.clear();
        self.series = Some(SeriesFingerprint::of(bars));
        foreign
    }

    /// Gets or computes a single-output indicator.
    ///
    /// If the indicator is already cached, returns the cached values.
    /// Otherwise, computes the indicator, caches it, and returns the values.
    pub fn get_or_compute(
        &mut self,
        key: &IndicatorKey,
        bars: &[PriceBar],
        indicator: &dyn Indicator,
    ) -> &[f64] {
        self.bind(bars);
        let values = match self.cache.entry(key.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(indicator.compute(bars)),
        };
        values.as_slice()
    }

    /// Gets or computes a multi-output indicator.
    ///
    /// Computes all outputs together and caches each output with a
    /// composite key (`base_name` + "_" + `output_name`). Returns the
    /// outputs in `output_names()` order.
    pub fn get_or_compute_multi<T>(
        &mut self,
        base_key: &IndicatorKey,
        bars: &[PriceBar],
        indicator: &T,
    ) -> Vec<Vec<f64>>
    where
        T: MultiOutputIndicator,
    {
        self.bind(bars);
        let output_names = indicator.output_names();
        let cached = output_names
            .iter()
            .all(|name| self.cache.contains_key(&base_key.with_output_suffix(name)));

        if !cached {
            let vecs = indicator.compute_all(bars).into_vecs();
            for (name, vec) in output_names.iter().zip(vecs) {
                self.cache.insert(base_key.with_output_suffix(name), vec);
            }
        }

        output_names
            .iter()
            .filter_map(|name| self.cache.get(&base_key.with_output_suffix(name)).cloned())
            .collect()
    }

    /// Clears all cached values.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.series = None;
    }

    /// Returns the number of cached series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Checks if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
