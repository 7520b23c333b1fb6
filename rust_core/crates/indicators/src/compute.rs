//! Spec-driven indicator computation over a price table.

use hedge_types::{IndicatorSpec, PriceBar};
use tracing::{debug, warn};

use crate::cache::IndicatorCache;
use crate::error::IndicatorError;
use crate::impl_::bollinger::BollingerBands;
use crate::registry::IndicatorRegistry;
use crate::table::IndicatorTable;
use crate::traits::IndicatorKey;

/// Checks indicator parameters before any computation.
///
/// # Errors
/// Returns [`IndicatorError::InvalidParams`] for a zero period, a Bollinger
/// period below 2, or a negative/non-finite band multiplier.
pub fn validate_spec(spec: &IndicatorSpec) -> Result<(), IndicatorError> {
    if spec.period() == 0 {
        return Err(IndicatorError::invalid_params(format!(
            "{} period must be > 0",
            spec.kind()
        )));
    }

    if let IndicatorSpec::Bollinger {
        period,
        std_multiplier,
        ..
    } = *spec
    {
        if period < 2 {
            return Err(IndicatorError::invalid_params(
                "BOLLINGER period must be >= 2",
            ));
        }
        if !std_multiplier.is_finite() || std_multiplier < 0.0 {
            return Err(IndicatorError::invalid_params(format!(
                "BOLLINGER std_multiplier must be finite and >= 0, got {std_multiplier}"
            )));
        }
    }

    Ok(())
}

/// Computes the requested indicators into a fresh table.
///
/// Identical input produces bit-identical output; nothing is shared between
/// calls.
///
/// # Errors
/// Returns [`IndicatorError`] when a spec is invalid.
pub fn compute_indicators(
    bars: &[PriceBar],
    specs: &[IndicatorSpec],
) -> Result<IndicatorTable, IndicatorError> {
    let mut cache = IndicatorCache::new();
    compute_indicators_cached(bars, specs, &mut cache)
}

/// Computes the requested indicators, reusing series already in `cache`.
///
/// A cache filled from any other series is cleared first.
///
/// # Errors
/// Returns [`IndicatorError`] when a spec is invalid.
pub fn compute_indicators_cached(
    bars: &[PriceBar],
    specs: &[IndicatorSpec],
    cache: &mut IndicatorCache,
) -> Result<IndicatorTable, IndicatorError> {
    for spec in specs {
        validate_spec(spec)?;
    }

    let cached_len = cache.series_len();
    if cache.bind(bars) {
        warn!(
            cached_len,
            bars = bars.len(),
            "indicator cache belongs to another series, clearing"
        );
    }

    let registry = IndicatorRegistry::with_defaults();
    let mut table = IndicatorTable::new(bars.to_vec());

    for spec in specs {
        let key = IndicatorKey::from(spec);
        let hit = cache.contains(&key) || cache.contains(&key.with_output_suffix("upper"));

        let outputs = match *spec {
            IndicatorSpec::Bollinger {
                period,
                std_multiplier,
                source,
            } => {
                let bands = BollingerBands::new(period, std_multiplier).with_source(source);
                cache.get_or_compute_multi(&key, bars, &bands)
            }
            _ => {
                let indicator = registry.create(&key)?;
                vec![cache.get_or_compute(&key, bars, indicator.as_ref()).to_vec()]
            }
        };

        for (name, values) in spec.column_names().into_iter().zip(outputs) {
            table.insert_column(name, values)?;
        }

        debug!(
            kind = spec.kind(),
            period = spec.period(),
            cache_hit = hit,
            "indicator computed"
        );
    }

    Ok(table)
}
