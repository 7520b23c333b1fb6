//! Exponentially weighted mean
//!
//! Adjusted form: each output is the weighted average of all observations
//! so far with weights `(1 - alpha)^age`. Missing values (NaN) still age
//! the existing weights but add no observation. Leading NaNs are skipped.

/// Exponentially weighted mean of `values`.
///
/// Output is NaN until `min_periods` observations have been seen.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn ewm_mean(values: &[f64], alpha: f64, min_periods: usize) -> Vec<f64> {
    let mut result = vec![f64::NAN; values.len()];
    let Some(&first) = values.first() else {
        return result;
    };

    let min_periods = min_periods.max(1);
    let old_wt_factor = 1.0 - alpha;
    let mut old_wt = 1.0;
    let mut weighted = first;
    let mut nobs = usize::from(!first.is_nan());

    if nobs >= min_periods {
        result[0] = weighted;
    }

    for (i, &cur) in values.iter().enumerate().skip(1) {
        let is_observation = !cur.is_nan();
        nobs += usize::from(is_observation);

        if !weighted.is_nan() {
            old_wt *= old_wt_factor;
            if is_observation {
                if weighted != cur {
                    weighted = (old_wt * weighted + cur) / (old_wt + 1.0);
                }
                old_wt += 1.0;
            }
        } else if is_observation {
            weighted = cur;
        }

        if nobs >= min_periods {
            result[i] = weighted;
        }
    }

    result
}

/// Wilder smoothing: `alpha = 1 / period`, undefined until `period`
/// observations.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn wilder_smooth(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 {
        return vec![f64::NAN; values.len()];
    }
    ewm_mean(values, 1.0 / period as f64, period)
}
