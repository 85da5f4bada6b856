//! Relative and absolute error between real-valued results.

use crate::error::DegenerateInput;
use crate::result::{ContinuousMetrics, Extremum};

/// Relative error between a reference value and a candidate value.
///
/// - either value NaN: 1.0
/// - exactly one value is +inf, or exactly one is -inf: 1.0
/// - both exactly zero: 0.0
/// - otherwise `|v1 - v2| / max(|v1|, |v2|)`
pub fn relative_error(reference: f64, candidate: f64) -> f64 {
    if reference.is_nan() || candidate.is_nan() {
        return 1.0;
    }
    if (reference == f64::INFINITY) != (candidate == f64::INFINITY) {
        return 1.0;
    }
    if (reference == f64::NEG_INFINITY) != (candidate == f64::NEG_INFINITY) {
        return 1.0;
    }
    if reference == 0.0 && candidate == 0.0 {
        return 0.0;
    }
    (reference - candidate).abs() / reference.abs().max(candidate.abs())
}

/// Absolute difference; a NaN candidate counts as missing, giving `|reference|`.
pub fn absolute_difference(reference: f64, candidate: f64) -> f64 {
    if candidate.is_nan() {
        reference.abs()
    } else {
        (reference - candidate).abs()
    }
}

/// Per-element (relative, absolute) errors.
pub(crate) fn element_errors(reference: &[f64], candidate: &[f64], parallel: bool) -> Vec<(f64, f64)> {
    let errors = |(&r, &c): (&f64, &f64)| (relative_error(r, c), absolute_difference(r, c));

    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return crate::thread_pool::install(|| {
            reference.par_iter().zip(candidate.par_iter()).map(errors).collect()
        });
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    reference.iter().zip(candidate).map(errors).collect()
}

/// Metrics over equal-length slices.
///
/// Callers check the lengths; extra elements of the longer slice are ignored.
pub fn continuous_metrics(reference: &[f64], candidate: &[f64], parallel: bool) -> ContinuousMetrics {
    let errors = element_errors(reference, candidate, parallel);

    let mut max_relative = Extremum::ZERO;
    let mut max_absolute = Extremum::ZERO;
    let mut sum_relative = 0.0;
    let mut sum_absolute = 0.0;

    for (i, &(rel, abs)) in errors.iter().enumerate() {
        let (r, c) = (reference[i], candidate[i]);
        max_relative.offer(rel, i, r, c);
        sum_relative += rel;
        max_absolute.offer(abs, i, r, c);
        sum_absolute += abs;
    }

    let len = errors.len();
    let mean = |sum: f64| {
        if len == 0 {
            Err(DegenerateInput::EmptyResult)
        } else {
            Ok(sum / len as f64)
        }
    };

    ContinuousMetrics {
        len,
        max_relative,
        mean_relative: mean(sum_relative),
        max_absolute,
        mean_absolute: mean(sum_absolute),
    }
}
