//! Common checks shared by the correlation implementations.

use crate::error::{CorrelationError, CorrelationResult};
use tp_core::numeric::{ensure_finite, ensure_non_negative, ensure_positive};

/// Ensure an input is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> CorrelationResult<f64> {
    ensure_positive(value, what).map_err(|_| CorrelationError::InvalidInput { what })
}

/// Ensure an input is finite and not negative.
pub fn check_non_negative(value: f64, what: &'static str) -> CorrelationResult<f64> {
    ensure_non_negative(value, what).map_err(|_| CorrelationError::InvalidInput { what })
}

/// Ensure quality lies in the closed interval [0, 1].
pub fn check_quality(x: f64) -> CorrelationResult<f64> {
    if x.is_finite() && (0.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(CorrelationError::InvalidInput {
            what: "quality must lie within [0, 1]",
        })
    }
}

/// Ensure an intermediate quantity is finite and strictly positive.
pub fn require_positive(value: f64, what: &'static str) -> CorrelationResult<f64> {
    ensure_positive(value, what).map_err(|_| CorrelationError::NumericDomain { what })
}

/// Ensure an intermediate quantity is finite.
pub fn require_finite(value: f64, what: &'static str) -> CorrelationResult<f64> {
    ensure_finite(value, what).map_err(|_| CorrelationError::NumericDomain { what })
}

/// Final guard on a correlation result: finite and non-negative.
pub fn finish(dp: f64, what: &'static str) -> CorrelationResult<f64> {
    if dp.is_finite() && dp >= 0.0 {
        Ok(dp)
    } else {
        Err(CorrelationError::NumericDomain { what })
    }
}
