//! Error types for friction factor and correlation calculations.

use thiserror::Error;
use tp_core::error::TpError;

/// Errors raised by a friction factor provider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrictionError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical friction factor: {what}")]
    NonPhysical { what: &'static str },

    #[error("Friction factor did not converge after {iterations} iterations (Re={reynolds})")]
    ConvergenceFailed { reynolds: f64, iterations: usize },
}

pub type FrictionResult<T> = Result<T, FrictionError>;

/// Errors that can occur while evaluating a two-phase correlation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrelationError {
    /// Out-of-domain input (non-positive property, quality outside [0, 1], ...).
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// The selected correlation needs a parameter the flow state does not carry.
    #[error("{correlation} requires parameter `{param}`")]
    MissingParameter {
        correlation: &'static str,
        param: &'static str,
    },

    /// An intermediate quantity left the domain its formula needs.
    #[error("Numeric domain error: {what}")]
    NumericDomain { what: &'static str },

    #[error("Friction factor error: {0}")]
    Upstream(#[from] FrictionError),
}

pub type CorrelationResult<T> = Result<T, CorrelationError>;

impl From<FrictionError> for TpError {
    fn from(e: FrictionError) -> Self {
        match e {
            FrictionError::InvalidArg { what } => TpError::InvalidArg { what },
            FrictionError::NonPhysical { what } => TpError::Invariant { what },
            FrictionError::ConvergenceFailed { .. } => TpError::Invariant {
                what: "friction factor convergence",
            },
        }
    }
}

impl From<CorrelationError> for TpError {
    fn from(e: CorrelationError) -> Self {
        match e {
            CorrelationError::InvalidInput { what } => TpError::InvalidArg { what },
            CorrelationError::MissingParameter { param, .. } => TpError::InvalidArg { what: param },
            CorrelationError::NumericDomain { what } => TpError::Invariant { what },
            CorrelationError::Upstream(inner) => inner.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CorrelationError::InvalidInput { what: "quality" };
        assert!(err.to_string().contains("quality"));

        let err = CorrelationError::MissingParameter {
            correlation: "Friedel",
            param: "surface_tension",
        };
        let msg = err.to_string();
        assert!(msg.contains("Friedel"));
        assert!(msg.contains("surface_tension"));
    }

    #[test]
    fn friction_error_propagates_unchanged() {
        let friction = FrictionError::ConvergenceFailed {
            reynolds: 1e5,
            iterations: 3,
        };
        let err: CorrelationError = friction.clone().into();
        assert_eq!(err, CorrelationError::Upstream(friction));
    }

    #[test]
    fn error_conversion() {
        let err = CorrelationError::InvalidInput { what: "diameter" };
        let tp_err: TpError = err.into();
        assert!(matches!(tp_err, TpError::InvalidArg { what: "diameter" }));

        let err = CorrelationError::NumericDomain { what: "gamma" };
        let tp_err: TpError = err.into();
        assert!(matches!(tp_err, TpError::Invariant { .. }));
    }
}
