//! Quality sweeps for plotting a correlation across the two-phase region.

use crate::correlation::Correlation;
use crate::error::{CorrelationError, CorrelationResult};
use crate::flow::{FlowState, PipeGeometry};
use crate::friction::FrictionModel;

/// Linearly spaced qualities between `start` and `end`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualitySweep {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
}

impl QualitySweep {
    pub fn new(start: f64, end: f64, num_points: usize) -> CorrelationResult<Self> {
        if num_points < 2 {
            return Err(CorrelationError::InvalidInput {
                what: "sweep must have at least 2 points",
            });
        }
        for bound in [start, end] {
            if !(bound.is_finite() && (0.0..=1.0).contains(&bound)) {
                return Err(CorrelationError::InvalidInput {
                    what: "sweep bounds must lie within [0, 1]",
                });
            }
        }
        Ok(Self {
            start,
            end,
            num_points,
        })
    }

    /// The full two-phase range, endpoints included.
    pub fn full(num_points: usize) -> CorrelationResult<Self> {
        Self::new(0.0, 1.0, num_points)
    }

    pub fn points(&self) -> Vec<f64> {
        let n = self.num_points;
        (0..n)
            .map(|i| {
                if i == n - 1 {
                    // Land exactly on the end bound so x = 1 hits the endpoint branches
                    self.end
                } else {
                    self.start + (self.end - self.start) * i as f64 / (n - 1) as f64
                }
            })
            .collect()
    }
}

/// Outcome of a sweep; failed points keep their error instead of aborting.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub correlation: Correlation,
    pub qualities: Vec<f64>,
    /// Pressure drop in Pa, or the reason the point failed
    pub pressure_drops: Vec<CorrelationResult<f64>>,
}

impl SweepResult {
    pub fn num_successful(&self) -> usize {
        self.pressure_drops.iter().filter(|r| r.is_ok()).count()
    }

    pub fn num_failed(&self) -> usize {
        self.pressure_drops.len() - self.num_successful()
    }

    /// `(quality, pressure drop)` pairs for the points that succeeded.
    pub fn successful_points(&self) -> Vec<(f64, f64)> {
        self.qualities
            .iter()
            .zip(&self.pressure_drops)
            .filter_map(|(x, r)| r.as_ref().ok().map(|dp| (*x, *dp)))
            .collect()
    }
}

/// Evaluate `correlation` at every quality of `sweep`, holding everything
/// else in `state` fixed.
pub fn sweep_quality(
    correlation: Correlation,
    state: &FlowState,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
    sweep: &QualitySweep,
) -> SweepResult {
    let qualities = sweep.points();
    let pressure_drops = qualities
        .iter()
        .map(|&quality| {
            let point = FlowState { quality, ..*state };
            correlation
                .evaluate_with(&point, pipe, friction)
                .map(|dp| dp.value)
        })
        .collect::<Vec<_>>();

    let result = SweepResult {
        correlation,
        qualities,
        pressure_drops,
    };
    tracing::debug!(
        correlation = correlation.name(),
        successful = result.num_successful(),
        failed = result.num_failed(),
        "quality sweep finished"
    );
    result
}
