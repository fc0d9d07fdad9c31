//! Single-phase Darcy-Weisbach drop, the building block of every correlation.

use crate::error::CorrelationResult;
use crate::flow::{PhaseProps, PipeGeometry};
use crate::friction::FrictionModel;
use crate::groups::reynolds;

/// One phase flowing alone through the full pipe cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinglePhaseDrop {
    /// Superficial velocity, m/s
    pub velocity: f64,
    pub reynolds: f64,
    /// Darcy friction factor
    pub friction_factor: f64,
    /// Frictional pressure drop over the pipe length, Pa
    pub pressure_drop: f64,
}

/// Darcy-Weisbach drop for `flow_rate` kg/s of a phase with the given
/// properties.
///
/// `flow_rate` is whichever share of the total mass flow the caller needs:
/// all of it for liquid-only/gas-only drops, `m(1-x)` or `m·x` for the actual
/// phase flows.
pub fn single_phase_drop(
    flow_rate: f64,
    phase: &PhaseProps,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
) -> CorrelationResult<SinglePhaseDrop> {
    let rho = phase.density.value;
    let d = pipe.diameter.value;

    let velocity = flow_rate / rho / pipe.area();
    let re = reynolds(velocity, rho, phase.viscosity.value, d);
    let fd = friction.darcy(re, pipe.relative_roughness())?;

    // ΔP = f*L/D * 0.5 * rho * v^2
    let pressure_drop = fd * pipe.length.value / d * (0.5 * rho * velocity * velocity);

    tracing::trace!(
        flow_rate,
        velocity,
        re,
        fd,
        pressure_drop,
        "single-phase drop"
    );

    Ok(SinglePhaseDrop {
        velocity,
        reynolds: re,
        friction_factor: fd,
        pressure_drop,
    })
}

/// Liquid-only and gas-only drops: the whole mass flow as each phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceDrops {
    pub liquid_only: SinglePhaseDrop,
    pub gas_only: SinglePhaseDrop,
}

impl ReferenceDrops {
    pub fn compute(
        mass_flow: f64,
        liquid: &PhaseProps,
        gas: &PhaseProps,
        pipe: &PipeGeometry,
        friction: &dyn FrictionModel,
    ) -> CorrelationResult<Self> {
        Ok(Self {
            liquid_only: single_phase_drop(mass_flow, liquid, pipe, friction)?,
            gas_only: single_phase_drop(mass_flow, gas, pipe, friction)?,
        })
    }

    /// `ΔP_go / ΔP_lo`
    pub fn gamma_squared(&self) -> f64 {
        self.gas_only.pressure_drop / self.liquid_only.pressure_drop
    }
}
