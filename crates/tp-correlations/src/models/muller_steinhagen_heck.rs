//! Muller-Steinhagen and Heck (1986).

use crate::common::finish;
use crate::error::CorrelationResult;
use crate::flow::{PipeGeometry, TwoPhaseFlow};
use crate::friction::FrictionModel;
use crate::single_phase::ReferenceDrops;
use tp_core::units::{Pressure, pa};

/// Additive blend of liquid-only and gas-only drops:
/// `G_MSH(1-x)^(1/3) + ΔP_go·x³` with `G_MSH = ΔP_lo + 2(ΔP_go - ΔP_lo)x`.
///
/// Each term's contribution stays visible, which makes the model easy to
/// integrate along an evaporating tube.
pub fn muller_steinhagen_heck(
    flow: &TwoPhaseFlow,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
) -> CorrelationResult<Pressure> {
    flow.validate()?;
    pipe.validate()?;

    let x = flow.quality;
    let refs = ReferenceDrops::compute(
        flow.mass_flow.value,
        &flow.liquid,
        &flow.gas,
        pipe,
        friction,
    )?;
    let dp_lo = refs.liquid_only.pressure_drop;
    let dp_go = refs.gas_only.pressure_drop;

    let g_msh = dp_lo + 2.0 * (dp_go - dp_lo) * x;
    let dp = g_msh * (1.0 - x).cbrt() + dp_go * x.powi(3);
    Ok(pa(finish(dp, "Muller-Steinhagen-Heck pressure drop")?))
}
