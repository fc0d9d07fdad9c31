//! Tran et al. (2000) for boiling refrigerants in small channels.

use crate::common::{check_positive, finish, require_finite};
use crate::error::CorrelationResult;
use crate::flow::{PipeGeometry, TwoPhaseFlow};
use crate::friction::FrictionModel;
use crate::groups::confinement;
use crate::single_phase::ReferenceDrops;
use tp_core::units::{Pressure, pa};

/// `φ²_lo = 1 + (4.3Γ²-1)[Co·x^0.875(1-x)^0.875 + x^1.75]`.
///
/// Developed for hydraulic diameters of 2.4 to 2.92 mm.
pub fn tran(
    flow: &TwoPhaseFlow,
    sigma: f64,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
) -> CorrelationResult<Pressure> {
    flow.validate()?;
    pipe.validate()?;
    check_positive(sigma, "surface tension")?;

    let x = flow.quality;
    let refs = ReferenceDrops::compute(
        flow.mass_flow.value,
        &flow.liquid,
        &flow.gas,
        pipe,
        friction,
    )?;
    let gamma2 = refs.gamma_squared();

    let co = confinement(
        pipe.diameter.value,
        flow.liquid.density.value,
        flow.gas.density.value,
        sigma,
    );
    // NaN when the gas is denser than the liquid
    let co = require_finite(co, "confinement number")?;

    let phi_lo2 =
        1.0 + (4.3 * gamma2 - 1.0) * (co * x.powf(0.875) * (1.0 - x).powf(0.875) + x.powf(1.75));
    Ok(pa(finish(
        refs.liquid_only.pressure_drop * phi_lo2,
        "Tran pressure drop",
    )?))
}
