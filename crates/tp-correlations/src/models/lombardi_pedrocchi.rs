//! Lombardi-Pedrocchi (1972) power law.

use crate::common::{check_positive, check_quality, finish};
use crate::error::CorrelationResult;
use crate::flow::PipeGeometry;
use crate::voidage::homogeneous_density;
use tp_core::units::{Density, MassRate, Pressure, pa};

/// `0.83·G^1.4·σ^0.4·L / (D^1.2·ρ_h^0.866)` with the homogeneous density.
///
/// Purely empirical; needs no viscosities and no friction factor, so pipe
/// roughness is ignored.
pub fn lombardi_pedrocchi(
    mass_flow: MassRate,
    quality: f64,
    rho_liquid: Density,
    rho_gas: Density,
    sigma: f64,
    pipe: &PipeGeometry,
) -> CorrelationResult<Pressure> {
    let m = check_positive(mass_flow.value, "mass flow")?;
    let x = check_quality(quality)?;
    let rhol = check_positive(rho_liquid.value, "liquid density")?;
    let rhog = check_positive(rho_gas.value, "gas density")?;
    let sigma = check_positive(sigma, "surface tension")?;
    pipe.validate()?;

    let rho_h = homogeneous_density(x, rhol, rhog);
    let g_tp = pipe.mass_flux(m);
    let dp = 0.83 * g_tp.powf(1.4) * sigma.powf(0.4) * pipe.length.value
        / (pipe.diameter.value.powf(1.2) * rho_h.powf(0.866));
    Ok(pa(finish(dp, "Lombardi-Pedrocchi pressure drop")?))
}
