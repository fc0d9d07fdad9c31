//! Chisholm (1973) and Baroczy-Chisholm two-phase multipliers.
//!
//! Both share `φ²_ch = 1 + (Γ²-1)(B·x^((2-n)/2)(1-x)^((2-n)/2) + x^(2-n))`
//! with `Γ² = ΔP_go/ΔP_lo`; they differ only in how `B` is tabulated.

use crate::common::{finish, require_finite};
use crate::error::CorrelationResult;
use crate::flow::{PipeGeometry, TwoPhaseFlow};
use crate::friction::FrictionModel;
use crate::single_phase::ReferenceDrops;
use tp_core::units::{Pressure, pa};

/// Blasius friction factor exponent.
const BLASIUS_N: f64 = 0.25;

/// Chisholm's `B` as a function of `Γ` and mass flux `G_tp`.
///
/// Bands: `Γ <= 9.5`, `9.5 < Γ <= 28`, `Γ > 28`.
pub(crate) fn chisholm_b(gamma: f64, g_tp: f64) -> f64 {
    if gamma <= 9.5 {
        if g_tp <= 500.0 {
            4.8
        } else if g_tp < 1900.0 {
            2400.0 / g_tp
        } else {
            55.0 / g_tp.sqrt()
        }
    } else if gamma <= 28.0 {
        if g_tp <= 600.0 {
            520.0 / (gamma * g_tp.sqrt())
        } else {
            21.0 / gamma
        }
    } else {
        15000.0 / (gamma * gamma * g_tp.sqrt())
    }
}

/// Baroczy's `B`: same bands as Chisholm but no mass-flux split.
pub(crate) fn baroczy_b(gamma: f64, g_tp: f64) -> f64 {
    if gamma <= 9.5 {
        55.0 / g_tp.sqrt()
    } else if gamma <= 28.0 {
        520.0 / (gamma * g_tp.sqrt())
    } else {
        15000.0 / (gamma * gamma * g_tp.sqrt())
    }
}

fn phi2_ch(gamma2: f64, b: f64, x: f64, n: f64) -> f64 {
    let e = (2.0 - n) / 2.0;
    1.0 + (gamma2 - 1.0) * (b * x.powf(e) * (1.0 - x).powf(e) + x.powf(2.0 - n))
}

/// Chisholm (1973) correlation.
///
/// With `rough_correction`, `B` is rescaled by Chisholm's 1978 roughness
/// ratio and the Blasius exponent is replaced by the local slope
/// `n = ln(f_lo/f_go) / ln(Re_go/Re_lo)`.
pub fn chisholm(
    flow: &TwoPhaseFlow,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
    rough_correction: bool,
) -> CorrelationResult<Pressure> {
    flow.validate()?;
    pipe.validate()?;

    let x = flow.quality;
    let g_tp = pipe.mass_flux(flow.mass_flow.value);

    let refs = ReferenceDrops::compute(
        flow.mass_flow.value,
        &flow.liquid,
        &flow.gas,
        pipe,
        friction,
    )?;
    let gamma2 = refs.gamma_squared();
    let gamma = gamma2.sqrt();

    let mut b = chisholm_b(gamma, g_tp);
    let mut n = BLASIUS_N;
    tracing::debug!(gamma, g_tp, b, "Chisholm: B coefficient");

    if rough_correction {
        let lo = &refs.liquid_only;
        let go = &refs.gas_only;
        n = require_finite(
            (lo.friction_factor / go.friction_factor).ln() / (go.reynolds / lo.reynolds).ln(),
            "Chisholm roughness exponent",
        )?;

        let mu_ratio = flow.gas.viscosity.value / flow.liquid.viscosity.value;
        let wall = 10f64.powf(-600.0 * pipe.relative_roughness());
        let base = 0.5 * (1.0 + mu_ratio * mu_ratio + wall);
        let ratio = base.powf((0.25 - n) / 0.25);
        b *= require_finite(ratio, "Chisholm roughness ratio")?;
        tracing::debug!(n, ratio, "Chisholm: roughness correction applied");
    }

    let phi2 = phi2_ch(gamma2, b, x, n);
    Ok(pa(finish(
        phi2 * refs.liquid_only.pressure_drop,
        "Chisholm pressure drop",
    )?))
}

/// Baroczy (1966) chart as made non-graphical by Chisholm (1973).
///
/// Prefer [`chisholm`]; kept for comparison with older design data.
pub fn baroczy_chisholm(
    flow: &TwoPhaseFlow,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
) -> CorrelationResult<Pressure> {
    flow.validate()?;
    pipe.validate()?;

    let g_tp = pipe.mass_flux(flow.mass_flow.value);
    let refs = ReferenceDrops::compute(
        flow.mass_flow.value,
        &flow.liquid,
        &flow.gas,
        pipe,
        friction,
    )?;
    let gamma2 = refs.gamma_squared();
    let gamma = gamma2.sqrt();

    let b = baroczy_b(gamma, g_tp);
    tracing::debug!(gamma, g_tp, b, "Baroczy-Chisholm: B coefficient");

    let phi2 = phi2_ch(gamma2, b, flow.quality, BLASIUS_N);
    Ok(pa(finish(
        phi2 * refs.liquid_only.pressure_drop,
        "Baroczy-Chisholm pressure drop",
    )?))
}
