//! Gronnerud (1972) correlation for circulation-type evaporators.

use crate::common::finish;
use crate::error::CorrelationResult;
use crate::flow::{PipeGeometry, TwoPhaseFlow};
use crate::friction::FrictionModel;
use crate::groups::froude;
use crate::single_phase::single_phase_drop;
use tp_core::units::{Pressure, pa};

/// Froude friction factor `f_Fr`, clamped to 1 once `Fr_l >= 1`.
pub(crate) fn froude_friction(fr_l: f64) -> f64 {
    if fr_l >= 1.0 {
        tracing::debug!(fr_l, "Gronnerud: liquid Froude >= 1, f_Fr clamped to 1");
        1.0
    } else {
        fr_l.powf(0.3) + 0.0055 * (1.0 / fr_l).ln().powi(2)
    }
}

/// Gronnerud correlation, `ΔP = φ_gd·ΔP_lo`.
///
/// Developed for evaporators, applicable for `0 < x < 1`. Gas viscosity and
/// density enter only through the property ratio term.
pub fn gronnerud(
    flow: &TwoPhaseFlow,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
) -> CorrelationResult<Pressure> {
    flow.validate()?;
    pipe.validate()?;

    let x = flow.quality;
    let rhol = flow.liquid.density.value;
    let rhog = flow.gas.density.value;
    let mul = flow.liquid.viscosity.value;
    let mug = flow.gas.viscosity.value;

    let g = pipe.mass_flux(flow.mass_flow.value);
    let fr_l = froude(g / rhol, pipe.diameter.value, true);
    let f_fr = froude_friction(fr_l);

    let dp_dl_fr = f_fr * (x + 4.0 * (x.powf(1.8) - x.powi(10) * f_fr.sqrt()));
    let phi_gd = 1.0 + dp_dl_fr * ((rhol / rhog) / (mul / mug).powf(0.25) - 1.0);

    let lo = single_phase_drop(flow.mass_flow.value, &flow.liquid, pipe, friction)?;
    Ok(pa(finish(phi_gd * lo.pressure_drop, "Gronnerud pressure drop")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::PhaseProps;
    use crate::friction::Clamond;
    use tp_core::numeric::{Tolerances, nearly_equal};
    use tp_core::units::{kgpm3, kgps, m, pas};

    fn flow(mass_flow: f64, x: f64) -> TwoPhaseFlow {
        TwoPhaseFlow::new(
            kgps(mass_flow),
            x,
            PhaseProps::new(kgpm3(915.0), pas(180e-6)),
            PhaseProps::new(kgpm3(2.67), pas(14e-6)),
        )
    }

    #[test]
    fn example() {
        let dp = gronnerud(&flow(0.6, 0.1), &PipeGeometry::new(m(0.05)), &Clamond).unwrap();
        assert!(nearly_equal(
            dp.value,
            384.125_411_444_741,
            Tolerances {
                abs: 0.0,
                rel: 1e-9
            }
        ));
    }

    #[test]
    fn froude_clamp_is_closed_at_one() {
        assert_eq!(froude_friction(1.0), 1.0);
        assert_eq!(froude_friction(3.7), 1.0);
        let below = froude_friction(0.999_999);
        assert!(below != 1.0 && (below - 1.0).abs() < 1e-5);
    }

    #[test]
    fn froude_friction_small_froude() {
        let fr: f64 = 0.01;
        let expected = fr.powf(0.3) + 0.0055 * (100.0_f64).ln().powi(2);
        assert_eq!(froude_friction(fr), expected);
    }

    #[test]
    fn high_froude_flow_uses_clamped_branch() {
        // G = 5000 kg/m²s in a 1 cm pipe gives Fr_l >> 1
        let pipe = PipeGeometry::new(m(0.01));
        let mass_flow = 5000.0 * pipe.area();
        let fr_l = froude(5000.0 / 915.0, 0.01, true);
        assert!(fr_l > 1.0);
        let dp = gronnerud(&flow(mass_flow, 0.3), &pipe, &Clamond).unwrap();
        assert!(dp.value.is_finite() && dp.value > 0.0);
    }

    #[test]
    fn zero_quality_gives_liquid_only() {
        let pipe = PipeGeometry::new(m(0.05));
        let f = flow(0.6, 0.0);
        let dp = gronnerud(&f, &pipe, &Clamond).unwrap();
        let lo = single_phase_drop(0.6, &f.liquid, &pipe, &Clamond).unwrap();
        assert_eq!(dp.value, lo.pressure_drop);
    }
}
