//! Theissing (1980) exponent-blended correlation.

use crate::common::{finish, require_finite, require_positive};
use crate::error::CorrelationResult;
use crate::flow::{PipeGeometry, TwoPhaseFlow};
use crate::friction::FrictionModel;
use crate::single_phase::{ReferenceDrops, single_phase_drop};
use tp_core::units::{Pressure, pa};

/// Theissing correlation.
///
/// Blends `ΔP_lo` and `ΔP_go` with exponents fitted from the actual-phase
/// drops. Works for liquid-liquid as well as gas-liquid mixtures. At `x = 0`
/// and `x = 1` it returns `ΔP_lo` and `ΔP_go` directly, since the exponent
/// fits take `ln(x)` and `ln(1-x)`.
pub fn theissing(
    flow: &TwoPhaseFlow,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
) -> CorrelationResult<Pressure> {
    flow.validate()?;
    pipe.validate()?;

    let x = flow.quality;
    let m = flow.mass_flow.value;
    let refs = ReferenceDrops::compute(m, &flow.liquid, &flow.gas, pipe, friction)?;
    let dp_lo = refs.liquid_only.pressure_drop;
    let dp_go = refs.gas_only.pressure_drop;

    if x == 0.0 {
        tracing::debug!("Theissing: x = 0, returning liquid-only drop");
        return Ok(pa(dp_lo));
    }
    if x == 1.0 {
        tracing::debug!("Theissing: x = 1, returning gas-only drop");
        return Ok(pa(dp_go));
    }

    // Actual phase flows
    let dp_l = single_phase_drop(m * (1.0 - x), &flow.liquid, pipe, friction)?.pressure_drop;
    let dp_g = single_phase_drop(m * x, &flow.gas, pipe, friction)?.pressure_drop;

    let n1 = (dp_l / dp_lo).ln() / (1.0 - x).ln();
    let n2 = (dp_g / dp_go).ln() / x.ln();
    let weight = (dp_g / dp_l).powf(0.1);
    let n = (n1 + n2 * weight) / (1.0 + weight);
    let n = require_positive(n, "Theissing exponent")?;

    let density_ratio = flow.liquid.density.value / flow.gas.density.value;
    let epsilon = 3.0 - 2.0 * (2.0 * density_ratio.sqrt() / (1.0 + density_ratio)).powf(0.7 / n);
    let epsilon = require_finite(epsilon, "Theissing epsilon")?;

    let ne = n * epsilon;
    let dp = (dp_lo.powf(1.0 / ne) * (1.0 - x).powf(1.0 / epsilon)
        + dp_go.powf(1.0 / ne) * x.powf(1.0 / epsilon))
    .powf(ne);
    Ok(pa(finish(dp, "Theissing pressure drop")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::PhaseProps;
    use crate::friction::Clamond;
    use tp_core::numeric::{Tolerances, nearly_equal};
    use tp_core::units::{kgpm3, kgps, m, pas};

    fn flow(x: f64) -> TwoPhaseFlow {
        TwoPhaseFlow::new(
            kgps(0.6),
            x,
            PhaseProps::new(kgpm3(915.0), pas(180e-6)),
            PhaseProps::new(kgpm3(2.67), pas(14e-6)),
        )
    }

    #[test]
    fn example() {
        let dp = theissing(&flow(0.1), &PipeGeometry::new(m(0.05)), &Clamond).unwrap();
        assert!(nearly_equal(
            dp.value,
            497.615_637_069_952_8,
            Tolerances {
                abs: 0.0,
                rel: 1e-9
            }
        ));
    }

    #[test]
    fn endpoints_bypass_the_blend() {
        let pipe = PipeGeometry::new(m(0.05));
        let f = flow(0.0);
        let lo = single_phase_drop(0.6, &f.liquid, &pipe, &Clamond).unwrap();
        let go = single_phase_drop(0.6, &f.gas, &pipe, &Clamond).unwrap();

        let at_zero = theissing(&flow(0.0), &pipe, &Clamond).unwrap();
        let at_one = theissing(&flow(1.0), &pipe, &Clamond).unwrap();
        assert_eq!(at_zero.value, lo.pressure_drop);
        assert_eq!(at_one.value, go.pressure_drop);
    }

    #[test]
    fn near_endpoints_stay_finite() {
        let pipe = PipeGeometry::new(m(0.05));
        for x in [1e-6, 1.0 - 1e-6] {
            let dp = theissing(&flow(x), &pipe, &Clamond).unwrap();
            assert!(dp.value.is_finite() && dp.value > 0.0, "x = {x}");
        }
    }
}
