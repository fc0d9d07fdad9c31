//! Jung-Radermacher (1989) for annular turbulent-turbulent flow.

use crate::common::finish;
use crate::error::{CorrelationError, CorrelationResult};
use crate::flow::{PipeGeometry, TwoPhaseFlow};
use crate::friction::FrictionModel;
use crate::single_phase::single_phase_drop;
use crate::voidage::lockhart_martinelli_xtt;
use tp_core::units::{Pressure, pa};

/// `φ²_tp = 12.82·Xtt^-1.47·(1-x)^1.8`, applied to `ΔP_lo`.
///
/// `Xtt` diverges at `x = 0` and vanishes at `x = 1`, so both endpoints are
/// rejected.
pub fn jung_radermacher(
    flow: &TwoPhaseFlow,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
) -> CorrelationResult<Pressure> {
    flow.validate()?;
    pipe.validate()?;

    let x = flow.quality;
    if x <= 0.0 || x >= 1.0 {
        return Err(CorrelationError::InvalidInput {
            what: "Jung-Radermacher needs quality strictly between 0 and 1",
        });
    }

    let lo = single_phase_drop(flow.mass_flow.value, &flow.liquid, pipe, friction)?;
    let xtt = lockhart_martinelli_xtt(
        x,
        flow.liquid.density.value,
        flow.gas.density.value,
        flow.liquid.viscosity.value,
        flow.gas.viscosity.value,
    );
    let phi_tp2 = 12.82 * xtt.powf(-1.47) * (1.0 - x).powf(1.8);
    Ok(pa(finish(phi_tp2 * lo.pressure_drop, "Jung-Radermacher pressure drop")?))
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
        let dp = jung_radermacher(&flow(0.1), &PipeGeometry::new(m(0.05)), &Clamond).unwrap();
        assert!(nearly_equal(
            dp.value,
            552.068_612_372_557,
            Tolerances {
                abs: 0.0,
                rel: 1e-9
            }
        ));
    }

    #[test]
    fn endpoints_rejected() {
        let pipe = PipeGeometry::new(m(0.05));
        for x in [0.0, 1.0] {
            let err = jung_radermacher(&flow(x), &pipe, &Clamond).unwrap_err();
            assert!(matches!(err, CorrelationError::InvalidInput { .. }));
        }
    }
}
