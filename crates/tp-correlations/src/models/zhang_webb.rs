//! Zhang-Webb (2001) corresponding-states correlation.

use crate::common::{check_positive, check_quality, finish};
use crate::error::CorrelationResult;
use crate::flow::{PhaseProps, PipeGeometry};
use crate::friction::FrictionModel;
use crate::single_phase::single_phase_drop;
use tp_core::units::{MassRate, Pressure, pa};

/// `φ²_lo = (1-x)² + 2.87x²/Pr + 1.68x^0.8(1-x)^0.25·Pr^-1.64`, `Pr = P/Pc`.
///
/// Needs no gas properties. Fitted on R-134a, R-22 and R-404A in 2-6 mm
/// tubes; recommended for reduced pressures above 0.2 and diameters of
/// 1-7 mm.
pub fn zhang_webb(
    mass_flow: MassRate,
    quality: f64,
    liquid: &PhaseProps,
    pressure: Pressure,
    critical_pressure: Pressure,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
) -> CorrelationResult<Pressure> {
    let m = check_positive(mass_flow.value, "mass flow")?;
    let x = check_quality(quality)?;
    liquid.validate("liquid density", "liquid viscosity")?;
    let p = check_positive(pressure.value, "pressure")?;
    let pc = check_positive(critical_pressure.value, "critical pressure")?;
    pipe.validate()?;

    let lo = single_phase_drop(m, liquid, pipe, friction)?;
    let pr = p / pc;
    let phi_lo2 = (1.0 - x).powi(2)
        + 2.87 * x * x / pr
        + 1.68 * x.powf(0.8) * (1.0 - x).powf(0.25) * pr.powf(-1.64);
    Ok(pa(finish(phi_lo2 * lo.pressure_drop, "Zhang-Webb pressure drop")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friction::Clamond;
    use tp_core::numeric::{Tolerances, nearly_equal};
    use tp_core::units::{kgpm3, kgps, m, pas};

    fn liquid() -> PhaseProps {
        PhaseProps::new(kgpm3(915.0), pas(180e-6))
    }

    #[test]
    fn example() {
        let dp = zhang_webb(
            kgps(0.6),
            0.1,
            &liquid(),
            pa(2e5),
            pa(4.055e6),
            &PipeGeometry::new(m(0.05)),
            &Clamond,
        )
        .unwrap();
        assert!(nearly_equal(
            dp.value,
            712.099_980_420_561_9,
            Tolerances {
                abs: 0.0,
                rel: 1e-9
            }
        ));
    }

    #[test]
    fn zero_quality_gives_liquid_only() {
        let pipe = PipeGeometry::new(m(0.05));
        let (p, pc) = (pa(2e5), pa(4.055e6));
        let dp = zhang_webb(kgps(0.6), 0.0, &liquid(), p, pc, &pipe, &Clamond).unwrap();
        let lo = single_phase_drop(0.6, &liquid(), &pipe, &Clamond).unwrap();
        assert_eq!(dp.value, lo.pressure_drop);
    }

    #[test]
    fn rejects_zero_critical_pressure() {
        let err = zhang_webb(
            kgps(0.6),
            0.1,
            &liquid(),
            pa(2e5),
            pa(0.0),
            &PipeGeometry::new(m(0.05)),
            &Clamond,
        )
        .unwrap_err();
        assert_eq!(
            err,
            crate::error::CorrelationError::InvalidInput {
                what: "critical pressure"
            }
        );
    }
}
