//! Closed set of correlations and their dispatch.

use crate::error::{CorrelationError, CorrelationResult};
use crate::flow::{FlowState, Param, PipeGeometry};
use crate::friction::{Clamond, FrictionModel};
use crate::models;
use std::fmt;
use std::str::FromStr;
use tp_core::units::Pressure;

/// A two-phase frictional pressure drop correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Correlation {
    Friedel,
    Gronnerud,
    Chisholm {
        /// Apply Chisholm's 1978 roughness correction to `B`
        rough_correction: bool,
    },
    BaroczyChisholm,
    MullerSteinhagenHeck,
    LombardiPedrocchi,
    Theissing,
    JungRadermacher,
    Tran,
    ChenFriedel,
    ZhangWebb,
}

const FULL_PHASES: &[Param] = &[Param::GasDensity, Param::LiquidViscosity, Param::GasViscosity];
const FULL_PHASES_SIGMA: &[Param] = &[
    Param::GasDensity,
    Param::LiquidViscosity,
    Param::GasViscosity,
    Param::SurfaceTension,
];
const DENSITIES_SIGMA: &[Param] = &[Param::GasDensity, Param::SurfaceTension];
const LIQUID_REDUCED_PRESSURE: &[Param] = &[
    Param::LiquidViscosity,
    Param::Pressure,
    Param::CriticalPressure,
];

impl Correlation {
    pub const ALL: [Correlation; 11] = [
        Correlation::Friedel,
        Correlation::Gronnerud,
        Correlation::Chisholm {
            rough_correction: false,
        },
        Correlation::BaroczyChisholm,
        Correlation::MullerSteinhagenHeck,
        Correlation::LombardiPedrocchi,
        Correlation::Theissing,
        Correlation::JungRadermacher,
        Correlation::Tran,
        Correlation::ChenFriedel,
        Correlation::ZhangWebb,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Correlation::Friedel => "Friedel",
            Correlation::Gronnerud => "Gronnerud",
            Correlation::Chisholm { .. } => "Chisholm",
            Correlation::BaroczyChisholm => "Baroczy-Chisholm",
            Correlation::MullerSteinhagenHeck => "Muller-Steinhagen-Heck",
            Correlation::LombardiPedrocchi => "Lombardi-Pedrocchi",
            Correlation::Theissing => "Theissing",
            Correlation::JungRadermacher => "Jung-Radermacher",
            Correlation::Tran => "Tran",
            Correlation::ChenFriedel => "Chen-Friedel",
            Correlation::ZhangWebb => "Zhang-Webb",
        }
    }

    /// Identifier accepted by [`FromStr`].
    pub fn id(&self) -> &'static str {
        match self {
            Correlation::Friedel => "friedel",
            Correlation::Gronnerud => "gronnerud",
            Correlation::Chisholm {
                rough_correction: false,
            } => "chisholm",
            Correlation::Chisholm {
                rough_correction: true,
            } => "chisholm_rough",
            Correlation::BaroczyChisholm => "baroczy_chisholm",
            Correlation::MullerSteinhagenHeck => "muller_steinhagen_heck",
            Correlation::LombardiPedrocchi => "lombardi_pedrocchi",
            Correlation::Theissing => "theissing",
            Correlation::JungRadermacher => "jung_radermacher",
            Correlation::Tran => "tran",
            Correlation::ChenFriedel => "chen_friedel",
            Correlation::ZhangWebb => "zhang_webb",
        }
    }

    /// Parameters beyond mass flow, quality and liquid density.
    pub fn required_params(&self) -> &'static [Param] {
        match self {
            Correlation::Friedel | Correlation::Tran | Correlation::ChenFriedel => {
                FULL_PHASES_SIGMA
            }
            Correlation::Gronnerud
            | Correlation::Chisholm { .. }
            | Correlation::BaroczyChisholm
            | Correlation::MullerSteinhagenHeck
            | Correlation::Theissing
            | Correlation::JungRadermacher => FULL_PHASES,
            Correlation::LombardiPedrocchi => DENSITIES_SIGMA,
            Correlation::ZhangWebb => LIQUID_REDUCED_PRESSURE,
        }
    }

    /// Regime the correlation was developed for.
    pub fn applicability(&self) -> &'static str {
        match self {
            Correlation::Friedel => {
                "Vertical upflow and horizontal flow; poor when mul/mug > 1000; ~40% mean error"
            }
            Correlation::Gronnerud => "Evaporators; 0 < x < 1",
            Correlation::Chisholm { .. } => {
                "Smooth tubes, optional roughness correction; 0 < x < 1"
            }
            Correlation::BaroczyChisholm => "Superseded by Chisholm (1973); 0 < x < 1",
            Correlation::MullerSteinhagenHeck => "General purpose, easily integrated; 0 < x < 1",
            Correlation::LombardiPedrocchi => "Purely empirical power law",
            Correlation::Theissing => "Gas-liquid and liquid-liquid flow; 0 <= x <= 1",
            Correlation::JungRadermacher => "Annular turbulent-turbulent flow; 0 < x < 1",
            Correlation::Tran => "Boiling refrigerants, hydraulic diameters 2.4-2.92 mm",
            Correlation::ChenFriedel => "Mini/microchannels only; far too low in larger pipes",
            Correlation::ZhangWebb => "Reduced pressure > 0.2, tube diameters 1-7 mm",
        }
    }

    /// Evaluate with the default [`Clamond`] friction factor.
    pub fn evaluate(&self, state: &FlowState, pipe: &PipeGeometry) -> CorrelationResult<Pressure> {
        self.evaluate_with(state, pipe, &Clamond)
    }

    /// Evaluate with a caller-supplied friction factor provider.
    pub fn evaluate_with(
        &self,
        state: &FlowState,
        pipe: &PipeGeometry,
        friction: &dyn FrictionModel,
    ) -> CorrelationResult<Pressure> {
        let name = self.name();
        if let Some(param) = state.first_missing(self.required_params()) {
            return Err(CorrelationError::MissingParameter {
                correlation: name,
                param: param.name(),
            });
        }
        tracing::trace!(correlation = name, friction = friction.name(), "evaluating");

        let sigma = || FlowState::require(state.surface_tension, name, Param::SurfaceTension);

        match *self {
            Correlation::Friedel => {
                models::friedel(&state.two_phase(name)?, sigma()?, pipe, friction)
            }
            Correlation::Gronnerud => models::gronnerud(&state.two_phase(name)?, pipe, friction),
            Correlation::Chisholm { rough_correction } => {
                models::chisholm(&state.two_phase(name)?, pipe, friction, rough_correction)
            }
            Correlation::BaroczyChisholm => {
                models::baroczy_chisholm(&state.two_phase(name)?, pipe, friction)
            }
            Correlation::MullerSteinhagenHeck => {
                models::muller_steinhagen_heck(&state.two_phase(name)?, pipe, friction)
            }
            Correlation::LombardiPedrocchi => models::lombardi_pedrocchi(
                state.mass_flow,
                state.quality,
                state.rho_liquid,
                FlowState::require(state.rho_gas, name, Param::GasDensity)?,
                sigma()?,
                pipe,
            ),
            Correlation::Theissing => models::theissing(&state.two_phase(name)?, pipe, friction),
            Correlation::JungRadermacher => {
                models::jung_radermacher(&state.two_phase(name)?, pipe, friction)
            }
            Correlation::Tran => models::tran(&state.two_phase(name)?, sigma()?, pipe, friction),
            Correlation::ChenFriedel => {
                models::chen_friedel(&state.two_phase(name)?, sigma()?, pipe, friction)
            }
            Correlation::ZhangWebb => models::zhang_webb(
                state.mass_flow,
                state.quality,
                &state.liquid(name)?,
                FlowState::require(state.pressure, name, Param::Pressure)?,
                FlowState::require(state.critical_pressure, name, Param::CriticalPressure)?,
                pipe,
                friction,
            ),
        }
    }

    /// Whether `state` carries every parameter this correlation needs.
    pub fn accepts(&self, state: &FlowState) -> bool {
        state.first_missing(self.required_params()).is_none()
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Correlation {
    type Err = CorrelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        if key == "chisholm_rough" {
            return Ok(Correlation::Chisholm {
                rough_correction: true,
            });
        }
        Correlation::ALL
            .into_iter()
            .find(|c| c.id() == key)
            .ok_or(CorrelationError::InvalidInput {
                what: "unknown correlation name",
            })
    }
}

/// Evaluate every correlation the state has parameters for.
///
/// Correlations with missing parameters are skipped; evaluation failures are
/// reported per entry.
pub fn compare(
    state: &FlowState,
    pipe: &PipeGeometry,
    friction: &dyn FrictionModel,
) -> Vec<(Correlation, CorrelationResult<Pressure>)> {
    Correlation::ALL
        .into_iter()
        .filter(|c| c.accepts(state))
        .map(|c| (c, c.evaluate_with(state, pipe, friction)))
        .collect()
}
