//! Flow state and pipe geometry records.

use crate::common::{check_non_negative, check_positive, check_quality};
use crate::error::{CorrelationError, CorrelationResult};
use std::f64::consts::PI;
use std::fmt;
use tp_core::units::{Density, DynVisc, Length, MassRate, Pressure, m};

/// Density and viscosity of one phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseProps {
    pub density: Density,
    pub viscosity: DynVisc,
}

impl PhaseProps {
    pub fn new(density: Density, viscosity: DynVisc) -> Self {
        Self { density, viscosity }
    }

    pub(crate) fn validate(
        &self,
        density: &'static str,
        viscosity: &'static str,
    ) -> CorrelationResult<()> {
        check_positive(self.density.value, density)?;
        check_positive(self.viscosity.value, viscosity)?;
        Ok(())
    }
}

/// Fully specified gas-liquid flow: total mass flow, quality and both phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPhaseFlow {
    pub mass_flow: MassRate,
    /// Vapor mass fraction, [0, 1]
    pub quality: f64,
    pub liquid: PhaseProps,
    pub gas: PhaseProps,
}

impl TwoPhaseFlow {
    pub fn new(mass_flow: MassRate, quality: f64, liquid: PhaseProps, gas: PhaseProps) -> Self {
        Self {
            mass_flow,
            quality,
            liquid,
            gas,
        }
    }

    pub fn validate(&self) -> CorrelationResult<()> {
        check_positive(self.mass_flow.value, "mass flow")?;
        check_quality(self.quality)?;
        self.liquid.validate("liquid density", "liquid viscosity")?;
        self.gas.validate("gas density", "gas viscosity")?;
        Ok(())
    }
}

/// Circular pipe segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeGeometry {
    /// Internal diameter
    pub diameter: Length,
    /// Absolute wall roughness
    pub roughness: Length,
    /// Flow length; pressure drop scales linearly with it
    pub length: Length,
}

impl PipeGeometry {
    /// Smooth pipe of unit length.
    pub fn new(diameter: Length) -> Self {
        Self {
            diameter,
            roughness: m(0.0),
            length: m(1.0),
        }
    }

    pub fn with_roughness(mut self, roughness: Length) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_length(mut self, length: Length) -> Self {
        self.length = length;
        self
    }

    /// Flow cross-section, m².
    pub fn area(&self) -> f64 {
        PI / 4.0 * self.diameter.value * self.diameter.value
    }

    pub fn relative_roughness(&self) -> f64 {
        self.roughness.value / self.diameter.value
    }

    /// Mass flux `G = m/A` for a total mass flow, kg/(m²·s).
    pub fn mass_flux(&self, mass_flow: f64) -> f64 {
        mass_flow / self.area()
    }

    pub fn validate(&self) -> CorrelationResult<()> {
        check_positive(self.diameter.value, "diameter")?;
        check_non_negative(self.roughness.value, "roughness")?;
        check_positive(self.length.value, "length")?;
        Ok(())
    }
}

/// Optional inputs a correlation may declare as required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    GasDensity,
    LiquidViscosity,
    GasViscosity,
    SurfaceTension,
    Pressure,
    CriticalPressure,
}

impl Param {
    pub fn name(self) -> &'static str {
        match self {
            Param::GasDensity => "rho_gas",
            Param::LiquidViscosity => "mu_liquid",
            Param::GasViscosity => "mu_gas",
            Param::SurfaceTension => "surface_tension",
            Param::Pressure => "pressure",
            Param::CriticalPressure => "critical_pressure",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-facing flow record for [`crate::Correlation`] dispatch.
///
/// Mass flow, quality and liquid density are always needed. Everything else
/// is checked against the selected correlation's parameter set before any
/// formula is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub mass_flow: MassRate,
    pub quality: f64,
    pub rho_liquid: Density,
    pub rho_gas: Option<Density>,
    pub mu_liquid: Option<DynVisc>,
    pub mu_gas: Option<DynVisc>,
    /// Surface tension, N/m
    pub surface_tension: Option<f64>,
    pub pressure: Option<Pressure>,
    pub critical_pressure: Option<Pressure>,
}

impl FlowState {
    pub fn new(mass_flow: MassRate, quality: f64, rho_liquid: Density) -> Self {
        Self {
            mass_flow,
            quality,
            rho_liquid,
            rho_gas: None,
            mu_liquid: None,
            mu_gas: None,
            surface_tension: None,
            pressure: None,
            critical_pressure: None,
        }
    }

    pub fn with_gas_density(mut self, rho_gas: Density) -> Self {
        self.rho_gas = Some(rho_gas);
        self
    }

    pub fn with_viscosities(mut self, mu_liquid: DynVisc, mu_gas: DynVisc) -> Self {
        self.mu_liquid = Some(mu_liquid);
        self.mu_gas = Some(mu_gas);
        self
    }

    pub fn with_liquid_viscosity(mut self, mu_liquid: DynVisc) -> Self {
        self.mu_liquid = Some(mu_liquid);
        self
    }

    pub fn with_surface_tension(mut self, sigma: f64) -> Self {
        self.surface_tension = Some(sigma);
        self
    }

    pub fn with_pressures(mut self, pressure: Pressure, critical_pressure: Pressure) -> Self {
        self.pressure = Some(pressure);
        self.critical_pressure = Some(critical_pressure);
        self
    }

    /// Build a state carrying every field of a [`TwoPhaseFlow`].
    pub fn from_two_phase(flow: &TwoPhaseFlow) -> Self {
        Self::new(flow.mass_flow, flow.quality, flow.liquid.density)
            .with_gas_density(flow.gas.density)
            .with_viscosities(flow.liquid.viscosity, flow.gas.viscosity)
    }

    pub fn has(&self, param: Param) -> bool {
        match param {
            Param::GasDensity => self.rho_gas.is_some(),
            Param::LiquidViscosity => self.mu_liquid.is_some(),
            Param::GasViscosity => self.mu_gas.is_some(),
            Param::SurfaceTension => self.surface_tension.is_some(),
            Param::Pressure => self.pressure.is_some(),
            Param::CriticalPressure => self.critical_pressure.is_some(),
        }
    }

    /// First parameter of `required` the state does not carry.
    pub fn first_missing(&self, required: &[Param]) -> Option<Param> {
        required.iter().copied().find(|p| !self.has(*p))
    }

    pub(crate) fn require<T>(
        value: Option<T>,
        correlation: &'static str,
        param: Param,
    ) -> CorrelationResult<T> {
        value.ok_or(CorrelationError::MissingParameter {
            correlation,
            param: param.name(),
        })
    }

    /// Liquid phase with its viscosity.
    pub(crate) fn liquid(&self, correlation: &'static str) -> CorrelationResult<PhaseProps> {
        let mu = Self::require(self.mu_liquid, correlation, Param::LiquidViscosity)?;
        Ok(PhaseProps::new(self.rho_liquid, mu))
    }

    pub(crate) fn two_phase(&self, correlation: &'static str) -> CorrelationResult<TwoPhaseFlow> {
        let liquid = self.liquid(correlation)?;
        let rho_gas = Self::require(self.rho_gas, correlation, Param::GasDensity)?;
        let mu_gas = Self::require(self.mu_gas, correlation, Param::GasViscosity)?;
        Ok(TwoPhaseFlow::new(
            self.mass_flow,
            self.quality,
            liquid,
            PhaseProps::new(rho_gas, mu_gas),
        ))
    }
}
