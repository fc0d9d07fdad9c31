//! YAML case files: one flow condition in one pipe, SI units throughout.

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tp_core::units::{kgpm3, kgps, m, pa, pas};
use tp_correlations::{Correlation, FlowState, PipeGeometry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDef {
    /// Correlation identifier, e.g. `friedel` or `chisholm_rough`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation: Option<String>,
    #[serde(default)]
    pub rough_correction: bool,
    pub flow: FlowDef,
    pub pipe: PipeDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDef {
    /// kg/s
    pub mass_flow: f64,
    pub quality: f64,
    /// kg/m³
    pub rho_liquid: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rho_gas: Option<f64>,
    /// Pa·s
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mu_liquid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mu_gas: Option<f64>,
    /// N/m
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_tension: Option<f64>,
    /// Pa
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_pressure: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeDef {
    /// m
    pub diameter: f64,
    #[serde(default)]
    pub roughness: f64,
    #[serde(default = "default_length")]
    pub length: f64,
}

fn default_length() -> f64 {
    1.0
}

impl CaseDef {
    pub fn from_yaml_str(content: &str) -> CliResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn flow_state(&self) -> FlowState {
        let f = &self.flow;
        let mut state = FlowState::new(kgps(f.mass_flow), f.quality, kgpm3(f.rho_liquid));
        state.rho_gas = f.rho_gas.map(kgpm3);
        state.mu_liquid = f.mu_liquid.map(pas);
        state.mu_gas = f.mu_gas.map(pas);
        state.surface_tension = f.surface_tension;
        state.pressure = f.pressure.map(pa);
        state.critical_pressure = f.critical_pressure.map(pa);
        state
    }

    pub fn pipe_geometry(&self) -> PipeGeometry {
        PipeGeometry::new(m(self.pipe.diameter))
            .with_roughness(m(self.pipe.roughness))
            .with_length(m(self.pipe.length))
    }

    /// The named correlation, with `rough_correction` applied to Chisholm.
    /// `Ok(None)` when the case names none.
    pub fn correlation(&self) -> CliResult<Option<Correlation>> {
        let Some(name) = &self.correlation else {
            return Ok(None);
        };
        let parsed: Correlation = name.parse()?;
        let correlation = match parsed {
            Correlation::Chisholm { rough_correction } => Correlation::Chisholm {
                rough_correction: rough_correction || self.rough_correction,
            },
            other => {
                if self.rough_correction {
                    tracing::warn!(
                        correlation = other.name(),
                        "rough_correction only applies to Chisholm, ignoring"
                    );
                }
                other
            }
        };
        Ok(Some(correlation))
    }
}

pub fn load_yaml(path: &Path) -> CliResult<CaseDef> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::CaseFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    CaseDef::from_yaml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRIEDEL_CASE: &str = r#"
correlation: friedel
flow:
  mass_flow: 0.6
  quality: 0.1
  rho_liquid: 915.0
  rho_gas: 2.67
  mu_liquid: 1.8e-4
  mu_gas: 1.4e-5
  surface_tension: 0.0487
pipe:
  diameter: 0.05
"#;

    #[test]
    fn pipe_defaults_to_smooth_one_metre() {
        let case = CaseDef::from_yaml_str(FRIEDEL_CASE).unwrap();
        assert_eq!(case.pipe.roughness, 0.0);
        assert_eq!(case.pipe.length, 1.0);
        assert!(!case.rough_correction);
    }

    #[test]
    fn case_evaluates_to_published_value() {
        let case = CaseDef::from_yaml_str(FRIEDEL_CASE).unwrap();
        let correlation = case.correlation().unwrap().unwrap();
        assert_eq!(correlation, Correlation::Friedel);
        let dp = correlation
            .evaluate(&case.flow_state(), &case.pipe_geometry())
            .unwrap();
        assert!((dp.value - 738.65).abs() < 1e-2);
    }

    #[test]
    fn rough_correction_flag_selects_rough_chisholm() {
        let yaml = FRIEDEL_CASE.replace("friedel", "chisholm") + "rough_correction: true\n";
        let case = CaseDef::from_yaml_str(&yaml).unwrap();
        assert_eq!(
            case.correlation().unwrap(),
            Some(Correlation::Chisholm {
                rough_correction: true
            })
        );
    }

    #[test]
    fn missing_optional_fields_stay_unset() {
        let yaml = r#"
flow:
  mass_flow: 0.6
  quality: 0.1
  rho_liquid: 915.0
pipe:
  diameter: 0.05
  length: 3.0
"#;
        let case = CaseDef::from_yaml_str(yaml).unwrap();
        assert_eq!(case.correlation().unwrap(), None);
        let state = case.flow_state();
        assert!(state.rho_gas.is_none());
        assert!(state.surface_tension.is_none());
        assert_eq!(case.pipe_geometry().length.value, 3.0);
    }

    #[test]
    fn unknown_correlation_is_an_error() {
        let yaml = FRIEDEL_CASE.replace("friedel", "beggs_brill");
        let case = CaseDef::from_yaml_str(&yaml).unwrap();
        assert!(matches!(
            case.correlation(),
            Err(CliError::Correlation(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(matches!(
            CaseDef::from_yaml_str("flow: [1, 2"),
            Err(CliError::Yaml(_))
        ));
    }
}
