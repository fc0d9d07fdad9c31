//! Serializable command output.

use serde::Serialize;
use tp_core::units::Pressure;
use tp_correlations::{Correlation, CorrelationResult, SweepResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    pub correlation: String,
    pub name: String,
    /// Pa, absent when the correlation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_drop: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvalReport {
    pub fn new(correlation: Correlation, result: &CorrelationResult<Pressure>) -> Self {
        let (pressure_drop, error) = match result {
            Ok(dp) => (Some(dp.value), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            correlation: correlation.id().to_string(),
            name: correlation.name().to_string(),
            pressure_drop,
            error,
        }
    }

    pub fn to_line(&self) -> String {
        match (&self.pressure_drop, &self.error) {
            (Some(dp), _) => format!("{:<28} {:>14.3} Pa", self.name, dp),
            (None, Some(e)) => format!("{:<28} {:>14}    ({})", self.name, "-", e),
            (None, None) => format!("{:<28} {:>14}", self.name, "-"),
        }
    }
}

/// `quality,pressure_drop_pa,error` rows; failed points leave the drop empty.
pub fn sweep_csv(result: &SweepResult) -> String {
    let mut csv = String::from("quality,pressure_drop_pa,error\n");
    for (x, dp) in result.qualities.iter().zip(&result.pressure_drops) {
        match dp {
            Ok(v) => csv.push_str(&format!("{},{},\n", x, v)),
            Err(e) => csv.push_str(&format!("{},,\"{}\"\n", x, e.to_string().replace('"', "'"))),
        }
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::units::pa;
    use tp_correlations::CorrelationError;

    #[test]
    fn failed_report_carries_error_text() {
        let result = Err(CorrelationError::InvalidInput {
            what: "quality must lie strictly within (0, 1)",
        });
        let report = EvalReport::new(Correlation::JungRadermacher, &result);
        assert_eq!(report.pressure_drop, None);
        assert!(report.error.as_deref().unwrap().contains("strictly"));
        assert!(report.to_line().starts_with("Jung"));
    }

    #[test]
    fn json_omits_absent_fields() {
        let report = EvalReport::new(Correlation::Friedel, &Ok(pa(738.65)));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"pressure_drop\":738.65"));
        assert!(!json.contains("error"));
    }

    #[test]
    fn csv_keeps_one_row_per_point() {
        let result = SweepResult {
            correlation: Correlation::JungRadermacher,
            qualities: vec![0.0, 0.5, 1.0],
            pressure_drops: vec![
                Err(CorrelationError::InvalidInput { what: "endpoint" }),
                Ok(120.5),
                Err(CorrelationError::InvalidInput { what: "endpoint" }),
            ],
        };
        let csv = sweep_csv(&result);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "0.5,120.5,");
        assert!(lines[1].starts_with("0,,\"Invalid input: endpoint\""));
    }
}
