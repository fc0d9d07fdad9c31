//! Darcy friction factor providers.
//!
//! Every single-phase drop is routed through a [`FrictionModel`], so the
//! correlations never depend on a particular solver. [`Clamond`] is the
//! default and solves the Colebrook equation to machine precision without
//! iteration.

use crate::error::{FrictionError, FrictionResult};

/// Reynolds number below which pipe flow is treated as laminar (Avila et al. 2011).
pub const LAMINAR_TRANSITION_PIPE: f64 = 2040.0;

/// Maps a Reynolds number and relative roughness to a Darcy friction factor.
///
/// Implementations must be deterministic; the correlations call them up to
/// four times per evaluation.
pub trait FrictionModel: Send + Sync {
    /// Provider name for diagnostics.
    fn name(&self) -> &str;

    /// Darcy friction factor for `reynolds` and `relative_roughness` (ε/D).
    fn darcy(&self, reynolds: f64, relative_roughness: f64) -> FrictionResult<f64>;
}

/// Laminar Darcy friction factor, `64/Re`.
pub fn friction_laminar(reynolds: f64) -> f64 {
    64.0 / reynolds
}

fn check_args(reynolds: f64, relative_roughness: f64) -> FrictionResult<()> {
    if !(reynolds.is_finite() && reynolds > 0.0) {
        return Err(FrictionError::InvalidArg {
            what: "Reynolds number must be finite and positive",
        });
    }
    if !(relative_roughness.is_finite() && relative_roughness >= 0.0) {
        return Err(FrictionError::InvalidArg {
            what: "relative roughness must be finite and non-negative",
        });
    }
    Ok(())
}

fn check_result(fd: f64) -> FrictionResult<f64> {
    if fd.is_finite() && fd > 0.0 {
        Ok(fd)
    } else {
        Err(FrictionError::NonPhysical {
            what: "friction factor must be finite and positive",
        })
    }
}

/// Clamond (2009) solution of the Colebrook equation, laminar below
/// [`LAMINAR_TRANSITION_PIPE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Clamond;

impl Clamond {
    /// Turbulent branch only; two Halley-type corrections of the Lambert-W form.
    pub fn colebrook(reynolds: f64, relative_roughness: f64) -> f64 {
        // ln(10)/18.574
        let x1 = relative_roughness * reynolds * 0.123_968_186_335_417_55;
        // ln(ln(10)/5.02)
        let x2 = reynolds.ln() - 0.779_397_488_455_681_9;

        let mut f = x2 - 0.2;
        let mut x1f = x1 + f;
        let mut x1f1 = 1.0 + x1f;
        let mut e = (x1f.ln() - 0.2) / x1f1;
        f -= (x1f1 + 0.5 * e) * e * x1f / (x1f1 + e * (1.0 + e / 3.0));

        x1f = x1 + f;
        x1f1 = 1.0 + x1f;
        e = (x1f.ln() + f - x2) / x1f1;
        f -= (x1f1 + 0.5 * e) * e * x1f / (x1f1 + e * (1.0 + e / 3.0));

        // (ln(10)/2)^2
        1.325_474_527_619_599_5 / (f * f)
    }
}

impl FrictionModel for Clamond {
    fn name(&self) -> &str {
        "Clamond"
    }

    fn darcy(&self, reynolds: f64, relative_roughness: f64) -> FrictionResult<f64> {
        check_args(reynolds, relative_roughness)?;
        let fd = if reynolds < LAMINAR_TRANSITION_PIPE {
            friction_laminar(reynolds)
        } else {
            Self::colebrook(reynolds, relative_roughness)
        };
        check_result(fd)
    }
}

/// Swamee-Jain explicit approximation of Colebrook-White.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwameeJain;

impl FrictionModel for SwameeJain {
    fn name(&self) -> &str {
        "Swamee-Jain"
    }

    fn darcy(&self, reynolds: f64, relative_roughness: f64) -> FrictionResult<f64> {
        check_args(reynolds, relative_roughness)?;
        if reynolds < LAMINAR_TRANSITION_PIPE {
            return check_result(friction_laminar(reynolds));
        }
        let a = relative_roughness / 3.7;
        let b = 5.74 / reynolds.powf(0.9);
        let f = 0.25 / (a + b).log10().powi(2);
        check_result(f.max(0.0001)) // Clamp to avoid issues
    }
}

/// Fixed-point iteration on the Colebrook equation in `1/sqrt(f)`.
#[derive(Debug, Clone, Copy)]
pub struct Colebrook {
    pub max_iter: usize,
    /// Relative change in `1/sqrt(f)` accepted as converged.
    pub tol: f64,
}

impl Default for Colebrook {
    fn default() -> Self {
        Self {
            max_iter: 50,
            tol: 1e-12,
        }
    }
}

impl FrictionModel for Colebrook {
    fn name(&self) -> &str {
        "Colebrook"
    }

    fn darcy(&self, reynolds: f64, relative_roughness: f64) -> FrictionResult<f64> {
        check_args(reynolds, relative_roughness)?;
        if reynolds < LAMINAR_TRANSITION_PIPE {
            return check_result(friction_laminar(reynolds));
        }

        // Start from f = 0.02
        let mut inv_sqrt_f = 1.0 / 0.02_f64.sqrt();
        for _ in 0..self.max_iter {
            let next =
                -2.0 * (relative_roughness / 3.7 + 2.51 * inv_sqrt_f / reynolds).log10();
            if !next.is_finite() {
                break;
            }
            let converged = ((next - inv_sqrt_f) / next).abs() < self.tol;
            inv_sqrt_f = next;
            if converged {
                return check_result(1.0 / (inv_sqrt_f * inv_sqrt_f));
            }
        }

        Err(FrictionError::ConvergenceFailed {
            reynolds,
            iterations: self.max_iter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::numeric::{Tolerances, nearly_equal};

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn laminar_below_transition() {
        let fd = Clamond.darcy(212.206_590_789_193_8, 0.0).unwrap();
        assert!(nearly_equal(
            fd,
            64.0 / 212.206_590_789_193_8,
            Tolerances::default()
        ));
        let fd = Clamond.darcy(2039.9, 0.0).unwrap();
        assert_eq!(fd, 64.0 / 2039.9);
    }

    #[test]
    fn transition_threshold_is_turbulent() {
        let fd = Clamond.darcy(LAMINAR_TRANSITION_PIPE, 0.0).unwrap();
        assert_ne!(fd, friction_laminar(LAMINAR_TRANSITION_PIPE));
        // Smooth-pipe Colebrook at Re=2040 is close to 0.049
        assert!(fd > 0.045 && fd < 0.055, "fd = {fd}");
    }

    #[test]
    fn clamond_matches_iterative_colebrook() {
        let iterative = Colebrook::default();
        for &(re, ed) in &[(1e4, 0.0), (1e5, 1e-4), (1e6, 1e-3), (5e7, 0.05)] {
            let a = Clamond.darcy(re, ed).unwrap();
            let b = iterative.darcy(re, ed).unwrap();
            assert!(rel(a, b) < 1e-9, "Re={re} eD={ed}: {a} vs {b}");
        }
    }

    #[test]
    fn moody_chart_point() {
        // Re = 1e5, eD = 1e-4: Colebrook gives fd ~ 0.0185
        let fd = Clamond.darcy(1e5, 1e-4).unwrap();
        assert!(rel(fd, 0.0185) < 0.01, "fd = {fd}");
    }

    #[test]
    fn swamee_jain_close_to_colebrook() {
        let a = SwameeJain.darcy(1e5, 1e-4).unwrap();
        let b = Clamond.darcy(1e5, 1e-4).unwrap();
        assert!(rel(a, b) < 0.02);
    }

    #[test]
    fn iteration_limit_reports_convergence_failure() {
        let starved = Colebrook {
            max_iter: 1,
            tol: 1e-15,
        };
        let err = starved.darcy(1e5, 0.0).unwrap_err();
        assert!(matches!(
            err,
            FrictionError::ConvergenceFailed { iterations: 1, .. }
        ));
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert!(Clamond.darcy(0.0, 0.0).is_err());
        assert!(Clamond.darcy(-10.0, 0.0).is_err());
        assert!(Clamond.darcy(f64::NAN, 0.0).is_err());
        assert!(Clamond.darcy(1e5, -1e-3).is_err());
    }

    #[test]
    fn roughness_increases_friction() {
        let smooth = Clamond.darcy(1e6, 0.0).unwrap();
        let rough = Clamond.darcy(1e6, 1e-3).unwrap();
        assert!(rough > smooth);
    }
}
