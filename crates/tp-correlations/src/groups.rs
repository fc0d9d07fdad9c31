//! Dimensionless groups used by the correlations.
//!
//! All arguments are SI values.

use tp_core::units::constants::G0_MPS2;

/// Reynolds number, `ρVD/μ`.
pub fn reynolds(v: f64, rho: f64, mu: f64, d: f64) -> f64 {
    rho * v * d / mu
}

/// Froude number `V/sqrt(gL)`, or `V²/(gL)` when `squared`.
pub fn froude(v: f64, l: f64, squared: bool) -> f64 {
    let fr = v / (l * G0_MPS2).sqrt();
    if squared { fr * fr } else { fr }
}

/// Weber number, `V²Lρ/σ`.
pub fn weber(v: f64, l: f64, rho: f64, sigma: f64) -> f64 {
    v * v * l * rho / sigma
}

/// Bond number, `g(ρl-ρg)L²/σ`.
pub fn bond(rhol: f64, rhog: f64, sigma: f64, l: f64) -> f64 {
    G0_MPS2 * (rhol - rhog) * l * l / sigma
}

/// Confinement number, `sqrt(σ/(g(ρl-ρg)))/D`.
pub fn confinement(d: f64, rhol: f64, rhog: f64, sigma: f64) -> f64 {
    (sigma / (G0_MPS2 * (rhol - rhog))).sqrt() / d
}
