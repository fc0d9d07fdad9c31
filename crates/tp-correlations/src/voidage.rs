//! Homogeneous void fraction and the Lockhart-Martinelli parameter.

/// Homogeneous-model void fraction.
///
/// Written as `xρl / (xρl + (1-x)ρg)` so that `x = 0` gives 0 instead of
/// dividing by zero.
pub fn homogeneous(x: f64, rhol: f64, rhog: f64) -> f64 {
    let gas = x * rhol;
    gas / (gas + (1.0 - x) * rhog)
}

/// Homogeneous mixture density, `(x/ρg + (1-x)/ρl)⁻¹`.
pub fn homogeneous_density(x: f64, rhol: f64, rhog: f64) -> f64 {
    let alpha = homogeneous(x, rhol, rhog);
    rhol * (1.0 - alpha) + rhog * alpha
}

/// Turbulent-turbulent Lockhart-Martinelli parameter:
/// `((1-x)/x)^0.9 (ρg/ρl)^0.5 (μl/μg)^0.1`.
pub fn lockhart_martinelli_xtt(x: f64, rhol: f64, rhog: f64, mul: f64, mug: f64) -> f64 {
    ((1.0 - x) / x).powf(0.9) * (rhog / rhol).sqrt() * (mul / mug).powf(0.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn homogeneous_endpoints() {
        assert_eq!(homogeneous(0.0, 915.0, 2.67), 0.0);
        assert_eq!(homogeneous(1.0, 915.0, 2.67), 1.0);
    }

    #[test]
    fn homogeneous_value() {
        // 1 / (1 + (1-x)/x * rhog/rhol)
        let expected = 1.0 / (1.0 + 0.6 / 0.4 * (12.3 / 812.0));
        assert!(nearly_equal(
            homogeneous(0.4, 812.0, 12.3),
            expected,
            Tolerances::default()
        ));
    }

    #[test]
    fn mixture_density_matches_reciprocal_form() {
        let (x, rhol, rhog) = (0.1, 915.0, 2.67);
        let direct = 1.0 / (x / rhog + (1.0 - x) / rhol);
        assert!(nearly_equal(
            homogeneous_density(x, rhol, rhog),
            direct,
            Tolerances::default()
        ));
        assert_eq!(homogeneous_density(0.0, rhol, rhog), rhol);
    }

    #[test]
    fn xtt_value() {
        let xtt = lockhart_martinelli_xtt(0.4, 800.0, 2.5, 1e-3, 1e-5);
        let expected = 1.5_f64.powf(0.9) * (2.5_f64 / 800.0).sqrt() * 100.0_f64.powf(0.1);
        assert!(nearly_equal(xtt, expected, Tolerances::default()));
    }
}
