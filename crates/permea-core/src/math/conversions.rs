//! Unit conversion functions
//!
//! Conversions between representations of a complex permeability value
//! (magnitude, phase, loss tangent).

use num_complex::Complex64;
use std::f64::consts::PI;

/// Convert complex number to magnitude
pub fn complex_2_magnitude(z: Complex64) -> f64 {
    z.norm()
}

/// Convert complex number to phase in radians
pub fn complex_2_radian(z: Complex64) -> f64 {
    z.arg()
}

/// Convert complex number to phase in degrees
pub fn complex_2_degree(z: Complex64) -> f64 {
    radian_2_degree(z.arg())
}

/// Convert radians to degrees
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Loss tangent tan δ = μ''/μ' of μ = μ' − jμ''
///
/// NaN when μ' is zero.
pub fn complex_2_loss_tangent(mu: Complex64) -> f64 {
    if mu.re == 0.0 {
        f64::NAN
    } else {
        -mu.im / mu.re
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_complex_2_magnitude() {
        let z = Complex64::new(3.0, -4.0);
        assert_relative_eq!(complex_2_magnitude(z), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_complex_2_degree() {
        let z = Complex64::new(1.0, -1.0);
        assert_relative_eq!(complex_2_degree(z), -45.0, epsilon = 1e-12);
        assert_relative_eq!(complex_2_radian(z), -PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_loss_tangent() {
        // μ = 100 − j5
        let mu = Complex64::new(100.0, -5.0);
        assert_relative_eq!(complex_2_loss_tangent(mu), 0.05, epsilon = 1e-15);
        assert!(complex_2_loss_tangent(Complex64::new(0.0, -1.0)).is_nan());
    }
}
