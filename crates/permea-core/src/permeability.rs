//! Permeability results and the per-sweep column accessors
//!
//! A [`PermeabilitySweep`] is what plotting code consumes: one result per
//! input measurement, exposed as `ndarray` columns the same way a network
//! exposes its S-parameter magnitude and phase.

use ndarray::Array1;
use num_complex::Complex64;

use crate::math::conversions::{
    complex_2_degree, complex_2_loss_tangent, complex_2_magnitude,
};

/// Advisory raised when the computed loss μ'' is negative
///
/// Passive ferrites cannot have negative loss, so this points at a
/// measurement or calibration problem upstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonPhysicalWarning {
    pub frequency: f64,
    pub mu_loss: f64,
}

/// Complex permeability μ = μ' − jμ'' at one frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PermeabilityResult {
    pub frequency: f64,
    pub mu: Complex64,
    pub warning: Option<NonPhysicalWarning>,
}

impl PermeabilityResult {
    /// Storage part μ'
    #[inline]
    pub fn mu_real(&self) -> f64 {
        self.mu.re
    }

    /// Loss part μ'' (positive for a lossy passive material)
    #[inline]
    pub fn mu_loss(&self) -> f64 {
        -self.mu.im
    }

    /// Loss tangent μ''/μ'
    pub fn loss_tangent(&self) -> f64 {
        complex_2_loss_tangent(self.mu)
    }

    #[inline]
    pub fn is_physical(&self) -> bool {
        self.warning.is_none()
    }
}

/// Ordered permeability results, positionally matching the input sweep
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermeabilitySweep {
    points: Vec<PermeabilityResult>,
}

impl PermeabilitySweep {
    pub fn new(points: Vec<PermeabilityResult>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[PermeabilityResult] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PermeabilityResult> {
        self.points.iter()
    }

    /// Frequency column in Hz
    pub fn f(&self) -> Array1<f64> {
        self.points.iter().map(|p| p.frequency).collect()
    }

    /// Complex permeability column
    pub fn mu(&self) -> Array1<Complex64> {
        self.points.iter().map(|p| p.mu).collect()
    }

    /// μ' column
    #[inline]
    pub fn mu_real(&self) -> Array1<f64> {
        self.mu().mapv(|c| c.re)
    }

    /// μ'' column (loss, sign flipped from the imaginary part)
    #[inline]
    pub fn mu_loss(&self) -> Array1<f64> {
        self.mu().mapv(|c| -c.im)
    }

    /// |μ| column
    #[inline]
    pub fn mu_mag(&self) -> Array1<f64> {
        self.mu().mapv(complex_2_magnitude)
    }

    /// Phase of μ in degrees (negative for a lossy material)
    #[inline]
    pub fn mu_deg(&self) -> Array1<f64> {
        self.mu().mapv(complex_2_degree)
    }

    /// Loss tangent column
    pub fn loss_tangent(&self) -> Array1<f64> {
        self.mu().mapv(complex_2_loss_tangent)
    }

    /// Warnings raised for non-physical points, in sweep order
    pub fn warnings(&self) -> Vec<NonPhysicalWarning> {
        self.points.iter().filter_map(|p| p.warning).collect()
    }

    pub fn has_warnings(&self) -> bool {
        self.points.iter().any(|p| p.warning.is_some())
    }
}

impl FromIterator<PermeabilityResult> for PermeabilitySweep {
    fn from_iter<I: IntoIterator<Item = PermeabilityResult>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PermeabilitySweep {
    type Item = &'a PermeabilityResult;
    type IntoIter = std::slice::Iter<'a, PermeabilityResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn result(f: f64, re: f64, loss: f64) -> PermeabilityResult {
        PermeabilityResult {
            frequency: f,
            mu: Complex64::new(re, -loss),
            warning: (loss < 0.0).then_some(NonPhysicalWarning {
                frequency: f,
                mu_loss: loss,
            }),
        }
    }

    #[test]
    fn test_result_parts() {
        let r = result(1e6, 100.0, 5.0);
        assert_eq!(r.mu_real(), 100.0);
        assert_eq!(r.mu_loss(), 5.0);
        assert_relative_eq!(r.loss_tangent(), 0.05, epsilon = 1e-15);
        assert!(r.is_physical());
    }

    #[test]
    fn test_sweep_columns() {
        let sweep: PermeabilitySweep = vec![
            result(1e4, 1000.0, 100.0),
            result(1e5, 800.0, 80.0),
            result(1e6, 3.0, 4.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(sweep.len(), 3);
        assert_eq!(sweep.f().to_vec(), vec![1e4, 1e5, 1e6]);
        assert_eq!(sweep.mu_real().to_vec(), vec![1000.0, 800.0, 3.0]);
        assert_eq!(sweep.mu_loss().to_vec(), vec![100.0, 80.0, 4.0]);
        assert_relative_eq!(sweep.mu_mag()[2], 5.0, epsilon = 1e-12);
        assert!(sweep.mu_deg().iter().all(|&d| d < 0.0));
        assert_relative_eq!(sweep.loss_tangent()[0], 0.1, epsilon = 1e-15);
        assert!(!sweep.has_warnings());
    }

    #[test]
    fn test_sweep_warnings_in_order() {
        let sweep = PermeabilitySweep::new(vec![
            result(1e4, 10.0, -1.0),
            result(1e5, 10.0, 1.0),
            result(1e6, 10.0, -2.0),
        ]);

        let warnings = sweep.warnings();
        assert!(sweep.has_warnings());
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].frequency, 1e4);
        assert_eq!(warnings[1].mu_loss, -2.0);
    }
}
