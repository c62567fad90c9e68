//! Toroidal core geometry and its effective magnetic dimensions
//!
//! The effective path length and cross-section turn the physical ring into
//! the idealized magnetic circuit used by the permeability formula.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::MU_0;
use crate::error::{PermeabilityError, Result};

/// Approximation used for the magnetic path length of the ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathModel {
    /// ℓ = 2π(r_o − r_i) / ln(r_o / r_i)
    #[default]
    Logarithmic,
    /// ℓ = π(r_o + r_i), the mean circumference
    MeanDiameter,
}

/// Physical dimensions of a toroidal core, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreGeometry {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub height: f64,
}

/// Effective magnetic path length (m) and cross-sectional area (m²)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveDimensions {
    pub path_length: f64,
    pub area: f64,
}

impl CoreGeometry {
    /// Create a validated geometry from radii
    pub fn new(inner_radius: f64, outer_radius: f64, height: f64) -> Result<Self> {
        let geometry = Self {
            inner_radius,
            outer_radius,
            height,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Create a validated geometry from diameters, as printed on datasheets
    pub fn from_diameters(inner_diameter: f64, outer_diameter: f64, height: f64) -> Result<Self> {
        Self::new(inner_diameter / 2.0, outer_diameter / 2.0, height)
    }

    /// Check r_o > r_i > 0 and height > 0, all finite
    pub fn validate(&self) -> Result<()> {
        let reason = if ![self.inner_radius, self.outer_radius, self.height]
            .iter()
            .all(|x| x.is_finite())
        {
            Some("dimensions must be finite")
        } else if self.inner_radius <= 0.0 {
            Some("inner radius must be positive")
        } else if self.height <= 0.0 {
            Some("height must be positive")
        } else if self.outer_radius == self.inner_radius {
            Some("outer radius equals inner radius (path length undefined)")
        } else if self.outer_radius < self.inner_radius {
            Some("outer radius must exceed inner radius")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(PermeabilityError::InvalidGeometry {
                inner_radius: self.inner_radius,
                outer_radius: self.outer_radius,
                height: self.height,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Radial width r_o − r_i
    #[inline]
    pub fn width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Effective dimensions under the given path model
    pub fn effective_dimensions(&self, model: PathModel) -> Result<EffectiveDimensions> {
        self.validate()?;

        let width = self.width();
        let path_length = match model {
            PathModel::Logarithmic => {
                2.0 * PI * width / (self.outer_radius / self.inner_radius).ln()
            }
            PathModel::MeanDiameter => PI * (self.outer_radius + self.inner_radius),
        };

        Ok(EffectiveDimensions {
            path_length,
            area: self.height * width,
        })
    }
}

impl EffectiveDimensions {
    /// Inductance per unit relative permeability: L0 = μ0·A·N²/ℓ
    ///
    /// This is the inductance the winding would have on an air core of the
    /// same shape, so that L = μ·L0.
    pub fn inductance_factor(&self, turns: u32) -> f64 {
        let n = turns as f64;
        MU_0 * self.area * n * n / self.path_length
    }
}

/// Effective path length and area using the logarithmic toroid formula
pub fn compute_effective_dimensions(geometry: &CoreGeometry) -> Result<EffectiveDimensions> {
    geometry.effective_dimensions(PathModel::Logarithmic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_logarithmic_dimensions() {
        let g = CoreGeometry::new(0.01, 0.02, 0.005).unwrap();
        let dims = compute_effective_dimensions(&g).unwrap();

        assert_relative_eq!(
            dims.path_length,
            2.0 * PI * 0.01 / 2.0_f64.ln(),
            max_relative = 1e-14
        );
        assert_relative_eq!(dims.area, 5e-5, max_relative = 1e-14);
    }

    #[test]
    fn test_mean_diameter_dimensions() {
        let g = CoreGeometry::from_diameters(0.010, 0.020, 0.005).unwrap();
        let dims = g.effective_dimensions(PathModel::MeanDiameter).unwrap();

        // mean diameter 15 mm
        assert_relative_eq!(dims.path_length, PI * 0.015, max_relative = 1e-14);
        assert_relative_eq!(dims.area, 0.005 * 0.005, max_relative = 1e-14);
    }

    #[test]
    fn test_logarithmic_path_shorter_than_mean_circumference() {
        let g = CoreGeometry::new(0.005, 0.02, 0.01).unwrap();
        let log = g.effective_dimensions(PathModel::Logarithmic).unwrap();
        let mean = g.effective_dimensions(PathModel::MeanDiameter).unwrap();
        assert!(log.path_length < mean.path_length);
    }

    #[test]
    fn test_thin_ring_models_converge() {
        let g = CoreGeometry::new(0.1, 0.1001, 0.01).unwrap();
        let log = g.effective_dimensions(PathModel::Logarithmic).unwrap();
        let mean = g.effective_dimensions(PathModel::MeanDiameter).unwrap();
        assert_relative_eq!(log.path_length, mean.path_length, max_relative = 1e-6);
    }

    #[test]
    fn test_invalid_geometries() {
        let cases = [
            (0.02, 0.01, 0.005),
            (0.01, 0.01, 0.005),
            (0.0, 0.01, 0.005),
            (-0.01, 0.01, 0.005),
            (0.01, 0.02, 0.0),
            (0.01, 0.02, -1.0),
            (0.01, f64::INFINITY, 0.005),
            (f64::NAN, 0.02, 0.005),
        ];
        for (ri, ro, h) in cases {
            assert!(
                matches!(
                    CoreGeometry::new(ri, ro, h),
                    Err(PermeabilityError::InvalidGeometry { .. })
                ),
                "({}, {}, {}) should be rejected",
                ri,
                ro,
                h
            );
        }
    }

    #[test]
    fn test_unvalidated_geometry_rejected_by_dimensions() {
        let g = CoreGeometry {
            inner_radius: 0.02,
            outer_radius: 0.02,
            height: 0.005,
        };
        assert!(compute_effective_dimensions(&g).is_err());
    }

    #[test]
    fn test_inductance_factor_scales_with_turns_squared() {
        let g = CoreGeometry::new(0.01, 0.02, 0.005).unwrap();
        let dims = compute_effective_dimensions(&g).unwrap();
        assert_relative_eq!(
            dims.inductance_factor(10),
            100.0 * dims.inductance_factor(1),
            max_relative = 1e-14
        );
    }
}
