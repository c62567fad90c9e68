//! Pointwise conversion and the reusable calculator

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::config::{CalculatorConfig, NonPhysicalPolicy, SetupConfig};
use crate::error::{PermeabilityError, Result};
use crate::geometry::{CoreGeometry, EffectiveDimensions};
use crate::measurement::Measurement;
use crate::permeability::{NonPhysicalWarning, PermeabilityResult};

/// Geometry and options validated once, reused for every conversion
#[derive(Debug, Clone, Copy)]
pub struct PermeabilityCalculator {
    geometry: CoreGeometry,
    dims: EffectiveDimensions,
    config: CalculatorConfig,
    /// L0 = μ0·A·N²/ℓ
    inductance_factor: f64,
}

impl PermeabilityCalculator {
    /// Validate geometry and options and precompute the normalization
    pub fn new(geometry: CoreGeometry, config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        let dims = geometry.effective_dimensions(config.path_model)?;

        Ok(Self {
            geometry,
            dims,
            config,
            inductance_factor: dims.inductance_factor(config.turns),
        })
    }

    pub fn from_setup(setup: &SetupConfig) -> Result<Self> {
        Self::new(setup.geometry, setup.calculator)
    }

    #[inline]
    pub fn geometry(&self) -> &CoreGeometry {
        &self.geometry
    }

    #[inline]
    pub fn dimensions(&self) -> &EffectiveDimensions {
        &self.dims
    }

    #[inline]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Air-core inductance L0 of the winding in H
    #[inline]
    pub fn inductance_factor(&self) -> f64 {
        self.inductance_factor
    }

    /// Convert one impedance sample to complex permeability
    ///
    /// # Errors
    /// * `ZeroFrequency` - frequency is not a positive finite number
    /// * `NonFiniteImpedance` - impedance has a NaN or infinite part
    /// * `OutOfRange` - ω·L0 or the resulting μ overflows or underflows f64
    /// * `NonPhysicalResult` - μ'' below tolerance under `NonPhysicalPolicy::Reject`
    pub fn convert(&self, frequency: f64, impedance: Complex64) -> Result<PermeabilityResult> {
        if !(frequency.is_finite() && frequency > 0.0) {
            return Err(PermeabilityError::ZeroFrequency {
                frequency,
                index: None,
            });
        }
        if !impedance.is_finite() {
            return Err(PermeabilityError::NonFiniteImpedance {
                frequency,
                re: impedance.re,
                im: impedance.im,
                index: None,
            });
        }

        // ω·L0 must be a normal positive f64
        let omega_l0 = 2.0 * PI * frequency * self.inductance_factor;
        let mu_real = impedance.im / omega_l0;
        let mu_loss = impedance.re / omega_l0;
        if !(omega_l0.is_normal() && mu_real.is_finite() && mu_loss.is_finite()) {
            return Err(PermeabilityError::OutOfRange {
                frequency,
                index: None,
            });
        }
        let mu = Complex64::new(mu_real, -mu_loss);

        let warning = if mu_loss < -self.config.loss_tolerance {
            match self.config.non_physical {
                NonPhysicalPolicy::Warn => {
                    log::warn!(
                        "non-physical loss mu''={:.6e} at {:.6e} Hz (negative resistance {:.6e} ohm)",
                        mu_loss,
                        frequency,
                        impedance.re
                    );
                    Some(NonPhysicalWarning { frequency, mu_loss })
                }
                NonPhysicalPolicy::Reject => {
                    return Err(PermeabilityError::NonPhysicalResult {
                        frequency,
                        mu_loss,
                        index: None,
                    })
                }
            }
        } else {
            None
        };

        Ok(PermeabilityResult {
            frequency,
            mu,
            warning,
        })
    }

    #[inline]
    pub fn convert_measurement(&self, measurement: &Measurement) -> Result<PermeabilityResult> {
        self.convert(measurement.frequency, measurement.impedance)
    }

    /// Impedance a core of permeability `mu` would present at `frequency`
    pub fn impedance(&self, frequency: f64, mu: Complex64) -> Complex64 {
        forward(frequency, mu, self.inductance_factor)
    }
}

/// Z = jω·μ·L0
fn forward(frequency: f64, mu: Complex64, inductance_factor: f64) -> Complex64 {
    Complex64::new(0.0, 2.0 * PI * frequency * inductance_factor) * mu
}

/// Convert one impedance sample using the logarithmic path model
///
/// Non-physical loss is reported as a warning on the result, not an error.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use permea_core::calculator::impedance_to_permeability;
/// use permea_core::geometry::CoreGeometry;
///
/// let geometry = CoreGeometry::new(0.01, 0.02, 0.005).unwrap();
/// let mu = impedance_to_permeability(1e6, Complex64::new(0.02, 0.4), &geometry, 1).unwrap();
/// assert!(mu.mu_real() > 0.0);
/// ```
pub fn impedance_to_permeability(
    frequency: f64,
    impedance: Complex64,
    geometry: &CoreGeometry,
    turns: u32,
) -> Result<PermeabilityResult> {
    PermeabilityCalculator::new(*geometry, CalculatorConfig::with_turns(turns))?
        .convert(frequency, impedance)
}

/// Forward model: impedance of an N-turn winding on a core of permeability `mu`
pub fn permeability_to_impedance(
    frequency: f64,
    mu: Complex64,
    dims: &EffectiveDimensions,
    turns: u32,
) -> Complex64 {
    forward(frequency, mu, dims.inductance_factor(turns))
}
