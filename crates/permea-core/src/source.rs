//! Measurement sources
//!
//! Anything that can produce an impedance sweep on a frequency grid
//! implements [`MeasurementSource`]: a live instrument wrapper, recorded data,
//! or one of the synthetic models below used for examples and tests.

use std::f64::consts::PI;
use std::fmt;

use num_complex::Complex64;

use crate::calculator::permeability_to_impedance;
use crate::config::CalculatorConfig;
use crate::constants::{SYNTH_BASE_INDUCTANCE, SYNTH_LOSS_RATIO, SYNTH_RELAXATION_FREQ};
use crate::error::Result;
use crate::frequency::{Frequency, FrequencyUnit, SweepType};
use crate::geometry::{CoreGeometry, EffectiveDimensions};
use crate::measurement::MeasurementSweep;

/// Supplies impedance sweeps to the calculator
pub trait MeasurementSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Impedance at every point of `frequency`
    fn measure(&self, frequency: &Frequency) -> Result<MeasurementSweep>;
}

/// Default example grid: 10 kHz to 100 MHz, 100 log-spaced points
pub fn example_frequency() -> Frequency {
    Frequency::new(10.0, 100_000.0, 100, FrequencyUnit::KHz, SweepType::Log)
}

/// Lossy ferrite with a single relaxation
///
/// L(f) = L_base / (1 + (f/f_r)²), R = k·ω·L, Z = R + jωL
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticFerrite {
    pub base_inductance: f64,
    pub relaxation_frequency: f64,
    pub loss_ratio: f64,
}

impl Default for SyntheticFerrite {
    fn default() -> Self {
        Self {
            base_inductance: SYNTH_BASE_INDUCTANCE,
            relaxation_frequency: SYNTH_RELAXATION_FREQ,
            loss_ratio: SYNTH_LOSS_RATIO,
        }
    }
}

impl SyntheticFerrite {
    pub fn inductance(&self, frequency: f64) -> f64 {
        let x = frequency / self.relaxation_frequency;
        self.base_inductance / (1.0 + x * x)
    }

    pub fn impedance(&self, frequency: f64) -> Complex64 {
        let reactance = 2.0 * PI * frequency * self.inductance(frequency);
        Complex64::new(self.loss_ratio * reactance, reactance)
    }
}

impl MeasurementSource for SyntheticFerrite {
    fn name(&self) -> &str {
        "synthetic ferrite"
    }

    fn measure(&self, frequency: &Frequency) -> Result<MeasurementSweep> {
        Ok(MeasurementSweep::from_frequency(frequency, |f| self.impedance(f)))
    }
}

/// Synthesizes the impedance a known permeability spectrum would produce
pub struct KnownPermeability {
    dims: EffectiveDimensions,
    turns: u32,
    mu: Box<dyn Fn(f64) -> Complex64 + Send + Sync>,
}

impl KnownPermeability {
    /// Permeability given as a function of frequency in Hz
    pub fn new<F>(geometry: &CoreGeometry, config: &CalculatorConfig, mu: F) -> Result<Self>
    where
        F: Fn(f64) -> Complex64 + Send + Sync + 'static,
    {
        config.validate()?;
        Ok(Self {
            dims: geometry.effective_dimensions(config.path_model)?,
            turns: config.turns,
            mu: Box::new(mu),
        })
    }

    /// Frequency-independent permeability
    pub fn constant(
        geometry: &CoreGeometry,
        config: &CalculatorConfig,
        mu: Complex64,
    ) -> Result<Self> {
        Self::new(geometry, config, move |_| mu)
    }

    /// Target permeability at `frequency`
    pub fn mu(&self, frequency: f64) -> Complex64 {
        (self.mu)(frequency)
    }
}

impl fmt::Debug for KnownPermeability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnownPermeability")
            .field("dims", &self.dims)
            .field("turns", &self.turns)
            .finish_non_exhaustive()
    }
}

impl MeasurementSource for KnownPermeability {
    fn name(&self) -> &str {
        "known permeability"
    }

    fn measure(&self, frequency: &Frequency) -> Result<MeasurementSweep> {
        Ok(MeasurementSweep::from_frequency(frequency, |f| {
            permeability_to_impedance(f, self.mu(f), &self.dims, self.turns)
        }))
    }
}
