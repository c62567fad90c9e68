//! Impedance measurements as delivered by a VNA or a synthetic source

use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{PermeabilityError, Result};
use crate::frequency::Frequency;

/// One sample point: frequency in Hz and impedance Z = R + jX in ohms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub frequency: f64,
    pub impedance: Complex64,
}

impl Measurement {
    pub fn new(frequency: f64, impedance: Complex64) -> Self {
        Self {
            frequency,
            impedance,
        }
    }
}

/// Ordered sequence of measurements, normally ascending in frequency
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSweep {
    points: Vec<Measurement>,
}

impl MeasurementSweep {
    pub fn new(points: Vec<Measurement>) -> Self {
        Self { points }
    }

    /// Build from parallel frequency and impedance columns
    pub fn from_columns(frequencies: &[f64], impedances: &[Complex64]) -> Result<Self> {
        Self::zip_columns(frequencies.iter().copied(), impedances.iter().copied())
    }

    /// Build from ndarray columns
    pub fn from_arrays(frequencies: &Array1<f64>, impedances: &Array1<Complex64>) -> Result<Self> {
        Self::zip_columns(frequencies.iter().copied(), impedances.iter().copied())
    }

    fn zip_columns<F, Z>(frequencies: F, impedances: Z) -> Result<Self>
    where
        F: ExactSizeIterator<Item = f64>,
        Z: ExactSizeIterator<Item = Complex64>,
    {
        if frequencies.len() != impedances.len() {
            return Err(PermeabilityError::LengthMismatch {
                frequencies: frequencies.len(),
                impedances: impedances.len(),
            });
        }

        let points = frequencies
            .zip(impedances)
            .map(|(f, z)| Measurement::new(f, z))
            .collect();
        Ok(Self { points })
    }

    /// Evaluate an impedance model on every point of a frequency grid
    pub fn from_frequency<F>(frequency: &Frequency, mut impedance: F) -> Self
    where
        F: FnMut(f64) -> Complex64,
    {
        let points = frequency
            .f()
            .iter()
            .map(|&f| Measurement::new(f, impedance(f)))
            .collect();
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Measurement] {
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

    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.points.iter()
    }

    /// Frequency column in Hz
    pub fn f(&self) -> Array1<f64> {
        self.points.iter().map(|m| m.frequency).collect()
    }

    /// Impedance column in ohms
    pub fn z(&self) -> Array1<Complex64> {
        self.points.iter().map(|m| m.impedance).collect()
    }

    /// True when frequencies are strictly increasing
    pub fn is_ascending(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[0].frequency < w[1].frequency)
    }
}

impl From<Vec<Measurement>> for MeasurementSweep {
    fn from(points: Vec<Measurement>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Measurement> for MeasurementSweep {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MeasurementSweep {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
