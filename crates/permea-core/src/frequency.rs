//! Frequency grid for measurement sweeps
//!
//! A VNA sweep is described by its start/stop/points and spacing; this module
//! builds that grid in Hz and keeps the display unit around for reporting.

use std::f64::consts::PI;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Frequency unit enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyUnit {
    #[default]
    Hz,
    KHz,
    MHz,
    GHz,
}

impl FrequencyUnit {
    /// Multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
            FrequencyUnit::MHz => 1e6,
            FrequencyUnit::GHz => 1e9,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hz" => Some(FrequencyUnit::Hz),
            "khz" => Some(FrequencyUnit::KHz),
            "mhz" => Some(FrequencyUnit::MHz),
            "ghz" => Some(FrequencyUnit::GHz),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
        }
    }
}

/// Point spacing of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepType {
    Linear,
    /// Logarithmic spacing, the usual choice for permeability spectra
    #[default]
    Log,
}

/// Frequency grid of a sweep, stored in Hz
#[derive(Debug, Clone)]
pub struct Frequency {
    f: Vec<f64>,
    unit: FrequencyUnit,
    sweep_type: SweepType,
}

impl Frequency {
    /// Create a grid from start/stop/npoints given in `unit`
    ///
    /// # Example
    /// ```
    /// use permea_core::frequency::{Frequency, FrequencyUnit, SweepType};
    /// // 10 kHz to 100 MHz, 100 log-spaced points
    /// let freq = Frequency::new(10.0, 100_000.0, 100, FrequencyUnit::KHz, SweepType::Log);
    /// assert_eq!(freq.npoints(), 100);
    /// ```
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: FrequencyUnit,
        sweep_type: SweepType,
    ) -> Self {
        let mult = unit.multiplier();
        let start_hz = start * mult;
        let stop_hz = stop * mult;

        let f = match (npoints, sweep_type) {
            (0, _) => Vec::new(),
            (1, _) => vec![start_hz],
            (_, SweepType::Linear) => {
                let step = (stop_hz - start_hz) / (npoints - 1) as f64;
                (0..npoints).map(|i| start_hz + i as f64 * step).collect()
            }
            (_, SweepType::Log) => {
                let log_start = start_hz.ln();
                let log_step = (stop_hz.ln() - log_start) / (npoints - 1) as f64;
                (0..npoints)
                    .map(|i| (log_start + i as f64 * log_step).exp())
                    .collect()
            }
        };

        Self {
            f,
            unit,
            sweep_type,
        }
    }

    /// Create from explicit points given in `unit`
    pub fn from_f(f: Vec<f64>, unit: FrequencyUnit) -> Self {
        let mult = unit.multiplier();
        Self {
            f: f.into_iter().map(|x| x * mult).collect(),
            unit,
            sweep_type: SweepType::Linear, // actual spacing unknown
        }
    }

    /// Frequency points in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Frequency points in the display unit
    pub fn f_scaled(&self) -> Array1<f64> {
        let mult = self.unit.multiplier();
        self.f.iter().map(|&x| x / mult).collect()
    }

    /// Angular frequency ω = 2πf in rad/s
    pub fn omega(&self) -> Array1<f64> {
        self.f.iter().map(|&x| 2.0 * PI * x).collect()
    }

    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    /// Start frequency in Hz
    #[inline]
    pub fn start(&self) -> f64 {
        self.f.first().copied().unwrap_or(0.0)
    }

    /// Stop frequency in Hz
    #[inline]
    pub fn stop(&self) -> f64 {
        self.f.last().copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    #[inline]
    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_log_sweep_endpoints_and_ratio() {
        let freq = Frequency::new(10.0, 100_000.0, 100, FrequencyUnit::KHz, SweepType::Log);

        assert_eq!(freq.npoints(), 100);
        assert_relative_eq!(freq.start(), 1e4, max_relative = 1e-12);
        assert_relative_eq!(freq.stop(), 1e8, max_relative = 1e-12);

        let ratios: Vec<f64> = freq.f().windows(2).map(|w| w[1] / w[0]).collect();
        for r in &ratios[1..] {
            assert_relative_eq!(*r, ratios[0], max_relative = 1e-10);
        }
    }

    #[test]
    fn test_linear_sweep() {
        let freq = Frequency::new(1.0, 10.0, 10, FrequencyUnit::MHz, SweepType::Linear);

        assert_relative_eq!(freq.f()[1], 2e6, epsilon = 1e-6);
        let scaled = freq.f_scaled();
        assert_relative_eq!(scaled[9], 10.0, epsilon = 1e-10);
    }

    #[test]
    fn test_degenerate_point_counts() {
        let empty = Frequency::new(1.0, 2.0, 0, FrequencyUnit::Hz, SweepType::Log);
        assert_eq!(empty.npoints(), 0);
        assert_eq!(empty.start(), 0.0);

        let single = Frequency::new(5.0, 9.0, 1, FrequencyUnit::KHz, SweepType::Linear);
        assert_eq!(single.f(), &[5e3]);
    }

    #[test]
    fn test_omega() {
        let freq = Frequency::from_f(vec![1.0], FrequencyUnit::MHz);
        assert_relative_eq!(freq.omega()[0], 2.0 * PI * 1e6, max_relative = 1e-15);
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!(FrequencyUnit::parse("MHZ"), Some(FrequencyUnit::MHz));
        assert_eq!(FrequencyUnit::parse("khz"), Some(FrequencyUnit::KHz));
        assert_eq!(FrequencyUnit::parse("thz"), None);
        assert_eq!(FrequencyUnit::GHz.label(), "GHz");
    }
}
