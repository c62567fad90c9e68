//! Error types for geometry validation and permeability conversion

use thiserror::Error;

/// Errors raised while validating inputs or converting impedance to permeability
#[derive(Error, Debug)]
pub enum PermeabilityError {
    #[error(
        "Invalid core geometry (inner_radius={inner_radius}, outer_radius={outer_radius}, height={height}): {reason}"
    )]
    InvalidGeometry {
        inner_radius: f64,
        outer_radius: f64,
        height: f64,
        reason: &'static str,
    },

    #[error("Invalid turn count: {0} (must be at least 1)")]
    InvalidTurns(u32),

    #[error("Invalid loss tolerance: {0} (must be finite and non-negative)")]
    InvalidLossTolerance(f64),

    #[error("Non-positive frequency {frequency} Hz{}", fmt_index(.index))]
    ZeroFrequency { frequency: f64, index: Option<usize> },

    #[error("Non-finite impedance ({re}, {im}) at {frequency} Hz{}", fmt_index(.index))]
    NonFiniteImpedance {
        frequency: f64,
        re: f64,
        im: f64,
        index: Option<usize>,
    },

    #[error(
        "Permeability at {frequency} Hz is outside floating-point range{}",
        fmt_index(.index)
    )]
    OutOfRange { frequency: f64, index: Option<usize> },

    #[error("Negative loss mu''={mu_loss} at {frequency} Hz{}", fmt_index(.index))]
    NonPhysicalResult {
        frequency: f64,
        mu_loss: f64,
        index: Option<usize>,
    },

    #[error("Column length mismatch: {frequencies} frequencies, {impedances} impedances")]
    LengthMismatch { frequencies: usize, impedances: usize },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" (sample {})", i),
        None => String::new(),
    }
}

impl PermeabilityError {
    /// Attach a sweep sample index to a per-sample error
    pub(crate) fn at_index(self, i: usize) -> Self {
        match self {
            Self::ZeroFrequency { frequency, .. } => Self::ZeroFrequency {
                frequency,
                index: Some(i),
            },
            Self::OutOfRange { frequency, .. } => Self::OutOfRange {
                frequency,
                index: Some(i),
            },
            Self::NonFiniteImpedance {
                frequency, re, im, ..
            } => Self::NonFiniteImpedance {
                frequency,
                re,
                im,
                index: Some(i),
            },
            Self::NonPhysicalResult {
                frequency, mu_loss, ..
            } => Self::NonPhysicalResult {
                frequency,
                mu_loss,
                index: Some(i),
            },
            other => other,
        }
    }

    /// Sweep sample index the error refers to, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::ZeroFrequency { index, .. }
            | Self::OutOfRange { index, .. }
            | Self::NonFiniteImpedance { index, .. }
            | Self::NonPhysicalResult { index, .. } => *index,
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, PermeabilityError>;
