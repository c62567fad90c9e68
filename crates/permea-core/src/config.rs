//! Calculator options and TOML setup files
//!
//! A setup file describes the core under test and how its sweep is converted:
//!
//! ```toml
//! [geometry]
//! inner_radius = 0.005
//! outer_radius = 0.010
//! height = 0.005
//!
//! [calculator]
//! turns = 10
//! path_model = "mean_diameter"
//! non_physical = "warn"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOSS_TOLERANCE, DEFAULT_TURNS};
use crate::error::{PermeabilityError, Result};
use crate::geometry::{CoreGeometry, PathModel};

/// What to do when a point has negative loss μ''
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonPhysicalPolicy {
    /// Keep the value, attach a warning and log it
    #[default]
    Warn,
    /// Fail with `PermeabilityError::NonPhysicalResult`
    Reject,
}

/// Conversion options shared by every point of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Winding turns N
    pub turns: u32,
    pub path_model: PathModel,
    pub non_physical: NonPhysicalPolicy,
    /// μ'' is flagged when below `-loss_tolerance`
    pub loss_tolerance: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            turns: DEFAULT_TURNS,
            path_model: PathModel::default(),
            non_physical: NonPhysicalPolicy::default(),
            loss_tolerance: DEFAULT_LOSS_TOLERANCE,
        }
    }
}

impl CalculatorConfig {
    pub fn with_turns(turns: u32) -> Self {
        Self {
            turns,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.turns == 0 {
            return Err(PermeabilityError::InvalidTurns(self.turns));
        }
        if !(self.loss_tolerance.is_finite() && self.loss_tolerance >= 0.0) {
            return Err(PermeabilityError::InvalidLossTolerance(self.loss_tolerance));
        }
        Ok(())
    }
}

/// A core under test together with its conversion options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetupConfig {
    pub geometry: CoreGeometry,
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

impl SetupConfig {
    /// Parse and validate a setup from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let setup: SetupConfig = toml::from_str(content)?;
        setup.geometry.validate()?;
        setup.calculator.validate()?;
        Ok(setup)
    }

    /// Load and validate a setup from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
