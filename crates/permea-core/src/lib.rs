//! permea-core: complex permeability of toroidal magnetic cores
//!
//! Converts VNA impedance sweeps of a wound (or bare) toroid into complex
//! relative permeability μ = μ' − jμ''.
//!
//! ## Modules
//!
//! - `geometry` - Core dimensions and effective path length / area
//! - `measurement` - Impedance samples and sweeps
//! - `calculator` - Impedance to permeability conversion
//! - `permeability` - Results and plotting columns
//! - `source` - Synthetic and injectable measurement sources
//! - `config` - Calculator options and TOML setup files
//! - `frequency` - Frequency grids
//! - `math` - Complex number conversions

pub mod calculator;
pub mod config;
pub mod constants;
pub mod error;
pub mod frequency;
pub mod geometry;
pub mod math;
pub mod measurement;
pub mod permeability;
pub mod source;

pub use calculator::{
    compute_sweep, compute_sweep_par, impedance_to_permeability, permeability_to_impedance,
    PermeabilityCalculator,
};
pub use config::{CalculatorConfig, NonPhysicalPolicy, SetupConfig};
pub use error::PermeabilityError;
pub use frequency::Frequency;
pub use geometry::{compute_effective_dimensions, CoreGeometry, EffectiveDimensions, PathModel};
pub use measurement::{Measurement, MeasurementSweep};
pub use permeability::{NonPhysicalWarning, PermeabilityResult, PermeabilitySweep};
pub use source::MeasurementSource;
