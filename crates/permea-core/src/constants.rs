//! Physical and numerical constants
//!
//! Provides the vacuum permeability, conversion defaults and the parameters
//! of the synthetic ferrite model.

use std::f64::consts::PI;

/// Vacuum permeability μ0 in H/m (classical definition 4π×10⁻⁷).
pub const MU_0: f64 = 4.0 * PI * 1e-7;

/// Default tolerance below zero before a loss term is flagged as non-physical.
pub const DEFAULT_LOSS_TOLERANCE: f64 = 0.0;

/// Default number of winding turns (single-turn fixture).
pub const DEFAULT_TURNS: u32 = 1;

// Bench example model for a small MnZn ferrite toroid

/// Base inductance of the synthetic ferrite model (H).
pub const SYNTH_BASE_INDUCTANCE: f64 = 1e-6;

/// Relaxation frequency where the synthetic μ' has dropped to half (Hz).
pub const SYNTH_RELAXATION_FREQ: f64 = 1e7;

/// Ratio of resistance to reactance in the synthetic model.
pub const SYNTH_LOSS_RATIO: f64 = 0.1;
