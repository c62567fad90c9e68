//! Permeability calculator - impedance to complex permeability
//!
//! For a winding of N turns on a toroid with effective path length ℓ and
//! area A, the air-core inductance is L0 = μ0·A·N²/ℓ and the measured
//! impedance is Z = jω·μ·L0 with μ = μ' − jμ''. Hence
//!
//! - μ'  = Im(Z) / (ω·L0)
//! - μ'' = Re(Z) / (ω·L0)
//!
//! Each frequency point is converted independently of the others.

mod core;
mod sweep;

pub use self::core::{
    impedance_to_permeability, permeability_to_impedance, PermeabilityCalculator,
};
pub use sweep::{compute_sweep, compute_sweep_par};
