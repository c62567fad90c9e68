//! Sweep conversion, sequential and parallel
//!
//! A sweep is aborted on the first sample that cannot be converted; the
//! returned error carries that sample's index. The parallel path collects
//! every per-sample result in input order before picking the first error,
//! so both paths return the same value for the same input.

use rayon::prelude::*;

use super::core::PermeabilityCalculator;
use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::geometry::CoreGeometry;
use crate::measurement::MeasurementSweep;
use crate::permeability::{PermeabilityResult, PermeabilitySweep};

impl PermeabilityCalculator {
    /// Convert every measurement in order
    pub fn compute_sweep(&self, sweep: &MeasurementSweep) -> Result<PermeabilitySweep> {
        log_sweep_shape(sweep);

        let points = sweep
            .iter()
            .enumerate()
            .map(|(i, m)| self.convert_measurement(m).map_err(|e| e.at_index(i)))
            .collect::<Result<Vec<_>>>()?;

        Ok(finish(points))
    }

    /// Convert every measurement on the rayon pool, preserving order
    pub fn compute_sweep_par(&self, sweep: &MeasurementSweep) -> Result<PermeabilitySweep> {
        log_sweep_shape(sweep);

        let results: Vec<Result<PermeabilityResult>> = sweep
            .points()
            .par_iter()
            .enumerate()
            .map(|(i, m)| self.convert_measurement(m).map_err(|e| e.at_index(i)))
            .collect();
        let points = results.into_iter().collect::<Result<Vec<_>>>()?;

        Ok(finish(points))
    }
}

fn log_sweep_shape(sweep: &MeasurementSweep) {
    if !sweep.is_ascending() {
        log::debug!(
            "measurement sweep of {} points is not in ascending frequency order",
            sweep.len()
        );
    }
}

fn finish(points: Vec<PermeabilityResult>) -> PermeabilitySweep {
    let sweep = PermeabilitySweep::new(points);
    let flagged = sweep.iter().filter(|p| p.warning.is_some()).count();
    log::debug!(
        "converted {} points ({} with non-physical loss)",
        sweep.len(),
        flagged
    );
    sweep
}

/// Convert a whole sweep with the logarithmic path model
///
/// Output has the same length and order as the input. The first sample with
/// a non-positive frequency aborts the sweep.
pub fn compute_sweep(
    sweep: &MeasurementSweep,
    geometry: &CoreGeometry,
    turns: u32,
) -> Result<PermeabilitySweep> {
    PermeabilityCalculator::new(*geometry, CalculatorConfig::with_turns(turns))?
        .compute_sweep(sweep)
}

/// Parallel variant of [`compute_sweep`], identical output
pub fn compute_sweep_par(
    sweep: &MeasurementSweep,
    geometry: &CoreGeometry,
    turns: u32,
) -> Result<PermeabilitySweep> {
    PermeabilityCalculator::new(*geometry, CalculatorConfig::with_turns(turns))?
        .compute_sweep_par(sweep)
}
