//! Python bindings for permea-core
//!
//! Exposes the permeability calculator to Python via PyO3 so that sweeps can
//! be converted in Rust and plotted with the usual numpy/matplotlib tooling.
//!
//! ## Classes
//!
//! - `Frequency` - Frequency grid
//! - `CoreGeometry` - Toroidal core dimensions
//! - `PermeabilitySweep` - Converted sweep with numpy columns
//!
//! ## Functions
//!
//! - `impedance_to_permeability` - Convert a single sample
//! - `compute_sweep` - Convert frequency/impedance arrays
//! - `synthetic_ferrite` - Example impedance data

use permea_core::PermeabilityError;
use pyo3::prelude::*;

mod calculator;
mod frequency;
mod geometry;

pub use calculator::PyPermeabilitySweep;
pub use frequency::PyFrequency;
pub use geometry::PyCoreGeometry;

/// Map core errors onto Python exceptions
pub(crate) fn to_py_err(err: PermeabilityError) -> PyErr {
    match err {
        PermeabilityError::Io(e) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
        other => pyo3::exceptions::PyValueError::new_err(other.to_string()),
    }
}

/// permea - complex permeability of toroidal cores from VNA impedance
///
/// Example:
///     >>> import permea
///     >>> g = permea.CoreGeometry(0.005, 0.010, 0.005)
///     >>> freq = permea.Frequency(10, 100e3, 100, unit="kHz", sweep_type="log")
///     >>> z = permea.synthetic_ferrite(freq)
///     >>> mu = permea.compute_sweep(freq.f, z, g, turns=10)
///     >>> mu.mu_real, mu.mu_loss
#[pymodule]
fn permea(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFrequency>()?;
    m.add_class::<PyCoreGeometry>()?;
    m.add_class::<PyPermeabilitySweep>()?;

    m.add_function(wrap_pyfunction!(calculator::impedance_to_permeability, m)?)?;
    m.add_function(wrap_pyfunction!(calculator::compute_sweep, m)?)?;
    m.add_function(wrap_pyfunction!(calculator::synthetic_ferrite, m)?)?;

    m.add("MU_0", permea_core::constants::MU_0)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
