//! Python bindings for the permeability calculator

use num_complex::Complex64;
use numpy::{PyArray1, PyReadonlyArray1, ToPyArray};
use permea_core::config::{CalculatorConfig, NonPhysicalPolicy};
use permea_core::source::SyntheticFerrite;
use permea_core::{MeasurementSource, MeasurementSweep, PermeabilityCalculator, PermeabilitySweep};
use pyo3::prelude::*;

use crate::frequency::PyFrequency;
use crate::geometry::{parse_path_model, PyCoreGeometry};
use crate::to_py_err;

/// Python wrapper for PermeabilitySweep
#[pyclass(name = "PermeabilitySweep")]
pub struct PyPermeabilitySweep {
    inner: PermeabilitySweep,
}

#[pymethods]
impl PyPermeabilitySweep {
    /// Frequency array in Hz
    #[getter]
    pub fn f<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.f().to_pyarray(py)
    }

    /// Complex permeability μ = μ' − jμ''
    #[getter]
    pub fn mu<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.mu().to_pyarray(py)
    }

    /// Real part μ'
    #[getter]
    pub fn mu_real<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.mu_real().to_pyarray(py)
    }

    /// Loss part μ'' (positive for passive material)
    #[getter]
    pub fn mu_loss<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.mu_loss().to_pyarray(py)
    }

    /// Magnitude |μ|
    #[getter]
    pub fn mu_mag<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.mu_mag().to_pyarray(py)
    }

    /// Phase of μ in degrees
    #[getter]
    pub fn mu_deg<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.mu_deg().to_pyarray(py)
    }

    /// Loss tangent μ''/μ'
    #[getter]
    pub fn loss_tangent<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.loss_tangent().to_pyarray(py)
    }

    /// Frequencies (Hz) where the computed loss was negative
    #[getter]
    pub fn warnings(&self) -> Vec<f64> {
        self.inner.warnings().iter().map(|w| w.frequency).collect()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "PermeabilitySweep({} points, {} warnings)",
            self.inner.len(),
            self.inner.warnings().len()
        )
    }
}

fn build_calculator(
    geometry: &PyCoreGeometry,
    turns: u32,
    path_model: &str,
    strict: bool,
) -> PyResult<PermeabilityCalculator> {
    let config = CalculatorConfig {
        turns,
        path_model: parse_path_model(path_model)?,
        non_physical: if strict {
            NonPhysicalPolicy::Reject
        } else {
            NonPhysicalPolicy::Warn
        },
        ..CalculatorConfig::default()
    };
    PermeabilityCalculator::new(*geometry.inner(), config).map_err(to_py_err)
}

/// Convert one impedance sample to complex permeability
///
/// Args:
///     frequency: Frequency in Hz (> 0)
///     impedance: Complex impedance in ohms
///     geometry: CoreGeometry
///     turns: Winding turns (default: 1)
///     path_model: 'logarithmic' or 'mean_diameter' (default: 'logarithmic')
///
/// Returns:
///     complex permeability μ' − jμ''
#[pyfunction]
#[pyo3(signature = (frequency, impedance, geometry, turns=1, path_model="logarithmic"))]
pub fn impedance_to_permeability(
    frequency: f64,
    impedance: Complex64,
    geometry: &PyCoreGeometry,
    turns: u32,
    path_model: &str,
) -> PyResult<Complex64> {
    let calc = build_calculator(geometry, turns, path_model, false)?;
    calc.convert(frequency, impedance)
        .map(|r| r.mu)
        .map_err(to_py_err)
}

/// Convert a frequency/impedance sweep
///
/// Args:
///     f: Frequency array in Hz
///     z: Complex impedance array in ohms, same length as `f`
///     geometry: CoreGeometry
///     turns: Winding turns (default: 1)
///     path_model: 'logarithmic' or 'mean_diameter' (default: 'logarithmic')
///     strict: Raise on negative loss instead of warning (default: False)
///     parallel: Convert on a thread pool (default: False)
#[pyfunction]
#[pyo3(signature = (f, z, geometry, turns=1, path_model="logarithmic", strict=false, parallel=false))]
#[allow(clippy::too_many_arguments)]
pub fn compute_sweep(
    py: Python<'_>,
    f: PyReadonlyArray1<'_, f64>,
    z: PyReadonlyArray1<'_, Complex64>,
    geometry: &PyCoreGeometry,
    turns: u32,
    path_model: &str,
    strict: bool,
    parallel: bool,
) -> PyResult<PyPermeabilitySweep> {
    let calc = build_calculator(geometry, turns, path_model, strict)?;
    let sweep = MeasurementSweep::from_arrays(&f.as_array().to_owned(), &z.as_array().to_owned())
        .map_err(to_py_err)?;

    let result = py.allow_threads(|| {
        if parallel {
            calc.compute_sweep_par(&sweep)
        } else {
            calc.compute_sweep(&sweep)
        }
    });

    result
        .map(|inner| PyPermeabilitySweep { inner })
        .map_err(to_py_err)
}

/// Impedance of the example ferrite model on a frequency grid
///
/// Args:
///     frequency: Frequency grid
///     base_inductance: Low-frequency inductance in H (default: 1e-6)
///     relaxation_frequency: Frequency where L halves, in Hz (default: 1e7)
///     loss_ratio: R / X ratio (default: 0.1)
#[pyfunction]
#[pyo3(signature = (frequency, base_inductance=1e-6, relaxation_frequency=1e7, loss_ratio=0.1))]
pub fn synthetic_ferrite<'py>(
    py: Python<'py>,
    frequency: &PyFrequency,
    base_inductance: f64,
    relaxation_frequency: f64,
    loss_ratio: f64,
) -> PyResult<Bound<'py, PyArray1<Complex64>>> {
    let model = SyntheticFerrite {
        base_inductance,
        relaxation_frequency,
        loss_ratio,
    };
    let sweep = model.measure(frequency.inner()).map_err(to_py_err)?;
    Ok(sweep.z().to_pyarray(py))
}
