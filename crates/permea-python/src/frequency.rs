//! Python bindings for Frequency class

use numpy::{PyArray1, ToPyArray};
use permea_core::frequency::{Frequency, FrequencyUnit, SweepType};
use pyo3::prelude::*;

/// Python wrapper for Frequency
#[pyclass(name = "Frequency")]
#[derive(Clone)]
pub struct PyFrequency {
    inner: Frequency,
}

#[pymethods]
impl PyFrequency {
    /// Create a frequency grid
    ///
    /// Args:
    ///     start: Start frequency in `unit`
    ///     stop: Stop frequency in `unit`
    ///     npoints: Number of frequency points
    ///     unit: Frequency unit ('Hz', 'kHz', 'MHz', 'GHz')
    ///     sweep_type: Sweep type ('linear' or 'log')
    #[new]
    #[pyo3(signature = (start, stop, npoints, unit="Hz", sweep_type="log"))]
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: &str,
        sweep_type: &str,
    ) -> PyResult<Self> {
        let freq_unit = FrequencyUnit::parse(unit).ok_or_else(|| {
            pyo3::exceptions::PyValueError::new_err(format!(
                "Invalid frequency unit: {}. Use 'Hz', 'kHz', 'MHz' or 'GHz'",
                unit
            ))
        })?;

        let sweep = match sweep_type.to_lowercase().as_str() {
            "linear" | "lin" => SweepType::Linear,
            "log" | "logarithmic" => SweepType::Log,
            _ => {
                return Err(pyo3::exceptions::PyValueError::new_err(format!(
                    "Invalid sweep type: {}. Use 'linear' or 'log'",
                    sweep_type
                )))
            }
        };

        Ok(Self {
            inner: Frequency::new(start, stop, npoints, freq_unit, sweep),
        })
    }

    /// Frequency array in Hz
    #[getter]
    pub fn f<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.f().to_pyarray(py)
    }

    /// Frequency array in the display unit
    #[getter]
    pub fn f_scaled<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.f_scaled().to_pyarray(py)
    }

    /// Angular frequency array in rad/s
    #[getter]
    pub fn omega<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.omega().to_pyarray(py)
    }

    #[getter]
    pub fn npoints(&self) -> usize {
        self.inner.npoints()
    }

    #[getter]
    pub fn unit(&self) -> &'static str {
        self.inner.unit().label()
    }

    fn __repr__(&self) -> String {
        let mult = self.inner.unit().multiplier();
        format!(
            "Frequency({} {} - {} {}, {} points)",
            self.inner.start() / mult,
            self.unit(),
            self.inner.stop() / mult,
            self.unit(),
            self.npoints()
        )
    }

    fn __len__(&self) -> usize {
        self.npoints()
    }
}

impl PyFrequency {
    pub fn inner(&self) -> &Frequency {
        &self.inner
    }
}
