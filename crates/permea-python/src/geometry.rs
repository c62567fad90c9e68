//! Python bindings for CoreGeometry

use permea_core::geometry::{CoreGeometry, PathModel};
use pyo3::prelude::*;

use crate::to_py_err;

/// Python wrapper for CoreGeometry (dimensions in meters)
#[pyclass(name = "CoreGeometry")]
#[derive(Clone)]
pub struct PyCoreGeometry {
    inner: CoreGeometry,
}

#[pymethods]
impl PyCoreGeometry {
    /// Create a toroid geometry from radii
    ///
    /// Raises:
    ///     ValueError: if outer_radius <= inner_radius or any dimension <= 0
    #[new]
    pub fn new(inner_radius: f64, outer_radius: f64, height: f64) -> PyResult<Self> {
        CoreGeometry::new(inner_radius, outer_radius, height)
            .map(|inner| Self { inner })
            .map_err(to_py_err)
    }

    /// Create a toroid geometry from diameters
    #[staticmethod]
    pub fn from_diameters(inner_diameter: f64, outer_diameter: f64, height: f64) -> PyResult<Self> {
        CoreGeometry::from_diameters(inner_diameter, outer_diameter, height)
            .map(|inner| Self { inner })
            .map_err(to_py_err)
    }

    #[getter]
    pub fn inner_radius(&self) -> f64 {
        self.inner.inner_radius
    }

    #[getter]
    pub fn outer_radius(&self) -> f64 {
        self.inner.outer_radius
    }

    #[getter]
    pub fn height(&self) -> f64 {
        self.inner.height
    }

    /// Effective (path_length, area) in (m, m²)
    ///
    /// Args:
    ///     path_model: 'logarithmic' (default) or 'mean_diameter'
    #[pyo3(signature = (path_model="logarithmic"))]
    pub fn effective_dimensions(&self, path_model: &str) -> PyResult<(f64, f64)> {
        let dims = self
            .inner
            .effective_dimensions(parse_path_model(path_model)?)
            .map_err(to_py_err)?;
        Ok((dims.path_length, dims.area))
    }

    fn __repr__(&self) -> String {
        format!(
            "CoreGeometry(inner_radius={}, outer_radius={}, height={})",
            self.inner.inner_radius, self.inner.outer_radius, self.inner.height
        )
    }
}

impl PyCoreGeometry {
    pub fn inner(&self) -> &CoreGeometry {
        &self.inner
    }
}

pub(crate) fn parse_path_model(s: &str) -> PyResult<PathModel> {
    match s.to_lowercase().as_str() {
        "logarithmic" | "log" => Ok(PathModel::Logarithmic),
        "mean_diameter" | "mean" => Ok(PathModel::MeanDiameter),
        _ => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "Invalid path model: {}. Use 'logarithmic' or 'mean_diameter'",
            s
        ))),
    }
}
