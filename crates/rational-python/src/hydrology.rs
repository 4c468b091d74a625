use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::{parse_policy, rain_from_arrays, value_error};

use rational_core::{Basin, Drainage, Shape, K_RATIONAL};

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

define_series_result! {
    /// Flood computation table with typed numpy array attributes.
    pub struct FloodTable from rational_core::FloodSeries {
        time, rainfall, intensity, flow,
    }
}

// ---------------------------------------------------------------------------
// Basin
// ---------------------------------------------------------------------------

/// A watershed draining to a node with rational-method hydrology.
#[pyclass(name = "Basin")]
#[derive(Clone)]
pub struct PyBasin {
    inner: Basin,
}

fn to_shapes(shapes: &[(f64, f64)]) -> Vec<Shape> {
    shapes.iter().copied().map(Shape::from).collect()
}

#[pymethods]
impl PyBasin {
    #[new]
    #[pyo3(signature = (tc, area=0.0, c=0.0, shapes=None))]
    fn new(tc: f64, area: f64, c: f64, shapes: Option<Vec<(f64, f64)>>) -> PyResult<Self> {
        let shapes = to_shapes(shapes.as_deref().unwrap_or_default());
        let inner = Basin::with_shapes(tc, area, c, &shapes).map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Time of concentration, in minutes.
    #[getter]
    fn tc(&self) -> f64 {
        self.inner.tc()
    }

    /// Contributing area, in acres.
    #[getter]
    fn area(&self) -> f64 {
        self.inner.area()
    }

    /// Composite runoff coefficient.
    #[getter]
    fn c(&self) -> f64 {
        self.inner.runoff_coefficient()
    }

    #[getter]
    fn runoff_area(&self) -> f64 {
        self.inner.runoff_area()
    }

    /// Add a list of (area, c) pairs, re-weighting `c`.
    fn add_shapes(&mut self, shapes: Vec<(f64, f64)>) -> PyResult<()> {
        self.inner
            .add_shapes(&to_shapes(&shapes))
            .map_err(value_error)
    }

    /// Runoff flow over time as `(times, flows)` numpy arrays.
    #[pyo3(signature = (times, rainfall, interval, policy="zero-flow"))]
    fn flood_data<'py>(
        &self,
        py: Python<'py>,
        times: PyReadonlyArray1<'py, f64>,
        rainfall: PyReadonlyArray1<'py, f64>,
        interval: f64,
        policy: &str,
    ) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
        let rain = rain_from_arrays(&times, &rainfall)?;
        let policy = parse_policy(policy)?;
        let (t, q): (Vec<f64>, Vec<f64>) = self
            .inner
            .flood_data_with(&rain, interval, policy)
            .map_err(value_error)?
            .unzip();
        Ok((PyArray1::from_vec(py, t), PyArray1::from_vec(py, q)))
    }

    /// Every intermediate column of the flood computation.
    #[pyo3(signature = (times, rainfall, interval, policy="zero-flow"))]
    fn flood_table(
        &self,
        py: Python<'_>,
        times: PyReadonlyArray1<'_, f64>,
        rainfall: PyReadonlyArray1<'_, f64>,
        interval: f64,
        policy: &str,
    ) -> PyResult<FloodTable> {
        let rain = rain_from_arrays(&times, &rainfall)?;
        let policy = parse_policy(policy)?;
        let series = self
            .inner
            .flood_table_with(&rain, interval, policy)
            .map_err(value_error)?;
        Ok(FloodTable::from_series(py, series))
    }

    fn __repr__(&self) -> String {
        format!(
            "Basin(tc={}, area={}, c={})",
            self.inner.tc(),
            self.inner.area(),
            self.inner.runoff_coefficient()
        )
    }
}

#[pyfunction]
fn k_rational() -> f64 {
    K_RATIONAL
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "hydrology")?;
    m.add_function(wrap_pyfunction!(k_rational, &m)?)?;
    m.add_class::<PyBasin>()?;
    m.add_class::<FloodTable>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
