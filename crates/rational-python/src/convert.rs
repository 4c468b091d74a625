use numpy::PyReadonlyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use rational_core::{Distribution, ZeroTimePolicy};

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))
}

/// Map a core error to `ValueError`.
pub fn value_error(err: rational_core::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Build a validated rainfall curve from parallel time/value arrays.
pub fn rain_from_arrays(
    times: &PyReadonlyArray1<'_, f64>,
    values: &PyReadonlyArray1<'_, f64>,
) -> PyResult<Distribution> {
    let t = contiguous_slice(times)?;
    let v = contiguous_slice(values)?;
    Distribution::from_columns(t.to_vec(), v.to_vec()).map_err(value_error)
}

/// Parse the `policy` keyword: "zero-flow" or "omit".
pub fn parse_policy(policy: &str) -> PyResult<ZeroTimePolicy> {
    policy.parse().map_err(value_error)
}
