use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{SumError, Summer};

fn to_py_err(e: SumError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

#[pyfunction]
fn add(text: &str) -> PyResult<i64> {
    Summer::default().sum(text).map_err(to_py_err)
}

#[pyfunction]
fn negatives(text: &str) -> PyResult<Vec<i32>> {
    Summer::default().negatives(text).map_err(to_py_err)
}

#[pyfunction]
fn delimiters(text: &str) -> Vec<String> {
    Summer::default().delimiters_for(text).delimiters
}

#[pymodule]
fn numsum(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(add, m)?)?;
    m.add_function(wrap_pyfunction!(negatives, m)?)?;
    m.add_function(wrap_pyfunction!(delimiters, m)?)?;
    Ok(())
}
