use nalgebra::Vector2;
use polylabel::api::LabelError;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn ring_from_py_pairs(polygon: Vec<(f64, f64)>) -> Vec<Vector2<f64>> {
    polygon
        .into_iter()
        .map(|(x, y)| Vector2::new(x, y))
        .collect()
}

pub fn map_label_err(err: LabelError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
