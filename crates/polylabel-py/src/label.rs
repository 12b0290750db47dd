//! Label-search bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_label_err, ring_from_py_pairs};
use polylabel::api::{
    find_pole_observed, signed_distance as ring_signed_distance, LabelCfg, NoopObserver, Ring,
    SearchObserver, TraceObserver,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Pole of inaccessibility of a ring of `(x, y)` pairs.
///
/// Returns `[x, y]`, or `([x, y], distance)` when `with_distance` is set
/// (`distance` is `None` for rings that collapse to a segment or point).
/// `debug` emits progress through the Rust `tracing` facade.
#[pyfunction]
#[pyo3(signature = (polygon, precision=1.0, debug=false, with_distance=false))]
pub fn polygon_labeling(
    py: Python<'_>,
    polygon: Vec<(f64, f64)>,
    precision: f64,
    debug: bool,
    with_distance: bool,
) -> PyResult<PyObject> {
    let ring = ring_from_py_pairs(polygon);
    let cfg = LabelCfg {
        precision,
        with_distance,
    };
    let mut trace = TraceObserver;
    let mut quiet = NoopObserver;
    let obs: &mut dyn SearchObserver = if debug { &mut trace } else { &mut quiet };
    let (pole, _) = find_pole_observed(&ring, cfg, obs).map_err(map_label_err)?;
    let point = vec![pole.point.x, pole.point.y];
    if with_distance {
        Ok((point, pole.distance).into_py(py))
    } else {
        Ok(point.into_py(py))
    }
}

/// Signed distance from `(x, y)` to the ring boundary (positive inside).
#[pyfunction]
pub fn signed_distance(point: (f64, f64), polygon: Vec<(f64, f64)>) -> PyResult<f64> {
    let pts = ring_from_py_pairs(polygon);
    let ring = Ring::new(&pts).map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(ring_signed_distance(
        nalgebra::Vector2::new(point.0, point.1),
        ring,
    ))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(polygon_labeling, m)?)?;
    m.add_function(wrap_pyfunction!(signed_distance, m)?)?;
    Ok(())
}
