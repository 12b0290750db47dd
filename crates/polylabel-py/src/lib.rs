//! PyO3 bindings for the `polylabel` crate.
//!
//! Notes
//! - Keep bindings thin and predictable: rings cross the boundary as lists of
//!   `(x, y)` tuples, results come back as plain lists/tuples.
//! - The search itself stays in Rust; only the entry points callers need are bound.

use pyo3::prelude::*;

mod common;
mod label;

#[pymodule]
fn polylabel_native(_py: Python, m: &PyModule) -> PyResult<()> {
    label::register(m)?;
    m.add("__version__", polylabel::VERSION)?;
    Ok(())
}
