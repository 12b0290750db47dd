//! Label placement: pole of inaccessibility by best-first cell refinement.
//!
//! Purpose
//! - Find the interior point of a simple polygon that maximizes the distance
//!   to the boundary, to within a caller-supplied `precision`.
//!
//! Model
//! - Square `Cell`s are graded by the signed distance `d` at their center and
//!   bounded above by `max = d + h·√2`.
//! - A max-heap `Frontier` always expands the globally highest `max`; a cell
//!   whose `max` is within `precision` of the best `d` cannot improve the
//!   answer by more than `precision` and is dropped.
//! - Ties on `max` pop in insertion order, so results are bit-reproducible.
//!
//! Layout
//! - `types.rs` (cells, results, errors), `cfg.rs` (configuration),
//!   `frontier.rs` (priority queue), `observer.rs` (diagnostic hooks),
//!   `search.rs` (bootstrap + refine).

mod cfg;
mod frontier;
mod observer;
mod search;
mod types;

pub use cfg::{LabelCfg, DEFAULT_PRECISION};
pub use observer::{NoopObserver, Recorder, SearchObserver, TraceObserver};
pub use search::{
    centroid_cell, find_pole, find_pole_observed, find_pole_with_defaults, find_pole_with_stats,
};
pub use types::{Cell, LabelError, Pole, SearchStats};

#[cfg(test)]
mod tests;
