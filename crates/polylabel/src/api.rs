//! Curated API surface for the CLI, bindings, and benches.
//!
//! Prefer these re-exports over reaching into submodules, so internal module
//! layout can change without touching every caller.

// Ring geometry
pub use crate::geom2::{
    area_centroid, contains, convex_hull, signed_area, signed_distance, Bbox, Ring, RingError,
};
// Random rings
pub use crate::geom2::rand::{
    draw_star_polygon, ReplayToken as RingReplay, StarCfg, VertexCount,
};
// Label search
pub use crate::label::{
    centroid_cell, find_pole, find_pole_observed, find_pole_with_defaults, find_pole_with_stats,
    Cell, LabelCfg, LabelError, NoopObserver, Pole, Recorder, SearchObserver, SearchStats,
    TraceObserver, DEFAULT_PRECISION,
};

use nalgebra::Vector2;

/// Wrap `(x, y)` pairs as points.
pub fn ring_from_pairs(pairs: &[(f64, f64)]) -> Vec<Vector2<f64>> {
    pairs.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

/// Label search over `(x, y)` pairs; returns `((x, y), distance)`.
pub fn label_pairs(
    pairs: &[(f64, f64)],
    cfg: LabelCfg,
) -> Result<((f64, f64), Option<f64>), LabelError> {
    let ring = ring_from_pairs(pairs);
    let pole = find_pole(&ring, cfg)?;
    Ok(((pole.point.x, pole.point.y), pole.distance))
}
