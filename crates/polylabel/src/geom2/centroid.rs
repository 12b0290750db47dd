//! Area centroid and signed area of a ring (shoelace / Green's theorem).
//!
//! Both walk the edges as `(a, b)` with `b` the vertex preceding `a`, so the
//! per-edge term is `f = a.x*b.y - b.x*a.y`.

use nalgebra::Vector2;

use super::types::Ring;

/// Signed area, positive for counterclockwise rings.
pub fn signed_area(ring: Ring<'_>) -> f64 {
    let sum_f: f64 = ring.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum();
    -sum_f / 2.0
}

/// Area centroid, or `None` when the ring encloses zero area
/// (collinear or otherwise degenerate input).
pub fn area_centroid(ring: Ring<'_>) -> Option<Vector2<f64>> {
    let mut cx = 0.0;
    let mut cy = 0.0;
    let mut area = 0.0;
    for (a, b) in ring.edges() {
        let f = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * f;
        cy += (a.y + b.y) * f;
        area += f * 3.0;
    }
    if area == 0.0 {
        return None;
    }
    Some(Vector2::new(cx / area, cy / area))
}
