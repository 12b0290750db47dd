//! Point-to-ring signed distance (the oracle that grades every probe).
//!
//! Sign convention
//! - Positive inside, negative outside; inside/outside by the even-odd rule.
//! - Magnitude is the exact Euclidean distance to the nearest edge (up to
//!   floating-point rounding).
//!
//! The crossing predicate compares `a.y > p.y` against `b.y > p.y`. The strict
//! `>` on both sides is what keeps a ray through a shared vertex from being
//! counted twice; it must not be relaxed to `>=`.

use nalgebra::Vector2;

use super::types::Ring;

/// Squared distance from `p` to the segment `a→b`.
///
/// The projection parameter is clamped to `[0, 1]`: beyond `b` snaps to `b`,
/// before `a` (or a degenerate edge `a == b`) keeps `a`.
#[inline]
pub fn seg_dist_sq(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let mut x = a.x;
    let mut y = a.y;
    let dx = b.x - x;
    let dy = b.y - y;

    if dx != 0.0 || dy != 0.0 {
        let t = ((p.x - x) * dx + (p.y - y) * dy) / (dx * dx + dy * dy);
        if t > 1.0 {
            x = b.x;
            y = b.y;
        } else if t > 0.0 {
            x += dx * t;
            y += dy * t;
        }
    }

    let dx = p.x - x;
    let dy = p.y - y;
    dx * dx + dy * dy
}

/// Does the horizontal ray from `p` towards +x cross the edge `a→b`?
#[inline]
pub fn crosses(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
}

/// Even-odd membership test.
pub fn contains(p: Vector2<f64>, ring: Ring<'_>) -> bool {
    ring.edges().filter(|&(a, b)| crosses(p, a, b)).count() % 2 == 1
}

/// Signed distance from `p` to the boundary of `ring` (positive inside).
///
/// One pass over the edges computes both the parity and the minimum squared
/// distance; the square root is taken once at the end.
pub fn signed_distance(p: Vector2<f64>, ring: Ring<'_>) -> f64 {
    let mut inside = false;
    let mut min_dist_sq = f64::INFINITY;
    for (a, b) in ring.edges() {
        if crosses(p, a, b) {
            inside = !inside;
        }
        min_dist_sq = min_dist_sq.min(seg_dist_sq(p, a, b));
    }
    let dist = min_dist_sq.sqrt();
    if inside {
        dist
    } else {
        -dist
    }
}
