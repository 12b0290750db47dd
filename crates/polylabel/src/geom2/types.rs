//! Basic 2D types shared by the oracle and the search.
//!
//! - `Ring`: borrowed, implicitly closed vertex ring (at least 3 vertices).
//! - `Bbox`: axis-aligned bounding box with the derived initial cell size.

use std::fmt;

use nalgebra::Vector2;

/// Errors surfaced when wrapping caller input as a `Ring`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// A ring needs at least three vertices to enclose anything.
    TooFewVertices { got: usize },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::TooFewVertices { got } => {
                write!(f, "polygon ring needs at least 3 vertices, got {got}")
            }
        }
    }
}

impl std::error::Error for RingError {}

/// Implicitly closed polygon ring (last vertex connects back to the first).
///
/// Invariants:
/// - At least 3 vertices.
/// - Simplicity (no self-intersections) is assumed, not checked.
///
/// The ring only borrows the caller's vertices; it is `Copy` so every
/// component of a search can hold it by value.
#[derive(Clone, Copy, Debug)]
pub struct Ring<'a> {
    pts: &'a [Vector2<f64>],
}

impl<'a> Ring<'a> {
    pub fn new(pts: &'a [Vector2<f64>]) -> Result<Self, RingError> {
        if pts.len() < 3 {
            return Err(RingError::TooFewVertices { got: pts.len() });
        }
        Ok(Self { pts })
    }

    #[inline]
    pub fn points(&self) -> &'a [Vector2<f64>] {
        self.pts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    /// Always false for a constructed ring; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Edges as `(a, b)` pairs where `b` is the vertex preceding `a`.
    ///
    /// The first edge pairs vertex 0 with the last vertex, so the walk covers
    /// the closing edge exactly once.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + 'a {
        let pts = self.pts;
        let n = pts.len();
        (0..n).map(move |i| (pts[i], pts[(i + n - 1) % n]))
    }

    /// Axis-aligned bounding box (single pass over the vertices).
    pub fn bbox(&self) -> Bbox {
        let first = self.pts[0];
        let mut min = first;
        let mut max = first;
        for p in self.pts {
            if p.x < min.x {
                min.x = p.x;
            }
            if p.y < min.y {
                min.y = p.y;
            }
            if p.x > max.x {
                max.x = p.x;
            }
            if p.y > max.y {
                max.y = p.y;
            }
        }
        Bbox { min, max }
    }
}

/// Axis-aligned bounding box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bbox {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Geometric center `min + (width, height) / 2`.
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }

    /// Side of the initial square tiling: the shorter box side.
    /// Zero means the ring collapses to a segment or a point.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.width().min(self.height())
    }
}
