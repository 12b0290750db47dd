//! Data types for the label search: probes, results, counters, errors.

use std::f64::consts::SQRT_2;
use std::fmt;

use nalgebra::Vector2;

use crate::geom2::{signed_distance, Ring, RingError};

/// Square probe region of the search space.
///
/// Invariants:
/// - `d` is the oracle's signed distance at `center`, computed once.
/// - `max = d + h·√2 >= d`: no point of the cell can be farther than its
///   half-diagonal from the center, so `max` never underestimates.
/// - Never mutated after construction; subdivision builds new cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub center: Vector2<f64>,
    /// Half the side length; `0` marks a point probe.
    pub h: f64,
    pub d: f64,
    pub max: f64,
}

impl Cell {
    /// Probe `ring` at `center` (one O(n) oracle call).
    pub fn new(center: Vector2<f64>, h: f64, ring: Ring<'_>) -> Self {
        let d = signed_distance(center, ring);
        Self {
            center,
            h,
            d,
            max: d + h * SQRT_2,
        }
    }

    /// Zero-size probe at a single point.
    #[inline]
    pub fn point(center: Vector2<f64>, ring: Ring<'_>) -> Self {
        Self::new(center, 0.0, ring)
    }

    /// Four quadrant children with half the half-size, in the order
    /// (−,−), (+,−), (−,+), (+,+).
    pub fn children(&self, ring: Ring<'_>) -> [Cell; 4] {
        let h = self.h / 2.0;
        let (x, y) = (self.center.x, self.center.y);
        [
            Cell::new(Vector2::new(x - h, y - h), h, ring),
            Cell::new(Vector2::new(x + h, y - h), h, ring),
            Cell::new(Vector2::new(x - h, y + h), h, ring),
            Cell::new(Vector2::new(x + h, y + h), h, ring),
        ]
    }
}

/// Search result: the label point and, if requested, its signed distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pole {
    pub point: Vector2<f64>,
    /// `None` when not requested, or when the ring collapsed to a segment or point.
    pub distance: Option<f64>,
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
    /// Initial tiles plus four per subdivision (seed probes not counted).
    pub probes: usize,
    /// Number of times the refine loop replaced the best cell.
    pub improvements: usize,
    /// Final best distance (`None` on the degenerate early exit).
    pub best_distance: Option<f64>,
    /// True when the bounding box had zero width or height.
    pub degenerate: bool,
}

/// Errors surfaced by the label search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelError {
    /// Fewer than three vertices.
    TooFewVertices { got: usize },
    /// Precision is negative or NaN.
    InvalidPrecision { precision: f64 },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::TooFewVertices { got } => {
                write!(f, "invalid input: polygon needs at least 3 vertices, got {got}")
            }
            LabelError::InvalidPrecision { precision } => write!(
                f,
                "invalid input: precision must be a non-negative number, got {precision}"
            ),
        }
    }
}

impl std::error::Error for LabelError {}

impl From<RingError> for LabelError {
    fn from(err: RingError) -> Self {
        match err {
            RingError::TooFewVertices { got } => LabelError::TooFewVertices { got },
        }
    }
}
