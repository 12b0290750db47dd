//! Search configuration.
//!
//! Policy
//! - One small `Copy` struct with a `Default`; callers override fields with
//!   struct-update syntax instead of juggling positional arguments.

use super::types::LabelError;

/// Default precision tolerance (same unit as the polygon coordinates).
pub const DEFAULT_PRECISION: f64 = 1.0;

/// Label search configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelCfg {
    /// Stop refining a cell once its upper bound is within `precision` of the
    /// best distance found. Must be `>= 0`; `0` is accepted but the search may
    /// then subdivide until floating-point noise runs out.
    pub precision: f64,
    /// Report the achieved signed distance alongside the point.
    pub with_distance: bool,
}

impl Default for LabelCfg {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            with_distance: false,
        }
    }
}

impl LabelCfg {
    /// Shorthand for a config with the given precision and distance reporting on.
    #[inline]
    pub fn with_precision(precision: f64) -> Self {
        Self {
            precision,
            with_distance: true,
        }
    }

    /// Reject tolerances the refine loop can never satisfy (negative or NaN).
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.precision.is_nan() || self.precision < 0.0 {
            return Err(LabelError::InvalidPrecision {
                precision: self.precision,
            });
        }
        Ok(())
    }
}
