//! Pole of inaccessibility for simple polygons ("where to put the label").
//!
//! Modules
//! - `geom2`: rings, bounding boxes, the signed-distance oracle, centroids,
//!   convex hulls, and a reproducible random ring sampler.
//! - `label`: best-first cell refinement that finds the interior point
//!   farthest from the boundary, within a precision tolerance.
//! - `api`: curated re-exports for callers (CLI, bindings, benches).
//!
//! Quick start
//! ```
//! use polylabel::prelude::*;
//!
//! let ring = vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(10.0, 0.0),
//!     Vec2::new(10.0, 10.0),
//!     Vec2::new(0.0, 10.0),
//! ];
//! let pole = find_pole(&ring, LabelCfg::with_precision(0.01)).unwrap();
//! assert!((pole.point - Vec2::new(5.0, 5.0)).norm() < 1e-9);
//! assert!((pole.distance.unwrap() - 5.0).abs() < 1e-9);
//! ```

pub mod api;
pub mod geom2;
pub mod label;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use label::{find_pole, find_pole_with_defaults, LabelCfg, LabelError, Pole};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
    pub use crate::geom2::{convex_hull, signed_distance, Bbox, Ring};
    pub use crate::label::{
        find_pole, find_pole_observed, find_pole_with_defaults, find_pole_with_stats, LabelCfg,
        LabelError, Pole, SearchObserver, SearchStats,
    };
    pub use nalgebra::Vector2 as Vec2;
}
