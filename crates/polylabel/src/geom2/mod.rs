//! 2D ring geometry used by the label search.
//!
//! Purpose
//! - Borrowed, implicitly closed polygon rings (`Ring`) and their bounding box.
//! - The signed-distance oracle (even-odd parity + nearest-edge distance).
//! - Area centroid for seeding the search.
//! - Convex hull of a point set, for building rings from scattered samples.
//! - A reproducible sampler of star-shaped rings for tests and benches.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`.
//! - Rings are never copied or modified; everything here borrows.

pub mod rand;
mod centroid;
mod hull;
mod oracle;
mod types;

pub use centroid::{area_centroid, signed_area};
pub use hull::{convex_hull, cross};
pub use oracle::{contains, crosses, seg_dist_sq, signed_distance};
pub use types::{Bbox, Ring, RingError};
