//! Curated surface for callers that want everything in one import.
//!
//! Breaking changes are allowed; prefer `crate::prelude` for the core types.

// Kernel types and translation helpers
pub use crate::kernel::{
    endpoint, srcpoint, Details, Point, Point2, Point3, Vector, Vector2, Vector3,
};
// Raw-coordinate numerics
pub use crate::numeric::{
    dot_product, dot_product_slices, euclidean_distance, euclidean_distance_slices,
};
// Scalars and errors
pub use crate::error::GeomError;
pub use crate::scalar::{approx_eq, approx_eq_eps, deg, rad, Real, APPROX_EPS};
// Sampling
pub use crate::sample::{draw_cloud, draw_point, draw_vector, Bounds, ReplayToken};
