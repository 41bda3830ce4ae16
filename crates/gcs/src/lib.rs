//! Cartesian geometry kernel: N-dimensional points and displacement vectors.
//!
//! Layout
//! - `kernel`: `Point<N, F>`, `Vector<N, F>`, textual and detail formatting.
//! - `numeric`: distance and dot product over raw coordinate arrays/slices.
//! - `scalar`: the `Real` scalar bound, tolerance, degree/radian helpers.
//! - `sample`: reproducible random points/vectors.
//! - `error`: `GeomError` for runtime-sized boundaries.
//!
//! Dimension is a const generic. 2D/3D are plain aliases (`Point2`, `Vector3`, ...),
//! and `cross_product` only exists for `Vector<3, F>`.

pub mod api;
pub mod error;
pub mod kernel;
pub mod numeric;
pub mod sample;
pub mod scalar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use kernel::{endpoint, srcpoint, Details, Point, Point2, Point3, Vector, Vector2, Vector3};
pub use numeric::{dot_product, euclidean_distance};
pub use scalar::{approx_eq, deg, rad, Real, APPROX_EPS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GeomError;
    pub use crate::kernel::{
        endpoint, srcpoint, Details, Point, Point2, Point3, Vector, Vector2, Vector3,
    };
    pub use crate::scalar::{approx_eq, deg, rad, Real};
}
