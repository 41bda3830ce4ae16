//! N-dimensional Point/Vector kernel.
//!
//! Purpose
//! - Value types for locations (`Point`) and displacements (`Vector`) in R^N,
//!   with the dimension `N` fixed at compile time.
//! - Distance, dot product, magnitude, angle, and the 3D cross product.
//!
//! Conventions
//! - `Vector::between(src, dst)` is `dst - src`; `endpoint`/`srcpoint` undo it.
//! - `cross_product` exists only on `Vector<3, F>`; other dimensions do not compile.
//! - `==` is exact. Computed values are compared with `approx_eq` (`APPROX_EPS`).
//! - Runtime sizes (slices, axis indices) return `GeomError` instead of panicking;
//!   `Index`/`IndexMut` panic like arrays do.
//!
//! Textual forms: points print as `{c0, c1}`, vectors as `[c0, c1]`.

mod details;
mod point;
mod vector;

pub use details::Details;
pub use point::{Point, Point2, Point3};
pub use vector::{endpoint, srcpoint, Vector, Vector2, Vector3};

use std::fmt;

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
