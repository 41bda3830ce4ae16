//! Scalar bound and scalar helpers shared by every geometry type.
//!
//! Policy
//! - The tolerance is a fixed constant. Callers that need a different
//!   threshold use `approx_eq_eps` at the call site instead of a global knob.

use nalgebra::RealField;

/// Tolerance used by `approx_eq` and the `approx_eq` methods on points/vectors.
pub const APPROX_EPS: f64 = 1e-8;

/// Coordinate scalar: any nalgebra real field that is `Copy` (`f32`, `f64`).
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}

/// `|a - b| < APPROX_EPS`.
#[inline]
pub fn approx_eq<F: Real>(a: F, b: F) -> bool {
    approx_eq_eps(a, b, nalgebra::convert(APPROX_EPS))
}

/// `|a - b| < eps`.
#[inline]
pub fn approx_eq_eps<F: Real>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() < eps
}

/// Radians to degrees.
#[inline]
pub fn deg<F: Real>(radians: F) -> F {
    radians * (nalgebra::convert::<f64, F>(180.0) / F::pi())
}

/// Degrees to radians.
#[inline]
pub fn rad<F: Real>(degrees: F) -> F {
    degrees * (F::pi() / nalgebra::convert::<f64, F>(180.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn approx_eq_respects_fixed_eps() {
        assert!(approx_eq(1.0, 1.0 + 1e-9));
        assert!(!approx_eq(1.0, 1.0 + 1e-7));
        assert!(approx_eq_eps(1.0_f32, 1.05, 0.1));
    }

    #[test]
    fn degree_radian_conversions() {
        assert!((deg(PI) - 180.0).abs() < 1e-12);
        assert!((deg(FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((rad(45.0) - PI / 4.0).abs() < 1e-12);
        // round trip
        let x = 1.234_f64;
        assert!((rad(deg(x)) - x).abs() < 1e-12);
    }
}
