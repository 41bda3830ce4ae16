//! Free numeric functions over raw coordinate sequences.
//!
//! `Point` and `Vector` delegate here, so the arithmetic lives in one place.
//! The array forms are checked by the type system; the slice forms are for
//! callers whose lengths are only known at runtime.

use crate::error::GeomError;
use crate::scalar::Real;

/// Euclidean distance between `u` and `v`: `sqrt(Σ (v[i] - u[i])²)`.
///
/// Differences are scaled by the largest one before squaring, so the result
/// neither overflows nor underflows while the true distance is representable.
#[inline]
pub fn euclidean_distance<const N: usize, F: Real>(u: &[F; N], v: &[F; N]) -> F {
    scaled_norm_diff(u, v)
}

/// `Σ u[i] * v[i]`.
#[inline]
pub fn dot_product<const N: usize, F: Real>(u: &[F; N], v: &[F; N]) -> F {
    dot(u, v)
}

/// Slice form of `euclidean_distance`; lengths must agree.
pub fn euclidean_distance_slices<F: Real>(u: &[F], v: &[F]) -> Result<F, GeomError> {
    GeomError::check_dim(u.len(), v.len())?;
    Ok(scaled_norm_diff(u, v))
}

/// Slice form of `dot_product`; lengths must agree.
pub fn dot_product_slices<F: Real>(u: &[F], v: &[F]) -> Result<F, GeomError> {
    GeomError::check_dim(u.len(), v.len())?;
    Ok(dot(u, v))
}

/// Largest `|c|` in `u`; NaN if any entry is NaN, zero for an empty slice.
pub(crate) fn max_abs<F: Real>(u: &[F]) -> F {
    u.iter().fold(F::zero(), |m, &c| nan_max(c.abs(), m))
}

#[inline]
#[allow(clippy::eq_op)]
fn nan_max<F: Real>(a: F, m: F) -> F {
    // a NaN entry sticks once seen
    if a > m || a != a {
        a
    } else {
        m
    }
}

fn scaled_norm_diff<F: Real>(u: &[F], v: &[F]) -> F {
    let scale = u
        .iter()
        .zip(v)
        .fold(F::zero(), |m, (&a, &b)| nan_max((b - a).abs(), m));
    if scale == F::zero() || !scale.is_finite() {
        return scale;
    }
    let sum = u.iter().zip(v).fold(F::zero(), |acc, (&a, &b)| {
        let d = (b - a) / scale;
        acc + d * d
    });
    sum.sqrt() * scale
}

#[inline]
fn dot<F: Real>(u: &[F], v: &[F]) -> F {
    u.iter().zip(v).fold(F::zero(), |acc, (&a, &b)| acc + a * b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_345() {
        assert_eq!(euclidean_distance(&[0.0_f64, 0.0], &[3.0, 4.0]), 5.0);
        assert!((euclidean_distance(&[3.0_f32, 4.0], &[0.0, 0.0]) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn dot_small() {
        assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
        assert_eq!(dot_product(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn slices_reject_length_mismatch() {
        assert_eq!(
            euclidean_distance_slices(&[0.0, 0.0], &[3.0, 4.0]).unwrap(),
            5.0
        );
        assert_eq!(
            dot_product_slices(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(GeomError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        assert!(euclidean_distance_slices::<f64>(&[1.0], &[]).is_err());
    }

    #[test]
    fn distance_survives_extreme_magnitudes() {
        let d = euclidean_distance(&[1e200_f64, 0.0], &[-1e200, 0.0]);
        assert!((d / 2e200 - 1.0).abs() < 1e-12);
        let d = euclidean_distance(&[0.0_f64, 0.0], &[3e-200, 4e-200]);
        assert!(d > 0.0);
        assert!((d / 5e-200 - 1.0).abs() < 1e-12);
        assert_eq!(euclidean_distance(&[2.0_f64; 3], &[2.0; 3]), 0.0);
    }

    #[test]
    fn non_finite_inputs_propagate() {
        assert!(euclidean_distance(&[f64::NAN, 0.0], &[1.0, 0.0]).is_nan());
        assert!(euclidean_distance(&[f64::NAN, f64::NAN], &[0.0, 0.0]).is_nan());
        assert_eq!(
            euclidean_distance(&[0.0, 1.0], &[f64::INFINITY, 0.0]),
            f64::INFINITY
        );
        assert!(max_abs(&[1.0, f64::NAN, 3.0]).is_nan());
        assert_eq!(max_abs(&[1.0, -3.0, 2.0]), 3.0);
        assert_eq!(max_abs::<f64>(&[]), 0.0);
    }
}
