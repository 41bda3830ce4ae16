//! `Vector<N, F>`: a displacement (direction and magnitude).
//!
//! A vector stores components only. Once built from two points it carries no
//! memory of them; `endpoint`/`srcpoint` re-anchor it.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub, SubAssign};

use nalgebra::SVector;

use super::point::Point;
use crate::error::GeomError;
use crate::numeric::{dot_product, euclidean_distance, max_abs};
use crate::scalar::{approx_eq, Real};

/// Fixed-dimension displacement.
///
/// Invariants:
/// - Exactly `N` components.
/// - `Vector::between(src, dst)[i] == dst[i] - src[i]`.
/// - `==` is exact; use `approx_eq` for computed values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize, F: Real = f64> {
    components: SVector<F, N>,
}

pub type Vector2<F = f64> = Vector<2, F>;
pub type Vector3<F = f64> = Vector<3, F>;

impl<const N: usize, F: Real> Vector<N, F> {
    #[inline]
    pub fn new(components: [F; N]) -> Self {
        Self {
            components: SVector::from(components),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self {
            components: SVector::zeros(),
        }
    }

    /// Displacement from `src` to `dst`.
    #[inline]
    pub fn between(src: &Point<N, F>, dst: &Point<N, F>) -> Self {
        Self {
            components: dst.as_svector() - src.as_svector(),
        }
    }

    /// Runtime-sized construction; the slice must hold exactly `N` values.
    pub fn from_slice(components: &[F]) -> Result<Self, GeomError> {
        GeomError::check_dim(N, components.len())?;
        Ok(Self {
            components: SVector::from_column_slice(components),
        })
    }

    /// Unit vector along `axis`, or `IndexOutOfRange`.
    pub fn axis(axis: usize) -> Result<Self, GeomError> {
        let mut v = Self::zero();
        v.set_component(axis, F::one())?;
        Ok(v)
    }

    #[inline]
    pub fn dim(&self) -> usize {
        N
    }

    #[inline]
    pub fn component(&self, i: usize) -> Result<F, GeomError> {
        GeomError::check_index(i, N)?;
        Ok(self.components[i])
    }

    pub fn set_component(&mut self, i: usize, value: F) -> Result<(), GeomError> {
        GeomError::check_index(i, N)?;
        self.components[i] = value;
        Ok(())
    }

    #[inline]
    pub fn set(&mut self, components: [F; N]) {
        self.components = SVector::from(components);
    }

    /// Overwrite with the displacement from `src` to `dst`.
    #[inline]
    pub fn set_between(&mut self, src: &Point<N, F>, dst: &Point<N, F>) {
        *self = Self::between(src, dst);
    }

    #[inline]
    pub fn reset(&mut self) {
        self.components.fill(F::zero());
    }

    #[inline]
    pub fn as_array(&self) -> &[F; N] {
        &self.components.data.0[0]
    }

    #[inline]
    pub fn to_array(&self) -> [F; N] {
        *self.as_array()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.as_array().iter()
    }

    #[inline]
    pub fn as_svector(&self) -> &SVector<F, N> {
        &self.components
    }

    /// `Σ self[i] * other[i]`.
    #[inline]
    pub fn dot_product(&self, other: &Self) -> F {
        dot_product(self.as_array(), other.as_array())
    }

    /// Euclidean length, i.e. the distance from the zero vector.
    #[inline]
    pub fn magnitude(&self) -> F {
        euclidean_distance(&[F::zero(); N], self.as_array())
    }

    /// Angle to `other` in radians, in `[0, π]`.
    ///
    /// Fails with `GeomError::Domain` if either vector has zero magnitude or a
    /// non-finite component. Both operands are rescaled by their largest
    /// component first, so huge and tiny vectors still get an angle.
    pub fn angle(&self, other: &Self) -> Result<F, GeomError> {
        let u = self.rescaled()?;
        let v = other.rescaled()?;
        let cos = u.dot_product(&v) / (u.magnitude() * v.magnitude());
        if !cos.is_finite() {
            return Err(GeomError::domain("angle cosine is not finite"));
        }
        // rounding can push the cosine slightly outside [-1, 1]
        let cos = if cos > F::one() {
            F::one()
        } else if cos < -F::one() {
            -F::one()
        } else {
            cos
        };
        Ok(cos.acos())
    }

    /// Angle of the segment `src -> dst` measured against `self`.
    #[inline]
    pub fn angle_to_segment(&self, src: &Point<N, F>, dst: &Point<N, F>) -> Result<F, GeomError> {
        self.angle(&Self::between(src, dst))
    }

    /// Divided by its largest absolute component, which becomes `±1`.
    fn rescaled(&self) -> Result<Self, GeomError> {
        let m = max_abs(self.as_array());
        if m == F::zero() {
            return Err(GeomError::domain(
                "angle is undefined for a zero-magnitude vector",
            ));
        }
        if !m.is_finite() {
            return Err(GeomError::domain(
                "angle is undefined for a non-finite component",
            ));
        }
        Ok(Self {
            components: self.components / m,
        })
    }

    /// True if every component is within `APPROX_EPS` of zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|&c| approx_eq(c, F::zero()))
    }

    /// Component-wise comparison within `APPROX_EPS`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(&a, &b)| approx_eq(a, b))
    }

    /// Translate `src` forward along `dir`.
    #[inline]
    pub fn endpoint(src: &Point<N, F>, dir: &Self) -> Point<N, F> {
        endpoint(src, dir)
    }

    /// Inverse of `endpoint`: the point `dir` starts from if it ends at `dst`.
    #[inline]
    pub fn srcpoint(dst: &Point<N, F>, dir: &Self) -> Point<N, F> {
        srcpoint(dst, dir)
    }
}

impl<F: Real> Vector<3, F> {
    /// Cross product `self × other`; orthogonal to both operands.
    ///
    /// Only three-dimensional vectors have one:
    ///
    /// ```compile_fail
    /// use gcs::Vector;
    /// let u = Vector::new([1.0, 0.0]);
    /// let v = Vector::new([0.0, 1.0]);
    /// let _ = u.cross_product(&v);
    /// ```
    #[inline]
    pub fn cross_product(&self, other: &Self) -> Self {
        Self {
            components: self.components.cross(&other.components),
        }
    }

    #[inline]
    pub fn x(&self) -> F {
        self.components.x
    }
    #[inline]
    pub fn y(&self) -> F {
        self.components.y
    }
    #[inline]
    pub fn z(&self) -> F {
        self.components.z
    }
    #[inline]
    pub fn set_x(&mut self, x: F) {
        self.components.x = x;
    }
    #[inline]
    pub fn set_y(&mut self, y: F) {
        self.components.y = y;
    }
    #[inline]
    pub fn set_z(&mut self, z: F) {
        self.components.z = z;
    }
}

impl<F: Real> Vector<2, F> {
    #[inline]
    pub fn x(&self) -> F {
        self.components.x
    }
    #[inline]
    pub fn y(&self) -> F {
        self.components.y
    }
    #[inline]
    pub fn set_x(&mut self, x: F) {
        self.components.x = x;
    }
    #[inline]
    pub fn set_y(&mut self, y: F) {
        self.components.y = y;
    }
}

/// `src + dir`, component-wise.
#[inline]
pub fn endpoint<const N: usize, F: Real>(src: &Point<N, F>, dir: &Vector<N, F>) -> Point<N, F> {
    *src + *dir
}

/// `dst - dir`, component-wise.
#[inline]
pub fn srcpoint<const N: usize, F: Real>(dst: &Point<N, F>, dir: &Vector<N, F>) -> Point<N, F> {
    *dst - *dir
}

impl<const N: usize, F: Real> Default for Vector<N, F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, F: Real> From<[F; N]> for Vector<N, F> {
    fn from(components: [F; N]) -> Self {
        Self::new(components)
    }
}

impl<const N: usize, F: Real> From<SVector<F, N>> for Vector<N, F> {
    fn from(components: SVector<F, N>) -> Self {
        Self { components }
    }
}

impl<const N: usize, F: Real> From<Vector<N, F>> for SVector<F, N> {
    fn from(v: Vector<N, F>) -> Self {
        v.components
    }
}

impl<const N: usize, F: Real> TryFrom<&[F]> for Vector<N, F> {
    type Error = GeomError;

    fn try_from(components: &[F]) -> Result<Self, Self::Error> {
        Self::from_slice(components)
    }
}

impl<const N: usize, F: Real> Index<usize> for Vector<N, F> {
    type Output = F;
    #[inline]
    fn index(&self, i: usize) -> &F {
        &self.components[i]
    }
}

impl<const N: usize, F: Real> IndexMut<usize> for Vector<N, F> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut F {
        &mut self.components[i]
    }
}

impl<const N: usize, F: Real> Add for Vector<N, F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            components: self.components + rhs.components,
        }
    }
}

impl<const N: usize, F: Real> Sub for Vector<N, F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            components: self.components - rhs.components,
        }
    }
}

impl<const N: usize, F: Real> AddAssign for Vector<N, F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.components += rhs.components;
    }
}

impl<const N: usize, F: Real> SubAssign for Vector<N, F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.components -= rhs.components;
    }
}

impl<const N: usize, F: Real> Neg for Vector<N, F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            components: -self.components,
        }
    }
}

/// `[c0, c1, ...]`
impl<const N: usize, F: Real + fmt::Display> fmt::Display for Vector<N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        super::write_joined(f, self.as_array())?;
        f.write_str("]")
    }
}
