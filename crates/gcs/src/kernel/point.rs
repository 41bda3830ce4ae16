//! `Point<N, F>`: a location in N-dimensional Euclidean space.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use nalgebra::SVector;

use super::vector::Vector;
use crate::error::GeomError;
use crate::numeric::{euclidean_distance, euclidean_distance_slices};
use crate::scalar::{approx_eq, Real};

/// Fixed-dimension coordinate tuple.
///
/// Invariants:
/// - Exactly `N` coordinates for the lifetime of the value.
/// - `Point::default()` is the origin.
/// - `==` is exact; use `approx_eq` for computed values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<const N: usize, F: Real = f64> {
    coords: SVector<F, N>,
}

pub type Point2<F = f64> = Point<2, F>;
pub type Point3<F = f64> = Point<3, F>;

impl<const N: usize, F: Real> Point<N, F> {
    #[inline]
    pub fn new(coords: [F; N]) -> Self {
        Self {
            coords: SVector::from(coords),
        }
    }

    /// All coordinates zero.
    #[inline]
    pub fn origin() -> Self {
        Self {
            coords: SVector::zeros(),
        }
    }

    /// Runtime-sized construction; the slice must hold exactly `N` values.
    pub fn from_slice(coords: &[F]) -> Result<Self, GeomError> {
        GeomError::check_dim(N, coords.len())?;
        Ok(Self {
            coords: SVector::from_column_slice(coords),
        })
    }

    #[inline]
    pub fn dim(&self) -> usize {
        N
    }

    /// Coordinate along `axis`, or `IndexOutOfRange`.
    #[inline]
    pub fn coord(&self, axis: usize) -> Result<F, GeomError> {
        GeomError::check_index(axis, N)?;
        Ok(self.coords[axis])
    }

    pub fn set_coord(&mut self, axis: usize, value: F) -> Result<(), GeomError> {
        GeomError::check_index(axis, N)?;
        self.coords[axis] = value;
        Ok(())
    }

    /// Replace all coordinates.
    #[inline]
    pub fn set(&mut self, coords: [F; N]) {
        self.coords = SVector::from(coords);
    }

    /// Replace all coordinates with those of `other`.
    #[inline]
    pub fn set_point(&mut self, other: &Self) {
        self.coords = other.coords;
    }

    /// Move back to the origin.
    #[inline]
    pub fn reset(&mut self) {
        self.coords.fill(F::zero());
    }

    #[inline]
    pub fn as_array(&self) -> &[F; N] {
        &self.coords.data.0[0]
    }

    #[inline]
    pub fn to_array(&self) -> [F; N] {
        *self.as_array()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &F> {
        self.as_array().iter()
    }

    /// Coordinate-wise comparison within `APPROX_EPS`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(&a, &b)| approx_eq(a, b))
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> F {
        euclidean_distance(self.as_array(), other.as_array())
    }

    /// Euclidean distance to an un-wrapped coordinate array.
    #[inline]
    pub fn distance_to_coords(&self, coords: &[F; N]) -> F {
        euclidean_distance(self.as_array(), coords)
    }

    /// Euclidean distance to a runtime-sized coordinate slice.
    pub fn distance_to_slice(&self, coords: &[F]) -> Result<F, GeomError> {
        GeomError::check_dim(N, coords.len())?;
        euclidean_distance_slices(self.as_array(), coords)
    }

    #[inline]
    pub fn as_svector(&self) -> &SVector<F, N> {
        &self.coords
    }
}

impl<F: Real> Point<2, F> {
    #[inline]
    pub fn x(&self) -> F {
        self.coords.x
    }
    #[inline]
    pub fn y(&self) -> F {
        self.coords.y
    }
    #[inline]
    pub fn set_x(&mut self, x: F) {
        self.coords.x = x;
    }
    #[inline]
    pub fn set_y(&mut self, y: F) {
        self.coords.y = y;
    }
}

impl<F: Real> Point<3, F> {
    #[inline]
    pub fn x(&self) -> F {
        self.coords.x
    }
    #[inline]
    pub fn y(&self) -> F {
        self.coords.y
    }
    #[inline]
    pub fn z(&self) -> F {
        self.coords.z
    }
    #[inline]
    pub fn set_x(&mut self, x: F) {
        self.coords.x = x;
    }
    #[inline]
    pub fn set_y(&mut self, y: F) {
        self.coords.y = y;
    }
    #[inline]
    pub fn set_z(&mut self, z: F) {
        self.coords.z = z;
    }
}

impl<const N: usize, F: Real> Default for Point<N, F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<const N: usize, F: Real> From<[F; N]> for Point<N, F> {
    fn from(coords: [F; N]) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize, F: Real> From<SVector<F, N>> for Point<N, F> {
    fn from(coords: SVector<F, N>) -> Self {
        Self { coords }
    }
}

impl<const N: usize, F: Real> From<Point<N, F>> for SVector<F, N> {
    fn from(p: Point<N, F>) -> Self {
        p.coords
    }
}

impl<const N: usize, F: Real> TryFrom<&[F]> for Point<N, F> {
    type Error = GeomError;

    fn try_from(coords: &[F]) -> Result<Self, Self::Error> {
        Self::from_slice(coords)
    }
}

/// Panics when `axis >= N`, like array indexing; see `coord` for the checked form.
impl<const N: usize, F: Real> Index<usize> for Point<N, F> {
    type Output = F;
    #[inline]
    fn index(&self, axis: usize) -> &F {
        &self.coords[axis]
    }
}

impl<const N: usize, F: Real> IndexMut<usize> for Point<N, F> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut F {
        &mut self.coords[axis]
    }
}

/// Translation along `dir` (`endpoint`).
impl<const N: usize, F: Real> Add<Vector<N, F>> for Point<N, F> {
    type Output = Point<N, F>;
    #[inline]
    fn add(self, dir: Vector<N, F>) -> Self::Output {
        Point {
            coords: self.coords + dir.as_svector(),
        }
    }
}

/// Translation against `dir` (`srcpoint`).
impl<const N: usize, F: Real> Sub<Vector<N, F>> for Point<N, F> {
    type Output = Point<N, F>;
    #[inline]
    fn sub(self, dir: Vector<N, F>) -> Self::Output {
        Point {
            coords: self.coords - dir.as_svector(),
        }
    }
}

/// `dst - src` is the displacement from `src` to `dst`.
impl<const N: usize, F: Real> Sub for Point<N, F> {
    type Output = Vector<N, F>;
    #[inline]
    fn sub(self, src: Point<N, F>) -> Self::Output {
        Vector::between(&src, &self)
    }
}

/// `{c0, c1, ...}`
impl<const N: usize, F: Real + fmt::Display> fmt::Display for Point<N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        super::write_joined(f, self.as_array())?;
        f.write_str("}")
    }
}
