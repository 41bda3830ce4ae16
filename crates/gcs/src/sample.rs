//! Reproducible random points and vectors.
//!
//! Purpose
//! - Feed benches, demos and the CLI with deterministic inputs.
//!
//! Model
//! - Each coordinate is drawn uniformly from `[lo, hi)`.
//! - A replay token `(seed, index)` is mixed into a single `StdRng`, so the
//!   `index`-th draw of a cloud can be regenerated on its own.

use nalgebra::SVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kernel::{Point, Vector};

/// Half-open coordinate range `[lo, hi)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    lo: f64,
    hi: f64,
}

impl Bounds {
    /// `None` unless both ends are finite and `lo < hi`.
    pub fn new(lo: f64, hi: f64) -> Option<Self> {
        if lo.is_finite() && hi.is_finite() && lo < hi {
            Some(Self { lo, hi })
        } else {
            None
        }
    }

    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { lo: -1.0, hi: 1.0 }
    }
}

/// Replay token; equal tokens give equal draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// One `StdRng` per token, seeded by folding `index` into `seed` with the
    /// SplitMix64 finalizer.
    fn rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let key = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(key)
    }
}

fn draw_coords<const N: usize>(bounds: Bounds, tok: ReplayToken) -> SVector<f64, N> {
    let mut rng = tok.rng();
    SVector::from_fn(|_, _| rng.gen_range(bounds.lo..bounds.hi))
}

pub fn draw_point<const N: usize>(bounds: Bounds, tok: ReplayToken) -> Point<N> {
    Point::from(draw_coords::<N>(bounds, tok))
}

pub fn draw_vector<const N: usize>(bounds: Bounds, tok: ReplayToken) -> Vector<N> {
    Vector::from(draw_coords::<N>(bounds, tok))
}

/// `count` points; point `k` equals `draw_point(bounds, ReplayToken::new(seed, k))`.
pub fn draw_cloud<const N: usize>(bounds: Bounds, seed: u64, count: usize) -> Vec<Point<N>> {
    (0..count as u64)
        .map(|index| draw_point(bounds, ReplayToken::new(seed, index)))
        .collect()
}
