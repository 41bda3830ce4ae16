//! Coordinate arguments: parsing and runtime dimension checks.

use anyhow::{bail, Context, Result};
use gcs::GeomError;

/// Coordinates given as `1,2,3`, `{1, 2, 3}` (point form) or `[1, 2, 3]` (vector form).
#[derive(Clone, Debug, PartialEq)]
pub struct Coords(pub Vec<f64>);

impl Coords {
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }
}

pub fn parse_coords(s: &str) -> Result<Coords> {
    let t = s.trim();
    let inner = t
        .strip_prefix('{')
        .and_then(|r| r.strip_suffix('}'))
        .or_else(|| t.strip_prefix('[').and_then(|r| r.strip_suffix(']')))
        .unwrap_or(t);
    if inner.trim().is_empty() {
        bail!("no coordinates in {s:?}");
    }
    let values = inner
        .split(',')
        .map(|c| {
            let c = c.trim();
            c.parse::<f64>()
                .with_context(|| format!("invalid coordinate {c:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        bail!("coordinate {bad} is not finite");
    }
    Ok(Coords(values))
}

/// Dimension shared by all operands.
pub fn common_dim(operands: &[&Coords]) -> Result<usize, GeomError> {
    let expected = operands.first().map_or(0, |c| c.dim());
    for c in operands {
        if c.dim() != expected {
            return Err(GeomError::DimensionMismatch {
                expected,
                found: c.dim(),
            });
        }
    }
    Ok(expected)
}

/// Call `$f::<N>(args..)` for the runtime dimension `$dim` (1..=4).
macro_rules! dispatch_dim {
    ($dim:expr, $f:ident($($arg:expr),* $(,)?)) => {
        match $dim {
            1 => $f::<1>($($arg),*),
            2 => $f::<2>($($arg),*),
            3 => $f::<3>($($arg),*),
            4 => $f::<4>($($arg),*),
            d => Err(anyhow::anyhow!("unsupported dimension {d}; expected 1..=4")),
        }
    };
}
pub(crate) use dispatch_dim;
