//! Error type for runtime boundaries of the geometry kernel.
//!
//! Dimension is a const generic everywhere it can be, so these only surface
//! where sizes are known at runtime (slices, axis indices) or where the math
//! itself is undefined (zero-length vectors in `angle`).

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A coordinate/component sequence had the wrong length.
    DimensionMismatch { expected: usize, found: usize },
    /// Axis index outside `[0, dim)`.
    IndexOutOfRange { index: usize, dim: usize },
    /// The operation is undefined for these operands.
    Domain { reason: String },
}

impl GeomError {
    pub(crate) fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    pub(crate) fn check_dim(expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::DimensionMismatch { expected, found })
        }
    }

    pub(crate) fn check_index(index: usize, dim: usize) -> Result<(), Self> {
        if index < dim {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, dim })
        }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {expected} values, got {found}"
            ),
            Self::IndexOutOfRange { index, dim } => {
                write!(f, "axis {index} out of range for dimension {dim}")
            }
            Self::Domain { reason } => write!(f, "domain error: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_and_messages() {
        assert!(GeomError::check_dim(3, 3).is_ok());
        let err = GeomError::check_dim(3, 2).unwrap_err();
        assert_eq!(
            err,
            GeomError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.to_string(), "dimension mismatch: expected 3 values, got 2");

        assert!(GeomError::check_index(1, 2).is_ok());
        assert_eq!(
            GeomError::check_index(2, 2).unwrap_err().to_string(),
            "axis 2 out of range for dimension 2"
        );
        assert_eq!(
            GeomError::domain("zero magnitude").to_string(),
            "domain error: zero magnitude"
        );
    }
}
