//! Error types for statarr

use thiserror::Error;

/// Result type alias using statarr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or operating on static arrays
#[derive(Error, Debug)]
pub enum Error {
    /// Supplied data does not match the declared size descriptor
    #[error("Size mismatch: expected {expected:?}, got {got:?}")]
    SizeMismatch {
        /// Dimensions required by the size descriptor
        expected: Vec<usize>,
        /// Dimensions (or flat length) actually supplied
        got: Vec<usize>,
    },

    /// Linear algebra requested on a non-square array
    #[error("Dimension mismatch: expected a square matrix, got dimensions {dims:?}")]
    DimensionMismatch {
        /// Dimensions of the offending array
        dims: Vec<usize>,
    },

    /// Matrix determinant is exactly zero
    #[error("Singular matrix: {order}x{order} matrix has zero determinant")]
    SingularMatrix {
        /// Order N of the N×N matrix
        order: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for array of length {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Number of elements in the array
        size: usize,
    },

    /// Conversion to or from an ndarray failed
    #[cfg(feature = "ndarray")]
    #[error("ndarray interop error: {0}")]
    Interop(#[from] ndarray::ShapeError),
}

impl Error {
    /// Create a size mismatch error
    pub fn size_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::SizeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a dimension mismatch error for a non-square input
    pub fn dimension_mismatch(dims: &[usize]) -> Self {
        Self::DimensionMismatch {
            dims: dims.to_vec(),
        }
    }

    /// Create a singular matrix error
    pub fn singular(order: usize) -> Self {
        Self::SingularMatrix { order }
    }

    /// Whether this error depends on the data rather than on the caller's shapes.
    ///
    /// `SingularMatrix` is the only recoverable condition; size and dimension
    /// mismatches are programmer errors.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::size_mismatch(&[2, 2], &[3]);
        assert_eq!(err.to_string(), "Size mismatch: expected [2, 2], got [3]");

        let err = Error::dimension_mismatch(&[2, 3]);
        assert!(err.to_string().contains("[2, 3]"));

        let err = Error::singular(3);
        assert_eq!(
            err.to_string(),
            "Singular matrix: 3x3 matrix has zero determinant"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::singular(2).is_recoverable());
        assert!(!Error::size_mismatch(&[4], &[5]).is_recoverable());
        assert!(!Error::dimension_mismatch(&[1, 2]).is_recoverable());
    }
}
