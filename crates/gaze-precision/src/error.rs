//! Error types for gaze-precision

use thiserror::Error;

/// Errors returned by the precision calculators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrecisionError {
    /// Input array does not have the layout the calculator requires
    #[error("Invalid input shape {actual:?}: expected {expected}")]
    InvalidShape {
        expected: String,
        actual: Vec<usize>,
    },

    /// Nested row input where one row's length differs from the first row's
    #[error("Row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Too few complete samples remain after NaN removal
    #[error("Insufficient samples: need at least {required} complete rows, found {found}")]
    InsufficientSamples { required: usize, found: usize },
}

impl PrecisionError {
    pub(crate) fn invalid_shape(expected: &str, actual: &[usize]) -> Self {
        PrecisionError::InvalidShape {
            expected: expected.to_string(),
            actual: actual.to_vec(),
        }
    }
}

/// Result alias for precision computations
pub type Result<T> = std::result::Result<T, PrecisionError>;
