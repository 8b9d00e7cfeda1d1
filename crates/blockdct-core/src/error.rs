//! Error types for block transform operations

use thiserror::Error;

/// Result type for block transform operations
pub type DctResult<T> = Result<T, DctError>;

/// Errors that can occur while transforming blocks or converting pixel buffers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DctError {
    #[error(
        "Dimensions don't match: {actual_width}x{actual_height} and {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DctError {
    /// Shorthand for a square expected shape
    pub fn dimension_mismatch(expected: usize, actual_width: usize, actual_height: usize) -> Self {
        DctError::DimensionMismatch {
            expected_width: expected,
            expected_height: expected,
            actual_width,
            actual_height,
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        DctError::InvalidParameter(message.into())
    }
}
