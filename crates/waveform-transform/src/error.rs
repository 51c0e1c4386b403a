//! Error types for waveform-transform.

use thiserror::Error;

/// Failure raised while executing a bound transform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Sample count {0} is not representable in the sample type")]
    UnrepresentableLength(usize),

    #[error("Transform failed: {0}")]
    Failed(String),
}

/// Result type alias.
pub type Result<T> = core::result::Result<T, TransformError>;

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(TransformError::LengthMismatch { expected, actual })
    }
}
