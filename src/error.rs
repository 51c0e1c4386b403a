//! Centralized error type for the waveform crate.
//!
//! Wraps transform plugin errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid sample count {0}: must be even and non-zero")]
    InvalidLength(usize),

    #[error("Size mismatch: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Transform: {0}")]
    Transform(#[from] waveform_transform::TransformError),
}

pub type Result<T> = std::result::Result<T, Error>;
