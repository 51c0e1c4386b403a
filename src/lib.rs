//! # Waveform - Dual-Domain Signal Container
//!
//! Keeps one signal in both the time domain and the frequency domain,
//! transforming lazily between them.
//!
//! ## Architecture
//!
//! Waveform is an umbrella crate that coordinates:
//! - **waveform-transform** - Transform plugins (identity, FFT, normalized FFT, elementwise)
//! - **waveform** - The [`Waveform`] container and its validity state machine
//!
//! Writing one representation invalidates the other; reading a stale
//! representation runs exactly one transform and caches the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use waveform::prelude::*;
//!
//! # fn main() -> waveform::Result<()> {
//! let mut signal: Waveform = Waveform::from_time(&[1.0, 0.0, -1.0, 0.0])?;
//!
//! // First read runs the forward FFT, later reads hit the cache
//! let spectrum = signal.freq()?;
//! assert!((spectrum[1].re - 2.0).abs() < 1e-12);
//!
//! // Editing the spectrum invalidates the time samples
//! signal.freq_mut()?[1] = Complex::new(0.0, 0.0);
//! assert!(signal.time()?.iter().all(|s| s.abs() < 1e-12));
//! # Ok(())
//! # }
//! ```
//!
//! ## Transforms
//!
//! - [`Fft`] (default) - unitary real FFT, `Normalized<RawFft>`
//! - [`RawFft`] - unnormalized; the inverse is scaled by `N`
//! - [`Identity`] - copies samples across, for testing caching behaviour
//! - [`Elementwise`] - pointwise maps such as [`Log10`]

/// Re-export of waveform-transform for direct access
pub use waveform_transform as transform;

pub use waveform_transform::{
    Complex, Elementwise, Fft, Identity, Log10, NaturalLog, Normalized, PointwiseMap, RawFft,
    RawTransform, Sample, Transform, TransformError,
};

mod config;
mod error;
mod waveform;

pub use config::WaveformConfig;
pub use error::{Error, Result};
pub use waveform::{Validity, Waveform};

/// Convenience prelude for common imports
pub mod prelude {
    // Container
    pub use crate::{Validity, Waveform, WaveformConfig};

    // Transforms
    pub use crate::{Complex, Fft, Identity, Sample, Transform};

    // Errors
    pub use crate::{Error, Result};
}
