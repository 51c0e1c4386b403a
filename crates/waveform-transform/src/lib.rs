//! # Waveform Transform
//!
//! Forward/inverse transform plugins for a dual-domain signal container.
//!
//! A plugin converts between a real time-domain buffer of `N` samples and a
//! complex half-spectrum buffer of `N/2 + 1` coefficients. Plugins are bound
//! once to a pair of buffers (learning their lengths and building whatever
//! plan they need) and then executed repeatedly against those same buffers.
//!
//! This crate provides:
//! - **[`Identity`]**: copies the overlapping prefix verbatim in both directions
//! - **[`RawFft`]**: real <-> half-spectrum FFT whose inverse is scaled by `N`
//! - **[`Normalized`]**: wraps a raw transform and divides the inverse by `N`
//! - **[`Elementwise`]**: pointwise maps such as [`Log10`] and [`NaturalLog`]
//!
//! ## Example
//!
//! ```rust
//! use waveform_transform::{Complex, Fft, Transform};
//!
//! let mut time = vec![1.0f64, 0.0, -1.0, 0.0];
//! let mut freq = vec![Complex::new(0.0, 0.0); 3];
//!
//! let mut fft: Fft<f64> = Fft::bind(&time, &freq);
//! fft.forward(&time, &mut freq).unwrap();
//! assert!((freq[1].re - 2.0).abs() < 1e-12);
//!
//! time.fill(0.0);
//! fft.inverse(&freq, &mut time).unwrap();
//! assert!((time[0] - 1.0).abs() < 1e-12);
//! ```

mod error;
pub use error::{Result, TransformError};

mod elementwise;
mod fft;
mod identity;
mod normalized;

pub use elementwise::{Elementwise, Log10, NaturalLog, PointwiseMap};
pub use fft::RawFft;
pub use identity::Identity;
pub use normalized::Normalized;

pub use rustfft::num_complex::Complex;
pub use rustfft::num_traits;

use rustfft::num_traits::{Float, FloatConst, NumAssign};
use rustfft::FftNum;

/// Scalar type usable for time-domain samples (`f32` or `f64`).
pub trait Sample: FftNum + Float + FloatConst + NumAssign {}

impl<T> Sample for T where T: FftNum + Float + FloatConst + NumAssign {}

/// Normalized FFT: the unitary real <-> half-spectrum transform pair.
pub type Fft<T> = Normalized<RawFft<T>>;

/// A forward/inverse transform between a time buffer and a half-spectrum buffer.
///
/// `bind` receives the exact buffers the owner will later pass to `forward`
/// and `inverse`; implementations may size plans and scratch space from them.
/// Callers must keep handing in buffers of the lengths seen at bind time.
///
/// Implementations used by a caching container must be unitary:
/// `inverse(forward(x))` reproduces `x` up to floating tolerance.
pub trait Transform<T: Sample>: Sized {
    /// Bind to a time buffer and a frequency buffer.
    fn bind(time: &[T], freq: &[Complex<T>]) -> Self;

    /// Overwrite `freq` from the current contents of `time`.
    fn forward(&mut self, time: &[T], freq: &mut [Complex<T>]) -> Result<()>;

    /// Overwrite `time` from the current contents of `freq`.
    fn inverse(&mut self, freq: &[Complex<T>], time: &mut [T]) -> Result<()>;
}

/// Marker for transforms whose inverse returns `N * x` rather than `x`.
///
/// Wrap these in [`Normalized`] before handing them to anything that relies
/// on a true inverse pair.
pub trait RawTransform<T: Sample>: Transform<T> {}
