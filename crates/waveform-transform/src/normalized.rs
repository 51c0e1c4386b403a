//! Normalization adapter.
//!
//! Raw FFT libraries return `N * x` from `inverse(forward(x))`. This adapter
//! divides the inverse output by `N` so the pair becomes a true inverse.

use crate::error::{Result, TransformError};
use crate::{Complex, RawTransform, Sample, Transform};

/// Wraps a [`RawTransform`] and restores a unitary inverse.
#[derive(Debug, Clone)]
pub struct Normalized<R> {
    raw: R,
    len: usize,
}

impl<R> Normalized<R> {
    /// The wrapped raw transform.
    pub fn raw(&self) -> &R {
        &self.raw
    }

    /// Sample count the inverse output is divided by.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Sample, R: RawTransform<T>> Transform<T> for Normalized<R> {
    fn bind(time: &[T], freq: &[Complex<T>]) -> Self {
        Self {
            raw: R::bind(time, freq),
            len: time.len(),
        }
    }

    fn forward(&mut self, time: &[T], freq: &mut [Complex<T>]) -> Result<()> {
        self.raw.forward(time, freq)
    }

    fn inverse(&mut self, freq: &[Complex<T>], time: &mut [T]) -> Result<()> {
        self.raw.inverse(freq, time)?;

        let Some(n) = T::from_usize(self.len) else {
            return Err(TransformError::UnrepresentableLength(self.len));
        };
        for t in time.iter_mut() {
            *t /= n;
        }
        Ok(())
    }
}
