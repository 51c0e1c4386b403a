//! Elementwise transforms.
//!
//! Nothing about the forward/inverse contract is specific to spectra: any
//! invertible pointwise map between a real sample and a complex value works.
//! Negative and zero inputs are handled through the complex logarithm, so
//! `invert(apply(x)) == x` holds for every finite nonzero `x`.

use std::marker::PhantomData;

use crate::error::{check_len, Result};
use crate::{Complex, Sample, Transform};

/// An invertible map from a real sample to a complex value.
pub trait PointwiseMap<T: Sample> {
    fn apply(x: T) -> Complex<T>;
    fn invert(z: Complex<T>) -> T;
}

/// Base-10 logarithm and its inverse `10^z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Log10;

impl<T: Sample> PointwiseMap<T> for Log10 {
    fn apply(x: T) -> Complex<T> {
        Complex::new(x, T::zero()).ln() / T::LN_10()
    }

    fn invert(z: Complex<T>) -> T {
        (z * T::LN_10()).exp().re
    }
}

/// Natural logarithm and `exp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalLog;

impl<T: Sample> PointwiseMap<T> for NaturalLog {
    fn apply(x: T) -> Complex<T> {
        Complex::new(x, T::zero()).ln()
    }

    fn invert(z: Complex<T>) -> T {
        z.exp().re
    }
}

/// Applies `M` over the overlapping prefix of the two buffers.
///
/// Like [`crate::Identity`], only `min(N, N/2 + 1)` elements take part.
pub struct Elementwise<M> {
    time_len: usize,
    freq_len: usize,
    _map: PhantomData<fn() -> M>,
}

impl<M> std::fmt::Debug for Elementwise<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Elementwise")
            .field("map", &std::any::type_name::<M>())
            .field("time_len", &self.time_len)
            .field("freq_len", &self.freq_len)
            .finish()
    }
}

impl<T: Sample, M: PointwiseMap<T>> Transform<T> for Elementwise<M> {
    fn bind(time: &[T], freq: &[Complex<T>]) -> Self {
        Self {
            time_len: time.len(),
            freq_len: freq.len(),
            _map: PhantomData,
        }
    }

    fn forward(&mut self, time: &[T], freq: &mut [Complex<T>]) -> Result<()> {
        check_len(self.time_len, time.len())?;
        check_len(self.freq_len, freq.len())?;

        for (f, &t) in freq.iter_mut().zip(time) {
            *f = M::apply(t);
        }
        Ok(())
    }

    fn inverse(&mut self, freq: &[Complex<T>], time: &mut [T]) -> Result<()> {
        check_len(self.freq_len, freq.len())?;
        check_len(self.time_len, time.len())?;

        for (t, &f) in time.iter_mut().zip(freq) {
            *t = M::invert(f);
        }
        Ok(())
    }
}
