//! Real <-> half-spectrum FFT on top of `rustfft`.
//!
//! `rustfft` only provides complex transforms, so the real input is promoted
//! to a complex work buffer for the forward pass and the half spectrum is
//! mirrored into its conjugate-symmetric upper half for the inverse pass.

use std::sync::Arc;

use rustfft::{Fft, FftPlanner};

use crate::error::{check_len, Result};
use crate::{Complex, RawTransform, Sample, Transform};

/// Unnormalized real FFT pair.
///
/// The inverse of this transform returns `N * x`; see [`crate::Normalized`].
/// Imaginary parts of the DC and Nyquist bins are ignored by the inverse.
pub struct RawFft<T: Sample> {
    len: usize,
    forward: Arc<dyn Fft<T>>,
    inverse: Arc<dyn Fft<T>>,
    /// Full-length complex buffer the plans run in place on
    work: Vec<Complex<T>>,
    scratch: Vec<Complex<T>>,
}

impl<T: Sample> RawFft<T> {
    /// Build forward and inverse plans for `len` real samples.
    pub fn with_len(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(len);
        let inverse = planner.plan_fft_inverse(len);

        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());

        tracing::debug!(len, scratch_len, "Planned real FFT");

        Self {
            len,
            forward,
            inverse,
            work: vec![Complex::new(T::zero(), T::zero()); len],
            scratch: vec![Complex::new(T::zero(), T::zero()); scratch_len],
        }
    }

    /// Number of real samples the plans were built for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn spectrum_len(&self) -> usize {
        self.len / 2 + 1
    }
}

impl<T: Sample> Transform<T> for RawFft<T> {
    fn bind(time: &[T], _freq: &[Complex<T>]) -> Self {
        Self::with_len(time.len())
    }

    fn forward(&mut self, time: &[T], freq: &mut [Complex<T>]) -> Result<()> {
        check_len(self.len, time.len())?;
        check_len(self.spectrum_len(), freq.len())?;
        if self.is_empty() {
            freq.fill(Complex::new(T::zero(), T::zero()));
            return Ok(());
        }

        for (w, &t) in self.work.iter_mut().zip(time) {
            *w = Complex::new(t, T::zero());
        }
        self.forward
            .process_with_scratch(&mut self.work, &mut self.scratch);

        freq.copy_from_slice(&self.work[..freq.len()]);
        Ok(())
    }

    fn inverse(&mut self, freq: &[Complex<T>], time: &mut [T]) -> Result<()> {
        check_len(self.spectrum_len(), freq.len())?;
        check_len(self.len, time.len())?;
        if self.is_empty() {
            return Ok(());
        }

        let half = freq.len();
        self.work[..half].copy_from_slice(freq);
        for k in half..self.len {
            self.work[k] = freq[self.len - k].conj();
        }
        self.inverse
            .process_with_scratch(&mut self.work, &mut self.scratch);

        for (t, w) in time.iter_mut().zip(&self.work) {
            *t = w.re;
        }
        Ok(())
    }
}

impl<T: Sample> RawTransform<T> for RawFft<T> {}

impl<T: Sample> std::fmt::Debug for RawFft<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawFft")
            .field("len", &self.len)
            .field("scratch_len", &self.scratch.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn bound(len: usize) -> (RawFft<f64>, Vec<f64>, Vec<Complex<f64>>) {
        let time = vec![0.0; len];
        let freq = vec![Complex::new(0.0, 0.0); len / 2 + 1];
        let fft = RawFft::bind(&time, &freq);
        (fft, time, freq)
    }

    #[test]
    fn test_forward_matches_dft() {
        let (mut fft, mut time, mut freq) = bound(8);
        for (i, t) in time.iter_mut().enumerate() {
            *t = (i as f64 * 0.7).sin() + 0.25 * i as f64;
        }

        fft.forward(&time, &mut freq).unwrap();

        for (k, bin) in freq.iter().enumerate() {
            let mut expected = Complex::new(0.0, 0.0);
            for (n, &x) in time.iter().enumerate() {
                let angle = -2.0 * std::f64::consts::PI * (k * n) as f64 / 8.0;
                expected += Complex::new(angle.cos(), angle.sin()) * x;
            }
            assert_abs_diff_eq!(bin.re, expected.re, epsilon = 1e-9);
            assert_abs_diff_eq!(bin.im, expected.im, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_inverse_is_scaled_by_len() {
        let (mut fft, mut time, mut freq) = bound(6);
        let original = [0.5, -1.0, 2.0, 0.0, 3.5, -0.25];
        time.copy_from_slice(&original);

        fft.forward(&time, &mut freq).unwrap();
        fft.inverse(&freq, &mut time).unwrap();

        for (t, o) in time.iter().zip(&original) {
            assert_abs_diff_eq!(*t, o * 6.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_inverse_ignores_dc_imaginary() {
        let (mut fft, mut time, mut freq) = bound(4);
        freq[0] = Complex::new(4.0, 3.0);

        fft.inverse(&freq, &mut time).unwrap();

        for t in &time {
            assert_abs_diff_eq!(*t, 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let (mut fft, time, _) = bound(8);
        let mut wrong = vec![Complex::new(0.0, 0.0); 4];
        assert!(fft.forward(&time, &mut wrong).is_err());
        assert_eq!(fft.len(), 8);
    }
}
