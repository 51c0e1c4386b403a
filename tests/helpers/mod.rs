//! Test helpers and fixtures for waveform integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FFT_EPSILON` (1e-10): f64 FFT round trips
//! - `FFT_EPSILON_F32` (1e-4): f32 FFT round trips
//! - `ELEMENTWISE_EPSILON` (1e-12): log/exp round trips

#![allow(dead_code)]

pub mod tolerances;

use waveform::prelude::*;
use waveform::transform::Result as TransformResult;
use waveform::TransformError;

/// Wraps a transform and counts how often each direction runs.
#[derive(Debug)]
pub struct Counting<P> {
    pub inner: P,
    pub forward_calls: usize,
    pub inverse_calls: usize,
}

impl<P> Counting<P> {
    pub fn total_calls(&self) -> usize {
        self.forward_calls + self.inverse_calls
    }
}

impl<T: Sample, P: Transform<T>> Transform<T> for Counting<P> {
    fn bind(time: &[T], freq: &[Complex<T>]) -> Self {
        Self {
            inner: P::bind(time, freq),
            forward_calls: 0,
            inverse_calls: 0,
        }
    }

    fn forward(&mut self, time: &[T], freq: &mut [Complex<T>]) -> TransformResult<()> {
        self.forward_calls += 1;
        self.inner.forward(time, freq)
    }

    fn inverse(&mut self, freq: &[Complex<T>], time: &mut [T]) -> TransformResult<()> {
        self.inverse_calls += 1;
        self.inner.inverse(freq, time)
    }
}

/// A transform whose executions always fail.
#[derive(Debug)]
pub struct Failing;

impl<T: Sample> Transform<T> for Failing {
    fn bind(_time: &[T], _freq: &[Complex<T>]) -> Self {
        Failing
    }

    fn forward(&mut self, _time: &[T], _freq: &mut [Complex<T>]) -> TransformResult<()> {
        Err(TransformError::Failed("forward plan unavailable".into()))
    }

    fn inverse(&mut self, _freq: &[Complex<T>], _time: &mut [T]) -> TransformResult<()> {
        Err(TransformError::Failed("inverse plan unavailable".into()))
    }
}

/// Counted unitary FFT waveform.
pub type CountedFft = Waveform<f64, Counting<Fft<f64>>>;

/// Counted identity waveform.
pub type CountedIdentity = Waveform<f64, Counting<Identity>>;

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * frequency * t).sin()
        })
        .collect()
}

/// Generate white noise (random samples in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f64> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f64 / u32::MAX as f64) * 2.0 - 1.0
        })
        .collect()
}

/// Generate an impulse signal (single sample at 1.0, rest zeros).
pub fn generate_impulse(num_samples: usize, position: usize) -> Vec<f64> {
    let mut samples = vec![0.0; num_samples];
    if position < num_samples {
        samples[position] = 1.0;
    }
    samples
}

/// Check if two signals are approximately equal within tolerance.
pub fn signals_approx_equal(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// Peak absolute value of a signal.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max)
}
