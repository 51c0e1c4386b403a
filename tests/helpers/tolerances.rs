//! Tolerance constants for waveform testing.
//!
//! Different transforms lose different amounts of precision.

/// Round-trip through the f64 normalized FFT.
pub const FFT_EPSILON: f64 = 1e-10;

/// Round-trip through the f32 normalized FFT.
pub const FFT_EPSILON_F32: f32 = 1e-4;

/// Round-trip through log/exp elementwise transforms.
pub const ELEMENTWISE_EPSILON: f64 = 1e-12;
