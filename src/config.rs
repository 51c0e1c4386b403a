//! Waveform configuration.

use crate::{Error, Result};

/// Configuration for a [`crate::Waveform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformConfig {
    /// Tolerance used when comparing two waveforms.
    ///
    /// Absolute for samples with magnitude up to 1, relative above that.
    /// Values finer than the sample type's rounding error are raised to it.
    pub tolerance: f64,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

impl WaveformConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tolerance {} must be finite and non-negative",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Tightest comparison the sample type allows.
    pub fn exact() -> Self {
        Self { tolerance: 0.0 }
    }
}
