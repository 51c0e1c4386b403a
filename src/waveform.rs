//! Dual-domain waveform container.
//!
//! A [`Waveform`] holds one logical signal in two representations: `N` real
//! time samples and `N/2 + 1` complex half-spectrum coefficients. Only the
//! representation that was last written is authoritative; the other one is
//! recomputed through the bound [`Transform`] the next time it is read.
//!
//! ## Validity
//!
//! | current | requested | action  | new state |
//! |---------|-----------|---------|-----------|
//! | Time    | Time      | none    | Time      |
//! | Freq    | Freq      | none    | Freq      |
//! | Both    | any       | none    | requested |
//! | Time    | Freq/Both | forward | requested |
//! | Freq    | Time/Both | inverse | requested |
//!
//! Mutable accessors assume the caller writes through the returned slice and
//! mark only their own domain valid. Read-only accessors bring both domains
//! up to date.

use std::fmt;

use waveform_transform::num_traits::Float;
use waveform_transform::{Complex, Fft, Sample, Transform};

use crate::{Error, Result, WaveformConfig};

/// Which representation(s) currently reflect the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validity {
    /// Only the time samples are current
    Time,
    /// Only the spectrum is current
    Freq,
    /// Both are current (or the waveform is freshly sized and unwritten)
    Both,
}

/// A signal cached in both the time and frequency domain.
///
/// `P` is bound to this waveform's buffers at construction and moves with
/// them; it is never shared with another waveform.
pub struct Waveform<T: Sample = f64, P: Transform<T> = Fft<T>> {
    validity: Validity,
    time: Vec<T>,
    freq: Vec<Complex<T>>,
    transform: P,
    config: WaveformConfig,
}

impl<T: Sample, P: Transform<T>> Waveform<T, P> {
    /// Allocate a zeroed waveform of `size` samples.
    ///
    /// Both domains count as valid; write one of them before reading.
    pub fn new(size: usize) -> Result<Self> {
        check_size(size)?;
        Ok(Self::bind(
            vec![T::zero(); size],
            zeroed_spectrum(size / 2 + 1),
            Validity::Both,
        ))
    }

    /// Copy time-domain samples. The spectrum is computed on first read.
    pub fn from_time(samples: &[T]) -> Result<Self> {
        check_size(samples.len())?;
        Ok(Self::bind(
            samples.to_vec(),
            zeroed_spectrum(samples.len() / 2 + 1),
            Validity::Time,
        ))
    }

    /// Copy a half spectrum. The time domain has `(len - 1) * 2` samples.
    pub fn from_freq(spectrum: &[Complex<T>]) -> Result<Self> {
        let size = spectrum.len().saturating_sub(1) * 2;
        check_size(size)?;
        Ok(Self::bind(
            vec![T::zero(); size],
            spectrum.to_vec(),
            Validity::Freq,
        ))
    }

    fn bind(time: Vec<T>, freq: Vec<Complex<T>>, validity: Validity) -> Self {
        let transform = P::bind(&time, &freq);
        tracing::debug!(
            size = time.len(),
            transform = std::any::type_name::<P>(),
            "Bound transform"
        );

        Self {
            validity,
            time,
            freq,
            transform,
            config: WaveformConfig::default(),
        }
    }

    /// Replace the configuration, builder style.
    pub fn with_config(mut self, config: WaveformConfig) -> Result<Self> {
        self.set_config(config)?;
        Ok(self)
    }

    pub fn set_config(&mut self, config: WaveformConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &WaveformConfig {
        &self.config
    }

    /// Number of time samples `N`.
    pub fn size(&self) -> usize {
        self.time.len()
    }

    /// Number of spectrum coefficients, `N/2 + 1`.
    pub fn spectrum_size(&self) -> usize {
        self.freq.len()
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// The bound transform.
    pub fn transform(&self) -> &P {
        &self.transform
    }

    /// Mutable time samples. Invalidates the spectrum.
    pub fn time_mut(&mut self) -> Result<&mut [T]> {
        self.ensure_valid(Validity::Time)?;
        Ok(&mut self.time)
    }

    /// Mutable spectrum. Invalidates the time samples.
    pub fn freq_mut(&mut self) -> Result<&mut [Complex<T>]> {
        self.ensure_valid(Validity::Freq)?;
        Ok(&mut self.freq)
    }

    /// Read-only time samples. Leaves both domains valid.
    pub fn time(&mut self) -> Result<&[T]> {
        self.ensure_valid(Validity::Both)?;
        Ok(&self.time)
    }

    /// Read-only spectrum. Leaves both domains valid.
    pub fn freq(&mut self) -> Result<&[Complex<T>]> {
        self.ensure_valid(Validity::Both)?;
        Ok(&self.freq)
    }

    /// Bring `target` up to date, running at most one transform.
    ///
    /// On a transform failure the validity is left unchanged and the error is
    /// returned; the buffer the transform was writing holds unspecified data.
    pub fn ensure_valid(&mut self, target: Validity) -> Result<()> {
        match (self.validity, target) {
            (Validity::Both, _) => {}
            (current, target) if current == target => {}
            (Validity::Time, _) => self.run_forward()?,
            (Validity::Freq, _) => self.run_inverse()?,
        }
        self.validity = target;
        Ok(())
    }

    fn run_forward(&mut self) -> Result<()> {
        tracing::trace!(size = self.time.len(), "Forward transform");
        self.transform.forward(&self.time, &mut self.freq).map_err(|e| {
            tracing::warn!("Forward transform failed: {}", e);
            Error::from(e)
        })
    }

    fn run_inverse(&mut self) -> Result<()> {
        tracing::trace!(size = self.time.len(), "Inverse transform");
        self.transform.inverse(&self.freq, &mut self.time).map_err(|e| {
            tracing::warn!("Inverse transform failed: {}", e);
            Error::from(e)
        })
    }

    /// Exchange contents, validity and bound transforms with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Copy-and-swap assignment: `self` is either fully replaced or untouched.
    pub fn assign(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);
    }

    /// Compare two waveforms, running only the transforms needed.
    ///
    /// Operands sharing a valid domain are compared there (time preferred).
    /// When one side is time-valid and the other frequency-valid, the
    /// frequency-valid side runs its inverse and both compare in time. The
    /// larger of the two configured tolerances applies, raised to a small
    /// multiple of `T::epsilon()` when it is finer than `T` can resolve.
    ///
    /// The result only ignores cache state for bijective transforms. With a
    /// lossy plugin such as [`waveform_transform::Identity`], two waveforms
    /// can agree in the spectrum yet differ in time samples the spectrum does
    /// not cover.
    pub fn equals(&mut self, other: &mut Self) -> Result<bool> {
        if self.size() != other.size() {
            return Ok(false);
        }

        let tolerance = effective_tolerance::<T>(&self.config, &other.config);

        match comparison_domain(self.validity, other.validity) {
            Validity::Freq => {
                self.make_readable(Validity::Freq)?;
                other.make_readable(Validity::Freq)?;
                Ok(self
                    .freq
                    .iter()
                    .zip(&other.freq)
                    .all(|(&a, &b)| close_complex(a, b, tolerance)))
            }
            _ => {
                self.make_readable(Validity::Time)?;
                other.make_readable(Validity::Time)?;
                Ok(self
                    .time
                    .iter()
                    .zip(&other.time)
                    .all(|(&a, &b)| close(a, b, tolerance)))
            }
        }
    }

    pub fn differs(&mut self, other: &mut Self) -> Result<bool> {
        Ok(!self.equals(other)?)
    }

    fn make_readable(&mut self, domain: Validity) -> Result<()> {
        if self.validity == domain || self.validity == Validity::Both {
            Ok(())
        } else {
            self.ensure_valid(Validity::Both)
        }
    }

    fn check_same_size(&self, other: usize) -> Result<()> {
        if self.size() == other {
            Ok(())
        } else {
            Err(Error::SizeMismatch {
                left: self.size(),
                right: other,
            })
        }
    }

    /// Add `rhs` sample by sample in the time domain.
    pub fn add_signal(&mut self, rhs: &mut Self) -> Result<()> {
        self.check_same_size(rhs.size())?;
        let rhs = rhs.time()?;
        for (l, &r) in self.time_mut()?.iter_mut().zip(rhs) {
            *l += r;
        }
        Ok(())
    }

    /// Subtract `rhs` sample by sample in the time domain.
    pub fn sub_signal(&mut self, rhs: &mut Self) -> Result<()> {
        self.check_same_size(rhs.size())?;
        let rhs = rhs.time()?;
        for (l, &r) in self.time_mut()?.iter_mut().zip(rhs) {
            *l -= r;
        }
        Ok(())
    }

    /// Multiply by `rhs` bin by bin in the frequency domain.
    pub fn mul_spectrum(&mut self, rhs: &mut Self) -> Result<()> {
        self.check_same_size(rhs.size())?;
        let rhs = rhs.freq()?;
        for (l, &r) in self.freq_mut()?.iter_mut().zip(rhs) {
            *l *= r;
        }
        Ok(())
    }

    /// Divide by `rhs` bin by bin in the frequency domain.
    ///
    /// Zero bins in `rhs` produce non-finite coefficients.
    pub fn div_spectrum(&mut self, rhs: &mut Self) -> Result<()> {
        self.check_same_size(rhs.size())?;
        let rhs = rhs.freq()?;
        for (l, &r) in self.freq_mut()?.iter_mut().zip(rhs) {
            *l /= r;
        }
        Ok(())
    }

    /// Multiply every time sample by `factor`.
    pub fn scale(&mut self, factor: T) -> Result<()> {
        for t in self.time_mut()? {
            *t *= factor;
        }
        Ok(())
    }

    /// Multiply the spectrum by a frequency response of `N/2 + 1` bins.
    pub fn apply_filter(&mut self, response: &[Complex<T>]) -> Result<()> {
        self.check_response(response)?;
        for (bin, &gain) in self.freq_mut()?.iter_mut().zip(response) {
            *bin *= gain;
        }
        Ok(())
    }

    /// Apply several frequency responses in order.
    ///
    /// Every response is checked before the spectrum is touched.
    /// An empty chain leaves the waveform untouched.
    pub fn apply_filters<R: AsRef<[Complex<T>]>>(&mut self, responses: &[R]) -> Result<()> {
        for response in responses {
            self.check_response(response.as_ref())?;
        }
        if responses.is_empty() {
            return Ok(());
        }

        let spectrum = self.freq_mut()?;
        for response in responses {
            for (bin, &gain) in spectrum.iter_mut().zip(response.as_ref()) {
                *bin *= gain;
            }
        }
        Ok(())
    }

    fn check_response(&self, response: &[Complex<T>]) -> Result<()> {
        if response.len() == self.freq.len() {
            Ok(())
        } else {
            Err(Error::SizeMismatch {
                left: self.freq.len(),
                right: response.len(),
            })
        }
    }
}

impl<T: Sample, P: Transform<T>> Clone for Waveform<T, P> {
    /// Deep copy with a freshly bound transform.
    fn clone(&self) -> Self {
        let mut copy = Self::bind(self.time.clone(), self.freq.clone(), self.validity);
        copy.config = self.config;
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: Sample, P: Transform<T>> fmt::Debug for Waveform<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Waveform")
            .field("size", &self.size())
            .field("validity", &self.validity)
            .field("transform", &std::any::type_name::<P>())
            .field("config", &self.config)
            .finish()
    }
}

fn check_size(size: usize) -> Result<()> {
    if size == 0 || size % 2 != 0 {
        return Err(Error::InvalidLength(size));
    }
    Ok(())
}

fn zeroed_spectrum<T: Sample>(len: usize) -> Vec<Complex<T>> {
    vec![Complex::new(T::zero(), T::zero()); len]
}

fn comparison_domain(left: Validity, right: Validity) -> Validity {
    match (left, right) {
        (Validity::Freq, Validity::Freq | Validity::Both) | (Validity::Both, Validity::Freq) => {
            Validity::Freq
        }
        _ => Validity::Time,
    }
}

/// Comparison tolerance floor, in units of the sample type's epsilon.
const ROUNDING_ULPS: usize = 64;

fn effective_tolerance<T: Sample>(left: &WaveformConfig, right: &WaveformConfig) -> T {
    let floor = T::epsilon() * T::from_usize(ROUNDING_ULPS).unwrap_or_else(T::one);
    let configured = T::from_f64(left.tolerance.max(right.tolerance)).unwrap_or(floor);
    Float::max(configured, floor)
}

fn close_complex<T: Sample>(a: Complex<T>, b: Complex<T>, tolerance: T) -> bool {
    close(a.re, b.re, tolerance) && close(a.im, b.im, tolerance)
}

fn close<T: Sample>(a: T, b: T, tolerance: T) -> bool {
    if a == b {
        return true;
    }
    let magnitude = Float::max(Float::abs(a), Float::abs(b));
    Float::abs(a - b) <= tolerance * Float::max(T::one(), magnitude)
}
