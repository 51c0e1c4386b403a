//! Identity transform.
//!
//! Copies samples straight across. Useful for exercising a container's
//! caching behaviour without any real spectral work.

use crate::error::{check_len, Result};
use crate::{Complex, Sample, Transform};

/// Copies the overlapping prefix of the two buffers in each direction.
///
/// The half-spectrum buffer holds `N/2 + 1` entries, so only that many time
/// samples take part. Time samples past the prefix are left untouched by
/// [`Transform::inverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    time_len: usize,
    freq_len: usize,
}

impl Identity {
    /// Number of elements copied per execution.
    pub fn prefix_len(&self) -> usize {
        self.time_len.min(self.freq_len)
    }
}

impl<T: Sample> Transform<T> for Identity {
    fn bind(time: &[T], freq: &[Complex<T>]) -> Self {
        Self {
            time_len: time.len(),
            freq_len: freq.len(),
        }
    }

    fn forward(&mut self, time: &[T], freq: &mut [Complex<T>]) -> Result<()> {
        check_len(self.time_len, time.len())?;
        check_len(self.freq_len, freq.len())?;

        for (f, &t) in freq.iter_mut().zip(time) {
            *f = Complex::new(t, T::zero());
        }
        Ok(())
    }

    fn inverse(&mut self, freq: &[Complex<T>], time: &mut [T]) -> Result<()> {
        check_len(self.freq_len, freq.len())?;
        check_len(self.time_len, time.len())?;

        for (t, f) in time.iter_mut().zip(freq) {
            *t = f.re;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransformError;

    #[test]
    fn test_forward_copies_prefix() {
        let time = [1.0f64, 2.0, 3.0, 4.0];
        let mut freq = [Complex::new(0.0, 0.0); 3];

        let mut identity = <Identity as Transform<f64>>::bind(&time, &freq);
        identity.forward(&time, &mut freq).unwrap();

        assert_eq!(
            freq,
            [
                Complex::new(1.0, 0.0),
                Complex::new(2.0, 0.0),
                Complex::new(3.0, 0.0)
            ]
        );
        assert_eq!(identity.prefix_len(), 3);
    }

    #[test]
    fn test_inverse_leaves_tail_untouched() {
        let mut time = [0.0f32, 0.0, 0.0, 9.0];
        let freq = [
            Complex::new(5.0, 1.0),
            Complex::new(6.0, 1.0),
            Complex::new(7.0, 1.0),
        ];

        let mut identity = <Identity as Transform<f32>>::bind(&time, &freq);
        identity.inverse(&freq, &mut time).unwrap();

        assert_eq!(time, [5.0, 6.0, 7.0, 9.0]);
    }

    #[test]
    fn test_rejects_foreign_buffers() {
        let time = [0.0f64; 4];
        let freq = [Complex::new(0.0, 0.0); 3];
        let mut identity = <Identity as Transform<f64>>::bind(&time, &freq);

        let mut short = [Complex::new(0.0, 0.0); 2];
        let err = identity.forward(&time, &mut short).unwrap_err();
        assert_eq!(
            err,
            TransformError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }
}
