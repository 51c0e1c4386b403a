//! # Filter Chain
//!
//! Mix a low and a high tone, then strip the high tone with two spectral
//! low-pass responses while the waveform keeps both domains in sync.
//!
//! **Concepts:** Lazy transforms, spectral filtering, validity tracking
//!
//! ```bash
//! cargo run --example filter_chain
//! ```

use std::f64::consts::PI;
use waveform::prelude::*;

const SIZE: usize = 64;

fn lowpass(bins: usize, cutoff: usize) -> Vec<Complex<f64>> {
    (0..bins)
        .map(|k| {
            let gain = if k <= cutoff { 1.0 } else { 0.0 };
            Complex::new(gain, 0.0)
        })
        .collect()
}

fn print_samples(label: &str, samples: &[f64]) {
    let preview: Vec<String> = samples
        .iter()
        .take(8)
        .map(|s| format!("{:+.3}", s))
        .collect();
    println!("{:<10} [{} ...]", label, preview.join(", "));
}

fn main() -> waveform::Result<()> {
    tracing_subscriber::fmt::init();

    let mixed: Vec<f64> = (0..SIZE)
        .map(|n| {
            let t = n as f64 / SIZE as f64;
            (2.0 * PI * 2.0 * t).sin() + 0.5 * (2.0 * PI * 24.0 * t).sin()
        })
        .collect();

    let mut signal: Waveform = Waveform::from_time(&mixed)?;
    print_samples("input", signal.time()?);

    let bins = signal.spectrum_size();
    signal.apply_filter(&lowpass(bins, 16))?;
    println!("validity after filter: {:?}", signal.validity());
    print_samples("cut 16", signal.time()?);

    signal.apply_filters(&[lowpass(bins, 8), lowpass(bins, 4)])?;
    print_samples("cut 4", signal.time()?);

    let reference: Vec<f64> = (0..SIZE)
        .map(|n| (2.0 * PI * 2.0 * n as f64 / SIZE as f64).sin())
        .collect();
    let mut reference: Waveform = Waveform::from_time(&reference)?;
    println!("matches low tone: {}", signal.equals(&mut reference)?);

    Ok(())
}
