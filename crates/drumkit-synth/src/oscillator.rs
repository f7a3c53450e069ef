//! Waveform and noise generation helpers.

use rand::Rng;
use rand_pcg::Pcg32;

/// Two times pi, the full circle in radians.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Generates `n` evenly spaced values from `start` to `end`, inclusive.
///
/// A single point yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Generates a sine wave sampled at evenly spaced points over the duration.
///
/// The time base runs from 0 to `duration` inclusive, so the last sample
/// lands exactly on `sin(2π f · duration)`.
pub fn sine_wave(frequency: f64, duration: f64, num_samples: usize) -> Vec<f64> {
    linspace(0.0, duration, num_samples)
        .into_iter()
        .map(|t| (TWO_PI * frequency * t).sin())
        .collect()
}

/// Generates uniform noise samples in [-0.5, 0.5].
pub fn uniform_noise(rng: &mut Pcg32, num_samples: usize) -> Vec<f64> {
    (0..num_samples).map(|_| rng.gen_range(-0.5..=0.5)).collect()
}
