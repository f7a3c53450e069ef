//! Exponential decay envelope generator.
//!
//! Percussion hits in this crate share one envelope shape: an exponential
//! decay that starts at 1.0 and falls to `e^-k` at the final sample, where
//! `k` is the instrument's decay rate.

use crate::oscillator::linspace;

/// Exponential decay envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpDecay {
    /// Decay rate: the negated exponent reached at the end of the curve.
    pub rate: f64,
}

impl ExpDecay {
    /// Creates a new decay envelope with the given rate.
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.max(0.0),
        }
    }

    /// Builds the envelope curve for a buffer of `num_samples` samples.
    ///
    /// The curve is `exp(-t)` for `t` evenly spaced from 0 to `rate`
    /// inclusive: monotonically non-increasing, first value 1.0, last value
    /// `e^-rate`.
    pub fn curve(&self, num_samples: usize) -> Vec<f64> {
        linspace(0.0, self.rate, num_samples)
            .into_iter()
            .map(|t| (-t).exp())
            .collect()
    }

    /// Multiplies the envelope into a sample buffer, element by element.
    pub fn apply(&self, samples: &mut [f64]) {
        let curve = self.curve(samples.len());
        for (sample, gain) in samples.iter_mut().zip(curve) {
            *sample *= gain;
        }
    }
}
