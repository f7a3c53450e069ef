//! Percussion sample buffer synthesis.
//!
//! Each instrument is built from at most two components, a fixed-frequency
//! sine tone and uniform noise in [-0.5, 0.5], shaped by an exponential
//! decay envelope. When both components are present they are mixed
//! half-and-half, so every output sample stays within [-1.0, 1.0].

use rand_pcg::Pcg32;

use crate::envelope::ExpDecay;
use crate::error::{SynthError, SynthResult};
use crate::instrument::Instrument;
use crate::oscillator::{sine_wave, uniform_noise};

/// Synthesizes one percussion hit.
///
/// # Arguments
/// * `instrument` - Which instrument to synthesize
/// * `duration` - Hit length in seconds, must be positive and finite
/// * `sample_rate` - Audio sample rate in Hz, must be non-zero
/// * `rng` - RNG for the noise component (unused by the tom)
///
/// # Returns
/// A buffer of exactly `floor(duration * sample_rate)` samples in
/// [-1.0, 1.0]
pub fn synthesize(
    instrument: Instrument,
    duration: f64,
    sample_rate: u32,
    rng: &mut Pcg32,
) -> SynthResult<Vec<f64>> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(SynthError::InvalidDuration { duration });
    }
    if sample_rate == 0 {
        return Err(SynthError::InvalidSampleRate { rate: sample_rate });
    }

    let num_samples = (duration * sample_rate as f64) as usize;

    let tone = instrument
        .tone_frequency()
        .map(|freq| sine_wave(freq, duration, num_samples));
    let noise = instrument
        .has_noise()
        .then(|| uniform_noise(rng, num_samples));

    let mut samples = match (tone, noise) {
        (Some(tone), Some(noise)) => tone
            .iter()
            .zip(&noise)
            .map(|(s, n)| 0.5 * s + 0.5 * n)
            .collect(),
        (Some(tone), None) => tone,
        (None, Some(noise)) => noise,
        (None, None) => vec![0.0; num_samples],
    };

    ExpDecay::new(instrument.decay_rate()).apply(&mut samples);

    Ok(samples)
}

/// Synthesizes a hi-hat: noise with a fast decay.
pub fn hihat(duration: f64, sample_rate: u32, rng: &mut Pcg32) -> SynthResult<Vec<f64>> {
    synthesize(Instrument::HiHat, duration, sample_rate, rng)
}

/// Synthesizes a snare: a 200 Hz tone mixed half-and-half with noise.
pub fn snare(duration: f64, sample_rate: u32, rng: &mut Pcg32) -> SynthResult<Vec<f64>> {
    synthesize(Instrument::Snare, duration, sample_rate, rng)
}

/// Synthesizes a cymbal: noise with a slow decay.
pub fn cymbal(duration: f64, sample_rate: u32, rng: &mut Pcg32) -> SynthResult<Vec<f64>> {
    synthesize(Instrument::Cymbal, duration, sample_rate, rng)
}

/// Synthesizes a tom: a pure 100 Hz tone.
pub fn tom(duration: f64, sample_rate: u32, rng: &mut Pcg32) -> SynthResult<Vec<f64>> {
    synthesize(Instrument::Tom, duration, sample_rate, rng)
}
