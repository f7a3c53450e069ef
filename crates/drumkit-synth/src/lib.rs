//! Drumkit synthesis library
//!
//! This crate procedurally synthesizes four percussion sounds and encodes
//! them as mono 16-bit PCM WAV files:
//!
//! - **Hi-hat** - uniform noise with a fast exponential decay
//! - **Snare** - a 200 Hz sine tone mixed half-and-half with noise
//! - **Cymbal** - uniform noise with a slow decay
//! - **Tom** - a pure 100 Hz sine tone
//!
//! # Determinism
//!
//! With a base seed, output is byte-identical across runs: all randomness
//! flows through PCG32, and each instrument's stream is derived from the
//! base seed via BLAKE3, so one instrument's noise never depends on which
//! other instruments are rendered. Without a seed, noise comes from OS
//! entropy and differs across runs.
//!
//! # Example
//!
//! ```no_run
//! use drumkit_synth::{render_kit, KitParams};
//!
//! let params = KitParams {
//!     seed: Some(42),
//!     ..KitParams::default()
//! };
//! let sounds = render_kit(&params)?;
//!
//! for sound in &sounds {
//!     std::fs::write(sound.instrument.file_name(), &sound.wav.wav_data)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate structure
//!
//! - [`instrument`] - The instrument set and its tuning constants
//! - [`synthesis`] - Sample buffer synthesis
//! - [`envelope`] - Exponential decay envelope
//! - [`oscillator`] - Sine and noise generation helpers
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`wav`] - Deterministic WAV file writer
//! - [`generate`] - Kit rendering and file output

pub mod envelope;
pub mod error;
pub mod generate;
pub mod instrument;
pub mod oscillator;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use error::{SynthError, SynthResult};
pub use generate::{render_instrument, render_kit, write_sound, KitParams, RenderedSound};
pub use instrument::Instrument;
pub use wav::WavResult;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_full_generation_pipeline() {
        let params = KitParams {
            seed: Some(42),
            ..KitParams::default()
        };
        let sounds = render_kit(&params).expect("generation should succeed");

        assert_eq!(sounds.len(), 4);
        for sound in &sounds {
            assert_eq!(&sound.wav.wav_data[0..4], b"RIFF");
            assert_eq!(&sound.wav.wav_data[8..12], b"WAVE");
            assert_eq!(sound.wav.sample_rate, 44100);
            assert_eq!(
                sound.wav.wav_data.len(),
                44 + sound.wav.num_samples * 2
            );
        }
    }

    #[test]
    fn test_generation_determinism() {
        let params = KitParams {
            seed: Some(42),
            ..KitParams::default()
        };

        let first = render_kit(&params).expect("first generation");
        let second = render_kit(&params).expect("second generation");

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
            assert_eq!(a.wav.wav_data, b.wav.wav_data);
        }
    }

    #[test]
    fn test_unseeded_noise_differs_across_runs() {
        let params = KitParams {
            instruments: vec![Instrument::HiHat],
            ..KitParams::default()
        };

        let first = render_kit(&params).expect("first generation");
        let second = render_kit(&params).expect("second generation");

        assert_eq!(first[0].wav.num_samples, second[0].wav.num_samples);
        assert_ne!(first[0].wav.pcm_hash, second[0].wav.pcm_hash);
    }
}
