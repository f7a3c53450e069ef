//! Kit rendering: the driver-facing entry point.
//!
//! Renders a selection of instruments to encoded WAV data, then writes each
//! to its fixed file name under an output directory. Instruments are
//! independent; each render allocates its own buffer and RNG stream.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SynthResult;
use crate::instrument::Instrument;
use crate::rng::instrument_rng;
use crate::synthesis::synthesize;
use crate::wav::WavResult;

/// Parameters for rendering a drum kit.
#[derive(Debug, Clone)]
pub struct KitParams {
    /// Audio sample rate in Hz.
    pub sample_rate: u32,
    /// Base seed for the noise components. `None` means unseeded: noise
    /// differs across runs, matching the reference behavior.
    pub seed: Option<u32>,
    /// Instruments to render, in order.
    pub instruments: Vec<Instrument>,
}

impl Default for KitParams {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            seed: None,
            instruments: Instrument::ALL.to_vec(),
        }
    }
}

/// One rendered instrument sound.
#[derive(Debug)]
pub struct RenderedSound {
    /// The instrument this sound belongs to.
    pub instrument: Instrument,
    /// Encoded WAV data.
    pub wav: WavResult,
}

/// Renders one instrument at its default duration.
pub fn render_instrument(
    instrument: Instrument,
    sample_rate: u32,
    seed: Option<u32>,
) -> SynthResult<RenderedSound> {
    let mut rng = instrument_rng(seed, instrument.name());
    let samples = synthesize(
        instrument,
        instrument.default_duration(),
        sample_rate,
        &mut rng,
    )?;

    Ok(RenderedSound {
        instrument,
        wav: WavResult::from_mono(&samples, sample_rate),
    })
}

/// Renders every instrument in the kit.
///
/// Rendering is sequential and fails on the first invalid parameter; I/O
/// happens later in [`write_sound`], so a render failure never leaves files
/// behind.
pub fn render_kit(params: &KitParams) -> SynthResult<Vec<RenderedSound>> {
    params
        .instruments
        .iter()
        .map(|&instrument| render_instrument(instrument, params.sample_rate, params.seed))
        .collect()
}

/// Writes a rendered sound to `<dir>/<instrument>.wav`.
///
/// The file is created or overwritten in one buffered write. If the write
/// fails partway, the partial file is removed before the error propagates.
///
/// # Returns
/// The path of the written file
pub fn write_sound(sound: &RenderedSound, dir: &Path) -> SynthResult<PathBuf> {
    let path = dir.join(sound.instrument.file_name());

    if let Err(err) = fs::write(&path, &sound.wav.wav_data) {
        // Don't leave a truncated file behind
        let _ = fs::remove_file(&path);
        return Err(err.into());
    }

    Ok(path)
}
