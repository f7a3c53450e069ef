//! Deterministic WAV file writer.
//!
//! Writes mono 16-bit PCM WAV files with a fixed 44-byte header and no
//! timestamps or variable metadata, so the same samples always produce the
//! same bytes. The BLAKE3 hash of the PCM data backs the determinism
//! assertions in the tests.

use std::io::{self, Write};

/// WAV file format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (always 1 for this crate).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    /// Calculates byte rate (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Samples are expected in [-1.0, 1.0]; values outside that range are
/// clipped. Conversion truncates toward zero at a scale of 32767.
///
/// # Arguments
/// * `samples` - Audio samples in f64 format
///
/// # Returns
/// PCM data as little-endian 16-bit samples
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).trunc() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Result of WAV file encoding.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Creates a WavResult from mono samples.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pcm_values(wav_data: &[u8]) -> Vec<i16> {
        wav_data[44..]
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect()
    }

    #[test]
    fn test_header_layout() {
        let result = WavResult::from_mono(&[0.0; 4410], 44100);
        let data = &result.wav_data;

        assert_eq!(data.len(), 8864); // 44-byte header + 4410 * 2

        assert_eq!(&data[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes(data[4..8].try_into().unwrap()), 8856);
        assert_eq!(&data[8..12], b"WAVE");

        assert_eq!(&data[12..16], b"fmt ");
        assert_eq!(u32::from_le_bytes(data[16..20].try_into().unwrap()), 16);
        assert_eq!(u16::from_le_bytes(data[20..22].try_into().unwrap()), 1); // PCM
        assert_eq!(u16::from_le_bytes(data[22..24].try_into().unwrap()), 1); // mono
        assert_eq!(u32::from_le_bytes(data[24..28].try_into().unwrap()), 44100);
        assert_eq!(u32::from_le_bytes(data[28..32].try_into().unwrap()), 88200); // byte rate
        assert_eq!(u16::from_le_bytes(data[32..34].try_into().unwrap()), 2); // block align
        assert_eq!(u16::from_le_bytes(data[34..36].try_into().unwrap()), 16);

        assert_eq!(&data[36..40], b"data");
        assert_eq!(u32::from_le_bytes(data[40..44].try_into().unwrap()), 8820);
    }

    #[test]
    fn test_zero_samples_encode_to_zero_pcm() {
        let result = WavResult::from_mono(&[0.0; 128], 44100);
        assert!(pcm_values(&result.wav_data).iter().all(|&v| v == 0));
    }

    #[test]
    fn test_full_scale_encodes_to_extremes() {
        let result = WavResult::from_mono(&[1.0, -1.0], 44100);
        assert_eq!(pcm_values(&result.wav_data), vec![32767, -32767]);
    }

    #[test]
    fn test_out_of_range_samples_clip() {
        let result = WavResult::from_mono(&[2.0, -2.0], 44100);
        assert_eq!(pcm_values(&result.wav_data), vec![32767, -32767]);
    }

    #[test]
    fn test_quantization_truncates_toward_zero() {
        // 0.5 * 32767 = 16383.5, truncation keeps 16383 either side of zero
        let pcm = samples_to_pcm16(&[0.5, -0.5]);
        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 16383);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -16383);
    }

    #[test]
    fn test_pcm_hash_tracks_content() {
        let a = WavResult::from_mono(&[0.1, 0.2, 0.3], 44100);
        let b = WavResult::from_mono(&[0.1, 0.2, 0.3], 44100);
        let c = WavResult::from_mono(&[0.1, 0.2, 0.4], 44100);

        assert_eq!(a.pcm_hash, b.pcm_hash);
        assert_ne!(a.pcm_hash, c.pcm_hash);
    }

    #[test]
    fn test_duration_seconds() {
        let result = WavResult::from_mono(&[0.0; 4410], 44100);
        assert!((result.duration_seconds() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_empty_buffer_is_header_only() {
        let result = WavResult::from_mono(&[], 44100);
        assert_eq!(result.wav_data.len(), 44);
        assert_eq!(result.num_samples, 0);
    }
}
