//! The percussion instrument set and its tuning constants.
//!
//! All literals that shape a sound live here as named per-instrument
//! constants, so an instrument can be retuned without touching the synthesis
//! code.

use std::fmt;
use std::str::FromStr;

/// A percussion instrument this crate can synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instrument {
    /// Closed hi-hat: pure noise with a fast decay.
    HiHat,
    /// Snare drum: a 200 Hz tone mixed half-and-half with noise.
    Snare,
    /// Crash cymbal: pure noise with a long decay.
    Cymbal,
    /// Tom drum: a pure 100 Hz tone.
    Tom,
}

impl Instrument {
    /// All instruments, in the order the reference kit generates them.
    pub const ALL: [Instrument; 4] = [
        Instrument::HiHat,
        Instrument::Snare,
        Instrument::Cymbal,
        Instrument::Tom,
    ];

    /// Decay rate: the envelope's negated exponent at the final sample.
    pub fn decay_rate(&self) -> f64 {
        match self {
            Instrument::HiHat => 10.0,
            Instrument::Snare => 8.0,
            Instrument::Cymbal => 5.0,
            Instrument::Tom => 6.0,
        }
    }

    /// Tonal component frequency in Hz, if the instrument has one.
    pub fn tone_frequency(&self) -> Option<f64> {
        match self {
            Instrument::Snare => Some(200.0),
            Instrument::Tom => Some(100.0),
            Instrument::HiHat | Instrument::Cymbal => None,
        }
    }

    /// Whether the instrument carries a noise component.
    pub fn has_noise(&self) -> bool {
        !matches!(self, Instrument::Tom)
    }

    /// Default hit length in seconds.
    pub fn default_duration(&self) -> f64 {
        match self {
            Instrument::HiHat | Instrument::Snare => 0.1,
            Instrument::Cymbal => 0.2,
            Instrument::Tom => 0.15,
        }
    }

    /// Short lowercase name, also used as the RNG stream key.
    pub fn name(&self) -> &'static str {
        match self {
            Instrument::HiHat => "hihat",
            Instrument::Snare => "snare",
            Instrument::Cymbal => "cymbal",
            Instrument::Tom => "tom",
        }
    }

    /// Output file name for this instrument.
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name())
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Instrument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hihat" | "hi-hat" => Ok(Instrument::HiHat),
            "snare" => Ok(Instrument::Snare),
            "cymbal" => Ok(Instrument::Cymbal),
            "tom" => Ok(Instrument::Tom),
            other => Err(format!(
                "unknown instrument: {other} (expected hihat, snare, cymbal, or tom)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for instrument in Instrument::ALL {
            assert_eq!(instrument.name().parse::<Instrument>(), Ok(instrument));
        }
    }

    #[test]
    fn test_hyphenated_hihat_parses() {
        assert_eq!("hi-hat".parse::<Instrument>(), Ok(Instrument::HiHat));
        assert_eq!("HiHat".parse::<Instrument>(), Ok(Instrument::HiHat));
    }

    #[test]
    fn test_unknown_instrument_is_rejected() {
        assert!("kick".parse::<Instrument>().is_err());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Instrument::HiHat.file_name(), "hihat.wav");
        assert_eq!(Instrument::Tom.file_name(), "tom.wav");
    }

    #[test]
    fn test_tonal_instruments() {
        assert_eq!(Instrument::Snare.tone_frequency(), Some(200.0));
        assert_eq!(Instrument::Tom.tone_frequency(), Some(100.0));
        assert_eq!(Instrument::HiHat.tone_frequency(), None);
        assert!(!Instrument::Tom.has_noise());
    }
}
