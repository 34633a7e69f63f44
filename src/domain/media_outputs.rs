use std::fmt;

use super::audio_features::AudioFeatures;
use super::token::TokenResult;

/// Container format of an encoded output buffer. Metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalFormat {
    Png,
    Wav,
}

impl LogicalFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalFormat::Png => "PNG",
            LogicalFormat::Wav => "WAV",
        }
    }
}

impl fmt::Display for LogicalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Grayscale and rotated PNGs derived from the same resized image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageVariants {
    pub gray: Vec<u8>,
    pub rotated: Vec<u8>,
}

/// WAV buffers shifted up and down by the same number of semitones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchShiftedPair {
    pub high: Vec<u8>,
    pub low: Vec<u8>,
}

/// Spectrogram PNG plus scalar features computed from the same decoded buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioAnalysis {
    pub spectrogram_png: Vec<u8>,
    pub features: AudioFeatures,
}

/// Result of one dispatched operation, one variant per (operation, modality) pair.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutput {
    Tokens(TokenResult),
    AugmentedText(String),
    ProcessedImage(Vec<u8>),
    ImageVariants(ImageVariants),
    AudioAnalysis(AudioAnalysis),
    PitchShifted(PitchShiftedPair),
}
