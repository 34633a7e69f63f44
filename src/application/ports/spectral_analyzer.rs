use crate::domain::{SampleBuffer, Spectrogram};

use super::audio_codec::AudioError;

pub trait SpectralAnalyzer: Send + Sync {
    /// Short-time Fourier transform magnitudes of the buffer.
    fn stft(&self, buffer: &SampleBuffer) -> Result<Spectrogram, AudioError>;

    /// Centre frequency in Hz of every STFT bin at `sample_rate`.
    fn bin_frequencies(&self, sample_rate: u32) -> Vec<f32>;

    /// Per-frame zero crossing rate.
    fn zero_crossing_rate(&self, samples: &[f32]) -> Vec<f32>;

    /// Shifts pitch by `semitones`, keeping sample count and sample rate.
    fn pitch_shift(&self, buffer: &SampleBuffer, semitones: f32)
    -> Result<SampleBuffer, AudioError>;
}
