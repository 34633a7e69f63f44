use crate::application::ports::{AudioError, SpectralAnalyzer};
use crate::domain::{SampleBuffer, Spectrogram};

use super::resampler::resample_by_ratio;
use super::stft::{istft, phase_vocoder, stft};

pub const DEFAULT_N_FFT: usize = 2048;
pub const DEFAULT_HOP_LENGTH: usize = 512;

/// Magnitudes at or below this count as zero for crossing detection.
const ZERO_CROSSING_THRESHOLD: f32 = 1e-10;

/// Largest shift accepted, in semitones either way.
const MAX_SEMITONES: f32 = 48.0;

/// [`SpectralAnalyzer`] over a centred Hann STFT.
#[derive(Debug, Clone, Copy)]
pub struct StftAnalyzer {
    n_fft: usize,
    hop_length: usize,
}

impl StftAnalyzer {
    pub fn new(n_fft: usize, hop_length: usize) -> Result<Self, AudioError> {
        if n_fft < 2 || n_fft % 2 != 0 {
            return Err(AudioError::ProcessingFailed(format!(
                "n_fft must be even and at least 2, got {}",
                n_fft
            )));
        }
        if hop_length == 0 || hop_length > n_fft {
            return Err(AudioError::ProcessingFailed(format!(
                "hop_length must be in 1..={}, got {}",
                n_fft, hop_length
            )));
        }
        Ok(Self { n_fft, hop_length })
    }

    pub fn n_fft(&self) -> usize {
        self.n_fft
    }

    pub fn hop_length(&self) -> usize {
        self.hop_length
    }

    /// Phase-vocoder time stretch; output has `round(len / rate)` samples.
    fn time_stretch(&self, samples: &[f32], rate: f32) -> Vec<f32> {
        let frames = stft(samples, self.n_fft, self.hop_length);
        let stretched = phase_vocoder(&frames, rate, self.hop_length);
        let length = (samples.len() as f64 / rate as f64).round() as usize;
        istft(&stretched, self.n_fft, self.hop_length, length)
    }
}

impl Default for StftAnalyzer {
    fn default() -> Self {
        Self {
            n_fft: DEFAULT_N_FFT,
            hop_length: DEFAULT_HOP_LENGTH,
        }
    }
}

impl SpectralAnalyzer for StftAnalyzer {
    fn stft(&self, buffer: &SampleBuffer) -> Result<Spectrogram, AudioError> {
        let frames = stft(&buffer.samples, self.n_fft, self.hop_length)
            .into_iter()
            .map(|frame| frame.iter().map(|c| c.norm()).collect())
            .collect();

        Ok(Spectrogram {
            frames,
            sample_rate: buffer.sample_rate,
            n_fft: self.n_fft,
            hop_length: self.hop_length,
        })
    }

    fn bin_frequencies(&self, sample_rate: u32) -> Vec<f32> {
        let step = sample_rate as f32 / self.n_fft as f32;
        (0..=self.n_fft / 2).map(|k| k as f32 * step).collect()
    }

    fn zero_crossing_rate(&self, samples: &[f32]) -> Vec<f32> {
        if samples.is_empty() {
            return Vec::new();
        }

        let frame_length = self.n_fft;
        let pad = frame_length / 2;
        let first = samples[0];
        let last = samples[samples.len() - 1];

        let negative: Vec<bool> = std::iter::repeat_n(first, pad)
            .chain(samples.iter().copied())
            .chain(std::iter::repeat_n(last, pad))
            .map(|s| s.abs() > ZERO_CROSSING_THRESHOLD && s < 0.0)
            .collect();

        if negative.len() < frame_length {
            return Vec::new();
        }

        let n_frames = 1 + (negative.len() - frame_length) / self.hop_length;
        (0..n_frames)
            .map(|frame_idx| {
                let frame = &negative[frame_idx * self.hop_length..][..frame_length];
                let crossings = frame.windows(2).filter(|pair| pair[0] != pair[1]).count();
                crossings as f32 / frame_length as f32
            })
            .collect()
    }

    fn pitch_shift(
        &self,
        buffer: &SampleBuffer,
        semitones: f32,
    ) -> Result<SampleBuffer, AudioError> {
        if !semitones.is_finite() || semitones.abs() > MAX_SEMITONES {
            return Err(AudioError::ProcessingFailed(format!(
                "pitch shift of {} semitones is out of range",
                semitones
            )));
        }
        if buffer.is_empty() {
            return Ok(buffer.clone());
        }

        let rate = 2.0f32.powf(-semitones / 12.0);
        let stretched = self.time_stretch(&buffer.samples, rate);
        let mut shifted = resample_by_ratio(&stretched, rate as f64)?;
        shifted.resize(buffer.len(), 0.0);

        tracing::debug!(
            semitones,
            rate,
            samples = shifted.len(),
            "Pitch shifted"
        );

        Ok(SampleBuffer::new(shifted, buffer.sample_rate))
    }
}
