use std::sync::Arc;

use crate::application::ports::{AudioCodec, AudioError, SpectralAnalyzer, SpectrogramRenderer};
use crate::domain::{AudioAnalysis, AudioFeatures, PitchShiftedPair, SampleBuffer};

/// Tunables for [`AudioPipeline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioOptions {
    /// Dynamic range kept below the peak in the rendered spectrogram.
    pub top_db: f32,
    /// Magnitude of the up/down shift produced by `augment`.
    pub pitch_shift_semitones: f32,
}

impl Default for AudioOptions {
    fn default() -> Self {
        Self {
            top_db: 80.0,
            pitch_shift_semitones: 4.0,
        }
    }
}

pub struct AudioPipeline {
    codec: Arc<dyn AudioCodec>,
    analyzer: Arc<dyn SpectralAnalyzer>,
    renderer: Arc<dyn SpectrogramRenderer>,
    options: AudioOptions,
}

impl AudioPipeline {
    pub fn new(
        codec: Arc<dyn AudioCodec>,
        analyzer: Arc<dyn SpectralAnalyzer>,
        renderer: Arc<dyn SpectrogramRenderer>,
        options: AudioOptions,
    ) -> Self {
        Self {
            codec,
            analyzer,
            renderer,
            options,
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<SampleBuffer, AudioError> {
        let buffer = self.codec.decode(bytes)?;
        tracing::debug!(
            samples = buffer.len(),
            sample_rate = buffer.sample_rate,
            duration_secs = buffer.duration_secs(),
            "Audio decoded"
        );
        Ok(buffer)
    }

    /// Renders the dB-scaled STFT magnitude of `buffer` as a PNG.
    pub fn spectrogram(&self, buffer: &SampleBuffer) -> Result<Vec<u8>, AudioError> {
        let magnitudes = self.analyzer.stft(buffer)?;
        let decibels = magnitudes.to_decibels(self.options.top_db);
        self.renderer.render(&decibels)
    }

    pub fn features(&self, buffer: &SampleBuffer) -> Result<AudioFeatures, AudioError> {
        if buffer.is_empty() {
            return Err(AudioError::ProcessingFailed(
                "cannot compute features of an empty buffer".to_string(),
            ));
        }

        let frequencies = self.analyzer.bin_frequencies(buffer.sample_rate);
        let zcr = self.analyzer.zero_crossing_rate(&buffer.samples);

        Ok(AudioFeatures {
            duration_secs: buffer.duration_secs(),
            mean_frequency_hz: mean_abs(&frequencies),
            max_amplitude: buffer
                .samples
                .iter()
                .fold(0.0f64, |acc, &s| acc.max(f64::from(s.abs()))),
            rms_energy: rms(&buffer.samples),
            zero_crossing_rate: mean(&zcr),
        })
    }

    pub fn pitch_shift(
        &self,
        buffer: &SampleBuffer,
        semitones: f32,
    ) -> Result<SampleBuffer, AudioError> {
        let shifted = self.analyzer.pitch_shift(buffer, semitones)?;
        if shifted.len() != buffer.len() {
            return Err(AudioError::ProcessingFailed(format!(
                "pitch shift changed length from {} to {}",
                buffer.len(),
                shifted.len()
            )));
        }
        Ok(shifted)
    }

    /// decode → spectrogram and features from the same buffer.
    pub fn process(&self, bytes: &[u8]) -> Result<AudioAnalysis, AudioError> {
        let buffer = self.decode(bytes)?;
        let spectrogram_png = self.spectrogram(&buffer)?;
        let features = self.features(&buffer)?;

        Ok(AudioAnalysis {
            spectrogram_png,
            features,
        })
    }

    /// decode → shift up and down independently → WAV at the decoded sample rate.
    pub fn augment(&self, bytes: &[u8]) -> Result<PitchShiftedPair, AudioError> {
        let buffer = self.decode(bytes)?;
        let steps = self.options.pitch_shift_semitones;

        let high = self.pitch_shift(&buffer, steps)?;
        let low = self.pitch_shift(&buffer, -steps)?;

        Ok(PitchShiftedPair {
            high: self.codec.encode_wav(&high)?,
            low: self.codec.encode_wav(&low)?,
        })
    }
}

fn mean(values: &[f32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

fn mean_abs(values: &[f32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v.abs())).sum::<f64>() / values.len() as f64
}

fn rms(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let energy: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (energy / samples.len() as f64).sqrt()
}
