use serde::Serialize;

/// Scalar audio descriptors. Field names on the wire are part of the public contract.
///
/// `mean_frequency_hz` is the mean of the STFT bin centre frequencies, so it only
/// depends on the sample rate and FFT size (it equals `sample_rate / 4`), not on
/// the signal. Consumers rely on that value, so it is kept rather than weighted by
/// the magnitude spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioFeatures {
    #[serde(rename = "Duration (s)")]
    pub duration_secs: f64,
    #[serde(rename = "Mean Frequency (Hz)")]
    pub mean_frequency_hz: f64,
    #[serde(rename = "Max Amplitude")]
    pub max_amplitude: f64,
    #[serde(rename = "RMS Energy")]
    pub rms_energy: f64,
    #[serde(rename = "Zero Crossing Rate")]
    pub zero_crossing_rate: f64,
}
