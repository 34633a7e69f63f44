use crate::domain::DecibelSpectrogram;

use super::audio_codec::AudioError;

pub trait SpectrogramRenderer: Send + Sync {
    /// Renders a heatmap with time across and frequency up, returning PNG bytes.
    fn render(&self, spectrogram: &DecibelSpectrogram) -> Result<Vec<u8>, AudioError>;
}
