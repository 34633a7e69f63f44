mod pcm_codec;
mod resampler;
mod spectrogram_renderer;
mod stft;
mod stft_analyzer;

pub use pcm_codec::{DEFAULT_SAMPLE_RATE, PcmAudioCodec};
pub use resampler::{resample, resample_by_ratio};
pub use spectrogram_renderer::SvgSpectrogramRenderer;
pub use stft_analyzer::{DEFAULT_HOP_LENGTH, DEFAULT_N_FFT, StftAnalyzer};
