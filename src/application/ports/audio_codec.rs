use crate::domain::SampleBuffer;

pub trait AudioCodec: Send + Sync {
    /// Decodes a complete audio container into mono samples.
    fn decode(&self, bytes: &[u8]) -> Result<SampleBuffer, AudioError>;

    /// Encodes as an uncompressed WAV at the buffer's own sample rate.
    fn encode_wav(&self, buffer: &SampleBuffer) -> Result<Vec<u8>, AudioError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("signal processing failed: {0}")]
    ProcessingFailed(String),
    #[error("spectrogram rendering failed: {0}")]
    RenderingFailed(String),
}
