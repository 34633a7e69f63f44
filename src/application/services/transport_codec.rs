use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::domain::{LogicalFormat, Modality, Payload};

use super::pipeline_error::PipelineError;

const DATA_URI_MARKER: &str = "base64,";

pub const MISSING_AUDIO_MESSAGE: &str = "No audio data provided";

/// Standard alphabet, padding optional on input.
const INBOUND: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("empty payload")]
    Empty,
    #[error("invalid base64: {0}")]
    InvalidBase64(String),
    #[error("payload decoded to zero bytes")]
    NoContent,
}

/// Decodes a base64 string, with or without a `data:<mime>;base64,` prefix.
///
/// Everything after the first `base64,` marker is the body. ASCII whitespace
/// inside the body is ignored.
pub fn decode(payload: &str) -> Result<Vec<u8>, TransportError> {
    let body = match payload.find(DATA_URI_MARKER) {
        Some(idx) => &payload[idx + DATA_URI_MARKER.len()..],
        None => payload,
    };

    let compact: Vec<u8> = body
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if compact.is_empty() {
        return Err(TransportError::Empty);
    }

    let bytes = INBOUND
        .decode(&compact)
        .map_err(|e| TransportError::InvalidBase64(e.to_string()))?;

    if bytes.is_empty() {
        return Err(TransportError::NoContent);
    }

    Ok(bytes)
}

/// Base64-encodes bytes produced by the encoder for `format`.
///
/// The format does not change the output; it names what the bytes are.
pub fn encode(bytes: &[u8], format: LogicalFormat) -> String {
    tracing::trace!(format = %format, bytes = bytes.len(), "Encoding outbound buffer");
    general_purpose::STANDARD.encode(bytes)
}

/// Builds a [`Payload`] for `modality` from the raw request field.
///
/// Text is taken verbatim (absent means empty). Audio distinguishes a missing
/// field from an undecodable one; image treats both as decode failures.
pub fn decode_payload(modality: Modality, raw: Option<&str>) -> Result<Payload, PipelineError> {
    match modality {
        Modality::Text => Ok(Payload::Text(raw.unwrap_or_default().to_string())),
        Modality::Image => {
            let bytes = decode(raw.unwrap_or_default())?;
            Ok(Payload::Image(bytes))
        }
        Modality::Audio => {
            let raw = raw
                .filter(|s| !s.is_empty())
                .ok_or_else(|| PipelineError::MissingInput(MISSING_AUDIO_MESSAGE.to_string()))?;
            let bytes = decode(raw)?;
            Ok(Payload::Audio(bytes))
        }
    }
}
