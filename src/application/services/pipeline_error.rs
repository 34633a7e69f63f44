use crate::application::ports::{AudioError, ImageError};

use super::transport_codec::TransportError;

/// Every way a media operation can fail. All variants surface to the caller the
/// same way; only the message differs.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    MissingInput(String),
    #[error("invalid payload encoding: {0}")]
    Decode(#[from] TransportError),
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error(transparent)]
    Audio(#[from] AudioError),
}
