mod asset_service;
mod audio_pipeline;
mod image_pipeline;
mod media_dispatcher;
mod pipeline_error;
mod text_pipeline;
pub mod transport_codec;

pub use asset_service::{AssetError, AssetService, DEFAULT_PUBLIC_PREFIX};
pub use audio_pipeline::{AudioOptions, AudioPipeline};
pub use image_pipeline::{ImagePipeline, ImageTransform};
pub use media_dispatcher::MediaDispatcher;
pub use pipeline_error::PipelineError;
pub use text_pipeline::{DEFAULT_MAX_SYNONYMS, TextPipeline};
pub use transport_codec::TransportError;
