mod asset;
mod audio_features;
mod media_outputs;
mod payload;
mod raster_image;
mod sample_buffer;
mod spectrogram;
mod storage_path;
mod token;

pub use asset::{AssetFeatures, SanitizedFilename};
pub use audio_features::AudioFeatures;
pub use media_outputs::{
    AudioAnalysis, ImageVariants, LogicalFormat, OperationOutput, PitchShiftedPair,
};
pub use payload::{Modality, Operation, Payload};
pub use raster_image::{PixelLayout, RasterImage};
pub use sample_buffer::SampleBuffer;
pub use spectrogram::{DecibelSpectrogram, Spectrogram};
pub use storage_path::StoragePath;
pub use token::{Token, TokenResult};
