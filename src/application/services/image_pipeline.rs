use std::sync::Arc;

use crate::application::ports::{ImageCodec, ImageError};
use crate::domain::{ImageVariants, LogicalFormat, RasterImage};

/// Geometry applied by [`ImagePipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTransform {
    pub width: u32,
    pub height: u32,
    pub rotation_degrees: i32,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            rotation_degrees: -90,
        }
    }
}

pub struct ImagePipeline {
    codec: Arc<dyn ImageCodec>,
    transform: ImageTransform,
}

impl ImagePipeline {
    pub fn new(codec: Arc<dyn ImageCodec>, transform: ImageTransform) -> Self {
        Self { codec, transform }
    }

    pub fn transform(&self) -> ImageTransform {
        self.transform
    }

    /// decode → resize → PNG.
    pub fn process(&self, bytes: &[u8]) -> Result<Vec<u8>, ImageError> {
        let resized = self.decode_and_resize(bytes)?;
        self.codec.encode(&resized, LogicalFormat::Png)
    }

    /// decode → resize, then grayscale and rotation each applied to the resized image.
    pub fn augment(&self, bytes: &[u8]) -> Result<ImageVariants, ImageError> {
        let resized = self.decode_and_resize(bytes)?;

        let gray = self.codec.to_grayscale(&resized)?;
        let rotated = self
            .codec
            .rotate(&resized, self.transform.rotation_degrees)?;

        Ok(ImageVariants {
            gray: self.codec.encode(&gray, LogicalFormat::Png)?,
            rotated: self.codec.encode(&rotated, LogicalFormat::Png)?,
        })
    }

    fn decode_and_resize(&self, bytes: &[u8]) -> Result<RasterImage, ImageError> {
        let image = self.codec.decode(bytes)?;
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            layout = ?image.layout(),
            "Image decoded"
        );
        self.codec
            .resize(&image, self.transform.width, self.transform.height)
    }
}
