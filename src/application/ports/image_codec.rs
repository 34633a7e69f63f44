use crate::domain::{LogicalFormat, RasterImage};

pub trait ImageCodec: Send + Sync {
    /// Parses a raster container, detecting the format from content.
    fn decode(&self, bytes: &[u8]) -> Result<RasterImage, ImageError>;

    /// Resamples to exactly `width` x `height`, ignoring aspect ratio.
    fn resize(&self, image: &RasterImage, width: u32, height: u32)
    -> Result<RasterImage, ImageError>;

    fn to_grayscale(&self, image: &RasterImage) -> Result<RasterImage, ImageError>;

    /// Rotates counter-clockwise by `degrees` (negative turns clockwise), expanding the canvas.
    fn rotate(&self, image: &RasterImage, degrees: i32) -> Result<RasterImage, ImageError>;

    fn encode(&self, image: &RasterImage, format: LogicalFormat) -> Result<Vec<u8>, ImageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("cannot identify image: {0}")]
    Decode(String),
    #[error("image encoding failed: {0}")]
    Encode(String),
    #[error("invalid target size {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("unsupported rotation: {0} degrees (multiples of 90 only)")]
    UnsupportedRotation(i32),
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(LogicalFormat),
}
