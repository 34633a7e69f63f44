use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, ImageFormat};

use crate::application::ports::{ImageCodec, ImageError};
use crate::domain::{LogicalFormat, PixelLayout, RasterImage};

/// [`ImageCodec`] over the `image` crate. Every decoded image is normalized to
/// an 8-bit layout; high bit-depth and float inputs are down-converted.
#[derive(Debug, Clone, Copy)]
pub struct RasterImageCodec {
    filter: FilterType,
}

impl RasterImageCodec {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    pub fn with_filter(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Default for RasterImageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for RasterImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<RasterImage, ImageError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;
        tracing::trace!(color = ?decoded.color(), "Source color type");
        from_dynamic(decoded)
    }

    fn resize(
        &self,
        image: &RasterImage,
        width: u32,
        height: u32,
    ) -> Result<RasterImage, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimensions { width, height });
        }
        let resized = to_dynamic(image)?.resize_exact(width, height, self.filter);
        from_dynamic(resized)
    }

    fn to_grayscale(&self, image: &RasterImage) -> Result<RasterImage, ImageError> {
        let gray = to_dynamic(image)?.to_luma8();
        from_dynamic(DynamicImage::ImageLuma8(gray))
    }

    fn rotate(&self, image: &RasterImage, degrees: i32) -> Result<RasterImage, ImageError> {
        if degrees % 90 != 0 {
            return Err(ImageError::UnsupportedRotation(degrees));
        }
        let source = to_dynamic(image)?;
        // `image` rotates clockwise; positive degrees here are counter-clockwise.
        let rotated = match degrees.rem_euclid(360) {
            0 => source,
            90 => source.rotate270(),
            180 => source.rotate180(),
            _ => source.rotate90(),
        };
        from_dynamic(rotated)
    }

    fn encode(&self, image: &RasterImage, format: LogicalFormat) -> Result<Vec<u8>, ImageError> {
        let target = match format {
            LogicalFormat::Png => ImageFormat::Png,
            other => return Err(ImageError::UnsupportedFormat(other)),
        };

        let mut buf = Vec::new();
        to_dynamic(image)?
            .write_to(&mut Cursor::new(&mut buf), target)
            .map_err(|e| ImageError::Encode(e.to_string()))?;
        Ok(buf)
    }
}

fn from_dynamic(image: DynamicImage) -> Result<RasterImage, ImageError> {
    let (width, height) = (image.width(), image.height());
    let (layout, pixels) = match image {
        DynamicImage::ImageLuma8(buf) => (PixelLayout::Luma8, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (PixelLayout::LumaA8, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (PixelLayout::Rgb8, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => (PixelLayout::Rgba8, buf.into_raw()),
        other => {
            let color = other.color();
            match (color.has_color(), color.has_alpha()) {
                (false, false) => (PixelLayout::Luma8, other.to_luma8().into_raw()),
                (false, true) => (PixelLayout::LumaA8, other.to_luma_alpha8().into_raw()),
                (true, false) => (PixelLayout::Rgb8, other.to_rgb8().into_raw()),
                (true, true) => (PixelLayout::Rgba8, other.to_rgba8().into_raw()),
            }
        }
    };

    RasterImage::new(width, height, layout, pixels).ok_or_else(|| {
        ImageError::Decode(format!("pixel buffer does not fit {}x{}", width, height))
    })
}

fn to_dynamic(image: &RasterImage) -> Result<DynamicImage, ImageError> {
    let (width, height) = image.dimensions();
    let pixels = image.pixels().to_vec();
    let mismatch =
        || ImageError::Encode(format!("pixel buffer does not fit {}x{}", width, height));

    let dynamic = match image.layout() {
        PixelLayout::Luma8 => DynamicImage::ImageLuma8(
            ImageBuffer::from_raw(width, height, pixels).ok_or_else(mismatch)?,
        ),
        PixelLayout::LumaA8 => DynamicImage::ImageLumaA8(
            ImageBuffer::from_raw(width, height, pixels).ok_or_else(mismatch)?,
        ),
        PixelLayout::Rgb8 => DynamicImage::ImageRgb8(
            ImageBuffer::from_raw(width, height, pixels).ok_or_else(mismatch)?,
        ),
        PixelLayout::Rgba8 => DynamicImage::ImageRgba8(
            ImageBuffer::from_raw(width, height, pixels).ok_or_else(mismatch)?,
        ),
    };
    Ok(dynamic)
}
