/// Interleaved 8-bit channel layout of a [`RasterImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    Luma8,
    LumaA8,
    Rgb8,
    Rgba8,
}

impl PixelLayout {
    pub fn channels(&self) -> usize {
        match self {
            PixelLayout::Luma8 => 1,
            PixelLayout::LumaA8 => 2,
            PixelLayout::Rgb8 => 3,
            PixelLayout::Rgba8 => 4,
        }
    }
}

/// Decoded pixel buffer, independent of the codec library that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    layout: PixelLayout,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Returns `None` if `pixels` does not hold exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, layout: PixelLayout, pixels: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * layout.channels();
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Channel values of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.layout.channels();
        let start = (y as usize * self.width as usize + x as usize) * channels;
        self.pixels.get(start..start + channels)
    }
}
