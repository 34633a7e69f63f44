mod raster_codec;

pub use raster_codec::RasterImageCodec;
