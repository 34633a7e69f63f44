use std::f32::consts::PI;
use std::io::{self, Cursor};
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose;
use bytes::Bytes;
use futures::stream::BoxStream;
use image::{DynamicImage, ImageFormat, RgbImage};

use augmenta::application::ports::{BlobStore, BlobStoreError, SpectralAnalyzer};
use augmenta::application::services::{
    AssetService, AudioOptions, AudioPipeline, ImagePipeline, ImageTransform, MediaDispatcher,
    TextPipeline,
};
use augmenta::domain::{SampleBuffer, StoragePath};
use augmenta::infrastructure::audio::{PcmAudioCodec, StftAnalyzer, SvgSpectrogramRenderer};
use augmenta::infrastructure::imaging::RasterImageCodec;
use augmenta::infrastructure::storage::ObjectBlobStore;
use augmenta::infrastructure::text::{InMemoryThesaurus, TiktokenTokenizer, TreebankWordSegmenter};
use augmenta::presentation::{AppState, create_router};

pub const SAMPLE_RATE: u32 = 22_050;

pub fn sine(freq: f32, sample_rate: u32, len: usize, amplitude: f32) -> Vec<f32> {
    (0..len)
        .map(|i| (2.0 * PI * freq * i as f32 / sample_rate as f32).sin() * amplitude)
        .collect()
}

/// 16-bit mono WAV holding `samples`.
pub fn wav_bytes(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut bytes = Vec::new();
    {
        let mut writer = hound::WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
        for &s in samples {
            writer.write_sample((s * i16::MAX as f32) as i16).unwrap();
        }
        writer.finalize().unwrap();
    }
    bytes
}

pub fn sine_wav(freq: f32, seconds: f32) -> Vec<u8> {
    let len = (SAMPLE_RATE as f32 * seconds) as usize;
    wav_bytes(&sine(freq, SAMPLE_RATE, len, 0.5), SAMPLE_RATE)
}

pub fn read_wav(bytes: &[u8]) -> (hound::WavSpec, Vec<f32>) {
    let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let spec = reader.spec();
    let samples = reader
        .samples::<i16>()
        .map(|s| s.unwrap() as f32 / i16::MAX as f32)
        .collect();
    (spec, samples)
}

/// Colourful gradient so resampling and grayscale have something to do.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    })
}

pub fn encode_image(image: RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    bytes
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode_image(gradient_image(width, height), ImageFormat::Png)
}

pub fn base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

pub fn unbase64(text: &str) -> Vec<u8> {
    general_purpose::STANDARD.decode(text).unwrap()
}

/// Frequency of the STFT bin with the most energy summed over all frames.
pub fn dominant_frequency(samples: &[f32], sample_rate: u32) -> f32 {
    let analyzer = StftAnalyzer::default();
    let spectrogram = analyzer
        .stft(&SampleBuffer::new(samples.to_vec(), sample_rate))
        .unwrap();

    let mut energy = vec![0.0f32; spectrogram.n_bins()];
    for frame in &spectrogram.frames {
        for (bin, value) in frame.iter().enumerate() {
            energy[bin] += value;
        }
    }

    let peak = energy
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(bin, _)| bin)
        .unwrap();

    analyzer.bin_frequencies(sample_rate)[peak]
}

pub fn assert_close(actual: f32, expected: f32, relative: f32) {
    assert!(
        (actual - expected).abs() <= expected.abs() * relative,
        "expected {} within {}% of {}",
        actual,
        relative * 100.0,
        expected
    );
}

pub fn test_thesaurus() -> InMemoryThesaurus {
    InMemoryThesaurus::from_entries([
        ("happy", vec!["happy", "felicitous", "glad", "well-chosen"]),
        ("quick", vec!["quick", "speedy", "fast", "speedy", "flying"]),
    ])
}

pub fn test_audio_pipeline() -> AudioPipeline {
    AudioPipeline::new(
        Arc::new(PcmAudioCodec::default()),
        Arc::new(StftAnalyzer::default()),
        Arc::new(SvgSpectrogramRenderer::new(Arc::new(
            usvg::fontdb::Database::new(),
        ))),
        AudioOptions::default(),
    )
}

pub fn test_text_pipeline() -> TextPipeline {
    TextPipeline::new(
        Arc::new(TiktokenTokenizer::cl100k().unwrap()),
        Arc::new(TreebankWordSegmenter::new()),
        Arc::new(test_thesaurus()),
        3,
    )
}

pub fn test_dispatcher() -> MediaDispatcher {
    let image = ImagePipeline::new(Arc::new(RasterImageCodec::new()), ImageTransform::default());
    MediaDispatcher::new(test_text_pipeline(), image, test_audio_pipeline())
}

pub fn test_app() -> axum::Router {
    test_app_with_store(Arc::new(ObjectBlobStore::in_memory()))
}

pub fn test_app_with_store(store: Arc<dyn BlobStore>) -> axum::Router {
    let assets = AssetService::new(store, "/static/uploads");
    let state = AppState::new(Arc::new(test_dispatcher()), Arc::new(assets));
    create_router(state)
}

/// Store whose backend rejects every write and read.
pub struct UnavailableBlobStore;

#[async_trait::async_trait]
impl BlobStore for UnavailableBlobStore {
    async fn store(
        &self,
        _path: &StoragePath,
        _stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, BlobStoreError> {
        Err(BlobStoreError::UploadFailed("disk full".to_string()))
    }

    async fn fetch(&self, _path: &StoragePath) -> Result<Vec<u8>, BlobStoreError> {
        Err(BlobStoreError::DownloadFailed("disk unavailable".to_string()))
    }
}
