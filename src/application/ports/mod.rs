mod audio_codec;
mod blob_store;
mod image_codec;
mod spectral_analyzer;
mod spectrogram_renderer;
mod synonym_lookup;
mod tokenizer;
mod word_segmenter;

pub use audio_codec::{AudioCodec, AudioError};
pub use blob_store::{BlobStore, BlobStoreError};
pub use image_codec::{ImageCodec, ImageError};
pub use spectral_analyzer::SpectralAnalyzer;
pub use spectrogram_renderer::SpectrogramRenderer;
pub use synonym_lookup::{SynonymLookup, ThesaurusError};
pub use tokenizer::{Tokenizer, TokenizerError};
pub use word_segmenter::WordSegmenter;
