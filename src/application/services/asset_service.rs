use std::sync::Arc;

use bytes::Bytes;
use futures::stream;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::{AssetFeatures, SanitizedFilename, StoragePath};

pub const DEFAULT_PUBLIC_PREFIX: &str = "/static/uploads";

/// Pass-through storage for uploaded 3D assets. No geometry processing happens here.
pub struct AssetService {
    store: Arc<dyn BlobStore>,
    public_prefix: String,
}

impl AssetService {
    pub fn new(store: Arc<dyn BlobStore>, public_prefix: impl Into<String>) -> Self {
        Self {
            store,
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn upload(
        &self,
        raw_filename: &str,
        data: Bytes,
    ) -> Result<AssetFeatures, AssetError> {
        if raw_filename.is_empty() {
            return Err(AssetError::NoSelectedFile);
        }

        let filename = SanitizedFilename::new(raw_filename)
            .ok_or_else(|| AssetError::InvalidFilename(raw_filename.to_string()))?;
        let path = StoragePath::upload(&filename);

        let byte_stream = Box::pin(stream::once(async move { Ok::<_, std::io::Error>(data) }));
        let size = self.store.store(&path, byte_stream).await?;

        let url = self.public_url(&filename);
        tracing::info!(path = %path, size, url = %url, "Asset stored");

        Ok(AssetFeatures {
            filename: filename.as_str().to_string(),
            size,
            format: filename.format(),
            path: url,
        })
    }

    /// Stub: returns the same asset unchanged.
    pub fn augment(&self, file_url: &str) -> String {
        file_url.to_string()
    }

    pub async fn fetch(&self, filename: &str) -> Result<Vec<u8>, AssetError> {
        let sanitized = SanitizedFilename::new(filename)
            .filter(|s| s.as_str() == filename)
            .ok_or_else(|| AssetError::InvalidFilename(filename.to_string()))?;

        Ok(self.store.fetch(&StoragePath::upload(&sanitized)).await?)
    }

    pub fn public_prefix(&self) -> &str {
        &self.public_prefix
    }

    pub fn public_url(&self, filename: &SanitizedFilename) -> String {
        format!("{}/{}", self.public_prefix, filename)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("No file part")]
    NoFilePart,
    #[error("No selected file")]
    NoSelectedFile,
    #[error("invalid filename: {0}")]
    InvalidFilename(String),
    #[error(transparent)]
    Storage(#[from] BlobStoreError),
}
