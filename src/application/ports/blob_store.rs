use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::StoragePath;

#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    async fn store(
        &self,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, BlobStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
