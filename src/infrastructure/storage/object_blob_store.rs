use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::StoragePath;

/// [`BlobStore`] over any `object_store` backend.
pub struct ObjectBlobStore {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectBlobStore {
    /// Files under `base_path`, created if missing.
    pub fn local(base_path: PathBuf) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    /// Process-local store; contents vanish on shutdown.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(InMemory::new()),
        }
    }
}

fn not_found_or(err: object_store::Error, other: fn(String) -> BlobStoreError) -> BlobStoreError {
    match err {
        object_store::Error::NotFound { path, .. } => BlobStoreError::NotFound(path),
        e => other(e.to_string()),
    }
}

#[async_trait::async_trait]
impl BlobStore for ObjectBlobStore {
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, BlobStoreError> {
        let store_path = StorePath::from(path.as_str());
        let mut upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(BlobStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(BlobStoreError::UploadFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(path = %path, bytes = total_bytes, "Blob stored");
        Ok(total_bytes)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, BlobStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| not_found_or(e, BlobStoreError::DownloadFailed))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
