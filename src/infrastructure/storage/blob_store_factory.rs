use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::object_blob_store::ObjectBlobStore;

pub struct BlobStoreFactory;

impl BlobStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let store = ObjectBlobStore::local(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Memory => Ok(Arc::new(ObjectBlobStore::in_memory())),
        }
    }
}
