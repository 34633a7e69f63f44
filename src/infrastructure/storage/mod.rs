mod blob_store_factory;
mod object_blob_store;

pub use blob_store_factory::BlobStoreFactory;
pub use object_blob_store::ObjectBlobStore;
