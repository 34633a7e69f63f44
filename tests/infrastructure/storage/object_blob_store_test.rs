use std::io;

use augmenta::application::ports::{BlobStore, BlobStoreError};
use augmenta::domain::StoragePath;
use augmenta::infrastructure::storage::ObjectBlobStore;
use bytes::Bytes;
use futures::stream::{self, BoxStream};
use tempfile::TempDir;

fn chunks(parts: &[&'static [u8]]) -> BoxStream<'static, Result<Bytes, io::Error>> {
    let items: Vec<Result<Bytes, io::Error>> =
        parts.iter().map(|p| Ok(Bytes::from_static(p))).collect();
    Box::pin(stream::iter(items))
}

#[tokio::test]
async fn given_local_store_when_storing_chunks_then_file_is_written_under_base_path() {
    let dir = TempDir::new().unwrap();
    let store = ObjectBlobStore::local(dir.path().to_path_buf()).unwrap();
    let path = StoragePath::from_raw("uploads/model.glb");

    let written = store
        .store(&path, chunks(&[b"glTF", b"-binary"]))
        .await
        .unwrap();

    assert_eq!(written, 11);
    let on_disk = std::fs::read(dir.path().join("uploads").join("model.glb")).unwrap();
    assert_eq!(on_disk, b"glTF-binary");
    assert_eq!(store.fetch(&path).await.unwrap(), b"glTF-binary");
}

#[tokio::test]
async fn given_missing_base_directory_when_creating_local_store_then_it_is_created() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("nested").join("static");

    ObjectBlobStore::local(base.clone()).unwrap();

    assert!(base.is_dir());
}

#[tokio::test]
async fn given_local_store_when_fetching_unknown_object_then_not_found() {
    let dir = TempDir::new().unwrap();
    let store = ObjectBlobStore::local(dir.path().to_path_buf()).unwrap();

    let result = store.fetch(&StoragePath::from_raw("uploads/none.stl")).await;

    assert!(matches!(result, Err(BlobStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_in_memory_store_when_storing_then_fetch_returns_bytes() {
    let store = ObjectBlobStore::in_memory();
    let path = StoragePath::from_raw("uploads/cube.obj");

    store.store(&path, chunks(&[b"v 1 1 1\n"])).await.unwrap();

    assert_eq!(store.fetch(&path).await.unwrap(), b"v 1 1 1\n");
}

#[tokio::test]
async fn given_stored_object_when_storing_again_then_content_is_replaced() {
    let store = ObjectBlobStore::in_memory();
    let path = StoragePath::from_raw("uploads/tmp.ply");
    store.store(&path, chunks(&[b"ply v1"])).await.unwrap();

    let written = store.store(&path, chunks(&[b"ply"])).await.unwrap();

    assert_eq!(written, 3);
    assert_eq!(store.fetch(&path).await.unwrap(), b"ply");
}

#[tokio::test]
async fn given_failing_stream_when_storing_then_io_error_and_nothing_is_kept() {
    let store = ObjectBlobStore::in_memory();
    let path = StoragePath::from_raw("uploads/broken.fbx");
    let failing: BoxStream<'static, Result<Bytes, io::Error>> = Box::pin(stream::iter(vec![
        Ok(Bytes::from_static(b"partial")),
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away")),
    ]));

    let result = store.store(&path, failing).await;

    assert!(matches!(result, Err(BlobStoreError::Io(_))));
    assert!(matches!(
        store.fetch(&path).await,
        Err(BlobStoreError::NotFound(_))
    ));
}
