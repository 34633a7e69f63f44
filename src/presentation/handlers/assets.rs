use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::BlobStoreError;
use crate::application::services::AssetError;
use crate::domain::AssetFeatures;
use crate::presentation::state::AppState;

use super::response::ApiError;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub file_url: String,
    pub features: AssetFeatures,
}

#[derive(Debug, Deserialize)]
pub struct AugmentAssetRequest {
    #[serde(default)]
    pub file_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AugmentAssetResponse {
    pub success: bool,
    pub augmented_url: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_3d_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        if filename.is_empty() {
            return Err(AssetError::NoSelectedFile.into());
        }

        let data = field.bytes().await?;
        tracing::debug!(filename = %filename, bytes = data.len(), "3D asset received");

        let features = state.assets.upload(&filename, data).await?;
        return Ok(Json(UploadResponse {
            success: true,
            file_url: features.path.clone(),
            features,
        }));
    }

    Err(AssetError::NoFilePart.into())
}

#[tracing::instrument(skip(state, payload))]
pub async fn augment_3d_handler(
    State(state): State<AppState>,
    payload: Result<Json<AugmentAssetRequest>, JsonRejection>,
) -> Result<Json<AugmentAssetResponse>, ApiError> {
    let Json(request) = payload?;
    let file_url = request
        .file_url
        .ok_or_else(|| ApiError::BadRequest("missing field: file_url".to_string()))?;

    Ok(Json(AugmentAssetResponse {
        success: true,
        augmented_url: state.assets.augment(&file_url),
    }))
}

#[tracing::instrument(skip(state))]
pub async fn serve_upload_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let bytes = match state.assets.fetch(&filename).await {
        Ok(bytes) => bytes,
        Err(AssetError::InvalidFilename(_))
        | Err(AssetError::Storage(BlobStoreError::NotFound(_))) => {
            return Err(ApiError::NotFound(format!("File not found: {}", filename)));
        }
        Err(e) => return Err(ApiError::Internal(e.to_string())),
    };

    let mime = mime_guess::from_path(&filename).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response())
}
