use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use serde::Deserialize;

use crate::domain::{Modality, Operation};
use crate::infrastructure::observability::preview_base64;
use crate::presentation::state::AppState;

use super::dispatch::run_operation;
use super::response::ApiError;

#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    #[serde(default)]
    pub image: Option<String>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn process_image_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImageRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(image = %preview_base64(request.image.as_deref()), "Resizing image");
    run_operation(&state, Operation::Process, Modality::Image, request.image).await
}

#[tracing::instrument(skip(state, payload))]
pub async fn augment_image_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImageRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(image = %preview_base64(request.image.as_deref()), "Augmenting image");
    run_operation(&state, Operation::Augment, Modality::Image, request.image).await
}
