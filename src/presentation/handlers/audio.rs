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
pub struct AudioRequest {
    #[serde(default)]
    pub audio: Option<String>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn process_audio_handler(
    State(state): State<AppState>,
    payload: Result<Json<AudioRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(audio = %preview_base64(request.audio.as_deref()), "Analysing audio");
    run_operation(&state, Operation::Process, Modality::Audio, request.audio).await
}

#[tracing::instrument(skip(state, payload))]
pub async fn augment_audio_handler(
    State(state): State<AppState>,
    payload: Result<Json<AudioRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(audio = %preview_base64(request.audio.as_deref()), "Pitch shifting audio");
    run_operation(&state, Operation::Augment, Modality::Audio, request.audio).await
}
