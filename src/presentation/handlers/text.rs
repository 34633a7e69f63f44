use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use serde::Deserialize;

use crate::domain::{Modality, Operation};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

use super::dispatch::run_operation;
use super::response::ApiError;

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn process_text_handler(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(
        text = %preview_text(request.text.as_deref().unwrap_or_default()),
        "Tokenizing text"
    );
    run_operation(&state, Operation::Process, Modality::Text, request.text).await
}

#[tracing::instrument(skip(state, payload))]
pub async fn augment_text_handler(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    tracing::debug!(
        text = %preview_text(request.text.as_deref().unwrap_or_default()),
        "Augmenting text"
    );
    run_operation(&state, Operation::Augment, Modality::Text, request.text).await
}
