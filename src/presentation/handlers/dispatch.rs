use std::sync::Arc;

use axum::response::Response;

use crate::application::services::transport_codec;
use crate::domain::{Modality, Operation};
use crate::presentation::state::AppState;

use super::response::{ApiError, output_response};

/// Decodes `raw` for `modality` and runs `operation` on the blocking pool.
pub async fn run_operation(
    state: &AppState,
    operation: Operation,
    modality: Modality,
    raw: Option<String>,
) -> Result<Response, ApiError> {
    let dispatcher = Arc::clone(&state.dispatcher);

    let output = tokio::task::spawn_blocking(move || {
        let payload = transport_codec::decode_payload(modality, raw.as_deref())?;
        dispatcher.dispatch(operation, payload)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("{} {} task failed: {}", operation, modality, e)))??;

    tracing::info!(operation = %operation, modality = %modality, "Media operation completed");
    Ok(output_response(output))
}
