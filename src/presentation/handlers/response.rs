use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::transport_codec;
use crate::application::services::{AssetError, PipelineError};
use crate::domain::{AudioFeatures, LogicalFormat, OperationOutput};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct TokensResponse {
    pub tokens: Vec<u32>,
    pub token_text: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AugmentedTextResponse {
    pub augmented_text: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessedImageResponse {
    pub processed_image: String,
}

#[derive(Debug, Serialize)]
pub struct ImageVariantsResponse {
    pub gray: String,
    pub rotated: String,
}

#[derive(Debug, Serialize)]
pub struct AudioAnalysisResponse {
    pub spectrogram: String,
    pub features: AudioFeatures,
}

#[derive(Debug, Serialize)]
pub struct PitchShiftedResponse {
    pub high_freq: String,
    pub low_freq: String,
}

/// Failure of any endpoint, rendered as `{"error": message}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("{0}")]
    InvalidJson(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidJson(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::BadRequest(format!("Failed to read multipart: {}", err.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Serializes a pipeline result as the DTO of the operation that produced it.
pub fn output_response(output: OperationOutput) -> Response {
    let png = |bytes: &[u8]| transport_codec::encode(bytes, LogicalFormat::Png);
    let wav = |bytes: &[u8]| transport_codec::encode(bytes, LogicalFormat::Wav);

    match output {
        OperationOutput::Tokens(result) => Json(TokensResponse {
            tokens: result.ids(),
            token_text: result.texts(),
        })
        .into_response(),
        OperationOutput::AugmentedText(augmented_text) => {
            Json(AugmentedTextResponse { augmented_text }).into_response()
        }
        OperationOutput::ProcessedImage(bytes) => Json(ProcessedImageResponse {
            processed_image: png(&bytes),
        })
        .into_response(),
        OperationOutput::ImageVariants(variants) => Json(ImageVariantsResponse {
            gray: png(&variants.gray),
            rotated: png(&variants.rotated),
        })
        .into_response(),
        OperationOutput::AudioAnalysis(analysis) => Json(AudioAnalysisResponse {
            spectrogram: png(&analysis.spectrogram_png),
            features: analysis.features,
        })
        .into_response(),
        OperationOutput::PitchShifted(pair) => Json(PitchShiftedResponse {
            high_freq: wav(&pair.high),
            low_freq: wav(&pair.low),
        })
        .into_response(),
    }
}
