use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    augment_3d_handler, augment_audio_handler, augment_image_handler, augment_text_handler,
    health_handler, process_3d_handler, process_audio_handler, process_image_handler,
    process_text_handler, serve_upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route("/process_text", post(process_text_handler))
        .route("/process", post(process_text_handler))
        .route("/augment_text", post(augment_text_handler))
        .route("/augment", post(augment_text_handler))
        .route("/process_image", post(process_image_handler))
        .route("/augment_image", post(augment_image_handler))
        .route("/process_audio", post(process_audio_handler))
        .route("/augment_audio", post(augment_audio_handler))
        .route("/process_3d", post(process_3d_handler))
        .route("/augment_3d", post(augment_3d_handler));

    // Uploads are only served locally when their public URL is a path on this host.
    let prefix = state.assets.public_prefix();
    if prefix.starts_with('/') {
        router = router.route(&format!("{}/{{filename}}", prefix), get(serve_upload_handler));
    }

    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    router
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
