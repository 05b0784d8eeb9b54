//! HTTP API route definitions.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::{ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};
use super::handlers::{info, multiply, prometheus_metrics, subtract, sum, track_latency, AppState};

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service information
        .route("/", get(info))
        // Calculator endpoints
        .route("/api/sum", post(sum))
        .route("/api/subtract", post(subtract))
        .route("/api/multiply", post(multiply))
        // Observability
        .route("/metrics", get(prometheus_metrics))
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(middleware::from_fn(track_latency))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
