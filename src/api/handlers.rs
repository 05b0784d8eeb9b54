//! HTTP API handlers.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, MatchedPath, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use tracing::debug;

use super::types::{CalculationResponse, ErrorResponse, InfoResponse, Operands};
use crate::arithmetic::Operation;
use crate::error::ApiError;
use crate::metrics;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Renders the Prometheus exposition for `/metrics`.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(metrics: PrometheusHandle) -> Self {
        Self { metrics }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(metrics::detached_handle())
    }
}

/// Service information - always returns 200.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = InfoResponse)
    ),
    tag = "service"
)]
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse::default())
}

/// Add `a` and `b`.
#[utoipa::path(
    post,
    path = "/api/sum",
    request_body = Operands,
    responses(
        (status = 200, description = "Sum of the operands", body = CalculationResponse),
        (status = 400, description = "An operand is missing or not a number", body = ErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn sum(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(Operation::Sum, body)
}

/// Subtract `b` from `a`.
#[utoipa::path(
    post,
    path = "/api/subtract",
    request_body = Operands,
    responses(
        (status = 200, description = "Difference of the operands", body = CalculationResponse),
        (status = 400, description = "An operand is missing or not a number", body = ErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn subtract(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(Operation::Subtract, body)
}

/// Multiply `a` by `b`.
#[utoipa::path(
    post,
    path = "/api/multiply",
    request_body = Operands,
    responses(
        (status = 200, description = "Product of the operands", body = CalculationResponse),
        (status = 400, description = "An operand is missing or not a number", body = ErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn multiply(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    calculate(Operation::Multiply, body)
}

/// Validate the body and run `operation` on it.
///
/// A request without a JSON content type counts as an empty body and fails
/// operand validation like any other body lacking `a` and `b`.
fn calculate(
    operation: Operation,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let body = match body {
        Ok(Json(value)) => value,
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
        Err(rejection) => {
            debug!(%operation, error = %rejection.body_text(), "Rejected request body");
            return Err(rejection.into());
        }
    };

    let operands = Operands::from_body(&body).inspect_err(|_| {
        debug!(%operation, "Invalid operands");
        metrics::inc_validation_failures(operation);
    })?;

    let response = CalculationResponse::compute(operation, operands);
    debug!(%operation, a = operands.a, b = operands.b, result = %response.result, "Calculated");
    metrics::inc_calculations(operation);

    Ok(Json(response))
}

/// Prometheus exposition.
pub async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render()
}

/// Middleware recording request latency per matched route.
pub async fn track_latency(matched: Option<MatchedPath>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = matched.map_or_else(|| "unmatched".to_string(), |path| path.as_str().to_string());

    let response = next.run(request).await;
    metrics::record_http_latency(start, &endpoint);

    response
}
