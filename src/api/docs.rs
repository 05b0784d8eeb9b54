//! OpenAPI document for the HTTP API.

use utoipa::OpenApi;

use super::handlers;
use crate::error::Result;
use super::types::{CalculationResponse, ErrorResponse, InfoResponse, Operands};
use crate::arithmetic::Operation;

/// Path of the generated OpenAPI JSON.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Path of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/docs";

/// OpenAPI description of every public route.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CI/CD Simulation API",
        description = "Addition, subtraction and multiplication over JSON"
    ),
    paths(
        handlers::info,
        handlers::sum,
        handlers::subtract,
        handlers::multiply
    ),
    components(schemas(
        Operands,
        Operation,
        CalculationResponse,
        ErrorResponse,
        InfoResponse
    )),
    tags(
        (name = "service", description = "Service information"),
        (name = "calculator", description = "Arithmetic on two numbers")
    )
)]
pub struct ApiDoc;

/// The OpenAPI document rendered as pretty JSON.
pub fn openapi_json() -> Result<String> {
    Ok(ApiDoc::openapi().to_pretty_json()?)
}
