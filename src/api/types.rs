//! Request and response payloads.

use serde::Serialize;
use serde_json::{Number, Value};
use utoipa::ToSchema;

use crate::arithmetic::Operation;
use crate::error::ApiError;

/// Integral doubles at or above this magnitude are written in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Service name reported by the root route.
pub const SERVICE_NAME: &str = "CI/CD Simulation API";

/// Operands of a computation request.
///
/// Built from the raw JSON by [`Operands::from_body`] rather than through
/// serde, so that strings such as `"5"` are never coerced.
#[derive(Debug, Clone, Copy, PartialEq, ToSchema)]
#[schema(example = json!({"a": 5, "b": 3}))]
pub struct Operands {
    /// Left operand.
    pub a: f64,
    /// Right operand.
    pub b: f64,
}

impl Operands {
    /// Extract both operands from a decoded body.
    ///
    /// Each of `a` and `b` must be a JSON number. Anything else, including
    /// a body that is not an object, is rejected. Literals beyond the range
    /// of `f64` are accepted as infinities.
    pub fn from_body(body: &Value) -> Result<Self, ApiError> {
        let a = number_field(body, "a").ok_or(ApiError::InvalidOperands)?;
        let b = number_field(body, "b").ok_or(ApiError::InvalidOperands)?;
        Ok(Self { a, b })
    }
}

fn number_field(body: &Value, key: &str) -> Option<f64> {
    match body.get(key)? {
        Value::Number(n) => n.as_str().parse().ok(),
        _ => None,
    }
}

/// Render an `f64` the way a JavaScript JSON encoder does.
///
/// Integral values below 1e21 are written as plain integers; non-finite
/// values become `null`.
pub fn json_number(value: f64) -> Value {
    if !value.is_finite() {
        return Value::Null;
    }
    if value.fract() == 0.0 && value.abs() < EXPONENT_THRESHOLD {
        if let Ok(n) = (value as i128).to_string().parse::<Number>() {
            return Value::Number(n);
        }
    }
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// Successful computation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({"operation": "sum", "a": 5, "b": 3, "result": 8}))]
pub struct CalculationResponse {
    /// Which operation ran.
    pub operation: Operation,
    /// Echoed left operand.
    #[schema(value_type = f64)]
    pub a: Value,
    /// Echoed right operand.
    #[schema(value_type = f64)]
    pub b: Value,
    /// Computed value, `null` when it is not finite.
    #[schema(value_type = Option<f64>)]
    pub result: Value,
}

impl CalculationResponse {
    /// Run `operation` on `operands` and build the response.
    pub fn compute(operation: Operation, operands: Operands) -> Self {
        let result = operation.apply(operands.a, operands.b);
        Self {
            operation,
            a: json_number(operands.a),
            b: json_number(operands.b),
            result: json_number(result),
        }
    }
}

/// Error payload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({"error": "Both a and b must be numbers"}))]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
}

/// Root route payload.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({
    "message": "CI/CD Simulation API",
    "version": "1.0.0",
    "status": "running"
}))]
pub struct InfoResponse {
    /// Service name.
    pub message: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Always "running".
    pub status: &'static str,
}

impl Default for InfoResponse {
    fn default() -> Self {
        Self {
            message: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            status: "running",
        }
    }
}
