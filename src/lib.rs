//! Arithmetic over an HTTP JSON API.
//!
//! Three operations are exposed, each taking two JSON numbers:
//!
//! ```text
//! POST /api/sum       {"a": 5,  "b": 3}  ->  {"operation": "sum",      "a": 5,  "b": 3, "result": 8}
//! POST /api/subtract  {"a": 10, "b": 4}  ->  {"operation": "subtract", "a": 10, "b": 4, "result": 6}
//! POST /api/multiply  {"a": 3,  "b": 7}  ->  {"operation": "multiply", "a": 3,  "b": 7, "result": 21}
//! ```
//!
//! A missing or non-numeric operand yields `400 {"error": "Both a and b must be numbers"}`.
//!
//! # Modules
//!
//! - [`arithmetic`]: Pure operations and the [`Operation`] tag
//! - [`api`]: HTTP routes, handlers, payloads and OpenAPI document
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metrics`]: Prometheus metrics
//! - [`server`]: Listener lifecycle
//! - [`utils`]: Utility functions

pub mod api;
pub mod arithmetic;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod utils;

pub use arithmetic::Operation;
pub use config::Config;
pub use error::{ApiError, AppError, Result};
