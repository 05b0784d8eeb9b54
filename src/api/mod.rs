//! HTTP API: service information and calculator endpoints.

pub mod docs;
pub mod handlers;
pub mod routes;
pub mod types;

pub use docs::ApiDoc;
pub use handlers::AppState;
pub use routes::create_router;
