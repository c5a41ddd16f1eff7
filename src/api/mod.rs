//! HTTP surface for the lookup service

pub mod handlers;
pub mod models;
pub mod page;
pub mod routes;

pub use handlers::{AppState, NO_RESULT_MESSAGE};
pub use models::{ApiError, AskOutcome, AskRequest, AskResponse, HealthResponse};
pub use routes::build_router;
