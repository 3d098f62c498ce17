//! API route configuration.

use crate::api::handlers::api_health_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes mounted under `/api`. No authentication.
///
/// # Endpoints
///
/// - `GET /health` - Fixed API health payload
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(api_health_handler))
}
