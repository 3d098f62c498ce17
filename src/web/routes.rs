//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::welcome_handler;
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - Welcome page
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(welcome_handler))
}
