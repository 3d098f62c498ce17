//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET /`                   - Welcome page
//! - `GET /health`             - Health check: database, storage, cache
//! - `GET /api/health`         - API health
//! - `GET /test-mail`          - Single-recipient test email
//! - `GET /test-mail-multiple` - Multi-recipient test email
//!
//! No route requires authentication.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, test_mail_handler, test_mail_multiple_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .route("/test-mail", get(test_mail_handler))
        .route("/test-mail-multiple", get(test_mail_multiple_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
