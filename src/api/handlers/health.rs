//! Handlers for health check endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{ApiHealthReport, HealthFailure, HealthReport};
use crate::domain::ServiceStatus;
use crate::state::AppState;
use crate::utils::time::now_iso;

/// Returns infrastructure health.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Checks completed (storage may still be reported unhealthy)
/// - **503 Service Unavailable**: Database unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2026-10-16T09:30:00.123456Z",
///   "services": {
///     "database": "healthy",
///     "storage": "healthy",
///     "cache": "healthy"
///   },
///   "version": "1.0.0",
///   "environment": "production"
/// }
/// ```
///
/// On failure:
///
/// ```json
/// {
///   "status": "unhealthy",
///   "timestamp": "2026-10-16T09:30:00.123456Z",
///   "error": "pool timed out while waiting for an open connection"
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthReport>, (StatusCode, Json<HealthFailure>)> {
    match state.health_service.check().await {
        Ok(snapshot) => Ok(Json(HealthReport::from_snapshot(snapshot, now_iso()))),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthFailure {
                status: ServiceStatus::Unhealthy,
                timestamp: now_iso(),
                error: e.to_string(),
            }),
        )),
    }
}

/// Returns a fixed healthy payload for the API.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// { "status": "healthy", "api_version": "v1", "timestamp": "2026-10-16T09:30:00.123456Z" }
/// ```
pub async fn api_health_handler() -> Json<ApiHealthReport> {
    Json(ApiHealthReport {
        status: ServiceStatus::Healthy,
        api_version: "v1",
        timestamp: now_iso(),
    })
}
