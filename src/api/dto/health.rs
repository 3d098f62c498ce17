//! DTOs for health check endpoints.

use serde::Serialize;

use crate::domain::{HealthSnapshot, ServiceStatus};

/// `GET /health` body when every probe ran.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub timestamp: String,
    pub services: HealthServices,
    pub version: String,
    pub environment: String,
}

/// Status of each dependency.
#[derive(Debug, Serialize)]
pub struct HealthServices {
    pub database: ServiceStatus,
    pub storage: ServiceStatus,
    pub cache: ServiceStatus,
}

impl HealthReport {
    /// Builds the report for a completed check.
    ///
    /// The top-level status is `healthy` whenever the checks completed, even
    /// if an individual service (storage) is unhealthy.
    pub fn from_snapshot(snapshot: HealthSnapshot, timestamp: String) -> Self {
        Self {
            status: ServiceStatus::Healthy,
            timestamp,
            services: HealthServices {
                database: snapshot.database,
                storage: snapshot.storage,
                cache: snapshot.cache,
            },
            version: snapshot.version,
            environment: snapshot.environment,
        }
    }
}

/// `GET /health` body when a probe failed.
#[derive(Debug, Serialize)]
pub struct HealthFailure {
    pub status: ServiceStatus,
    pub timestamp: String,
    pub error: String,
}

/// `GET /api/health` body.
#[derive(Debug, Serialize)]
pub struct ApiHealthReport {
    pub status: ServiceStatus,
    pub api_version: &'static str,
    pub timestamp: String,
}
