//! Health status types.

use serde::Serialize;

/// Status of a single dependency, or of the service as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Unhealthy,
}

impl From<bool> for ServiceStatus {
    fn from(ok: bool) -> Self {
        if ok { Self::Healthy } else { Self::Unhealthy }
    }
}

/// Result of a successful round of liveness checks.
///
/// Produced only when the database probe succeeded, so `database` is always
/// [`ServiceStatus::Healthy`]. Storage may still be unhealthy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthSnapshot {
    pub database: ServiceStatus,
    pub storage: ServiceStatus,
    /// Not probed; always healthy.
    pub cache: ServiceStatus,
    pub version: String,
    pub environment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_bool() {
        assert_eq!(ServiceStatus::from(true), ServiceStatus::Healthy);
        assert_eq!(ServiceStatus::from(false), ServiceStatus::Unhealthy);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ServiceStatus::Unhealthy).unwrap(),
            serde_json::json!("unhealthy")
        );
    }
}
