//! Infrastructure liveness checks.

use std::sync::Arc;
use tracing::{error, warn};

use crate::domain::{AppInfo, HealthSnapshot, ServiceStatus};
use crate::error::CheckError;
use crate::infrastructure::database::DatabaseProbe;
use crate::infrastructure::storage::StorageProbe;

/// Runs the liveness checks behind `GET /health`.
pub struct HealthService {
    database: Arc<dyn DatabaseProbe>,
    storage: Arc<dyn StorageProbe>,
    app: AppInfo,
}

impl HealthService {
    /// Creates a new health service.
    pub fn new(
        database: Arc<dyn DatabaseProbe>,
        storage: Arc<dyn StorageProbe>,
        app: AppInfo,
    ) -> Self {
        Self {
            database,
            storage,
            app,
        }
    }

    /// Checks the database, then storage.
    ///
    /// # Behavior
    ///
    /// 1. Database: a connection must be obtainable, otherwise the whole
    ///    check fails
    /// 2. Storage: writability is reported as healthy/unhealthy, never fails
    /// 3. Cache: not probed, always healthy
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Database`] if the database is unreachable.
    pub async fn check(&self) -> Result<HealthSnapshot, CheckError> {
        if let Err(e) = self.database.ping().await {
            error!("Health check: database unreachable: {}", e);
            return Err(e);
        }

        let storage = ServiceStatus::from(self.storage.is_writable().await);
        if storage == ServiceStatus::Unhealthy {
            warn!("Health check: storage is not writable");
        }

        Ok(HealthSnapshot {
            database: ServiceStatus::Healthy,
            storage,
            cache: ServiceStatus::Healthy,
            version: self.app.version.clone(),
            environment: self.app.environment.clone(),
        })
    }

    pub fn app(&self) -> &AppInfo {
        &self.app
    }
}
