//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{HealthService, MailService};
use crate::domain::AppInfo;

/// Process-wide service handles, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub health_service: Arc<HealthService>,
    pub mail_service: Arc<MailService>,
    pub app: Arc<AppInfo>,
}

impl AppState {
    pub fn new(health_service: Arc<HealthService>, mail_service: Arc<MailService>) -> Self {
        let app = Arc::new(health_service.app().clone());
        Self {
            health_service,
            mail_service,
            app,
        }
    }
}
