//! HTTP server initialization and runtime setup.
//!
//! Builds the collaborators from configuration, wires them into
//! [`AppState`] and runs the Axum server.

use crate::application::services::{HealthService, MailService};
use crate::config::{Config, MailTransport};
use crate::infrastructure::database::{PgDatabaseProbe, connect_lazy};
use crate::infrastructure::mail::{LogMailer, Mailer, SmtpMailer};
use crate::infrastructure::storage::FsStorageProbe;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::routing::IntoMakeService;
use axum::{Router, ServiceExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::normalize_path::NormalizePath;

/// Builds application state from configuration.
///
/// The database pool is lazy and the SMTP transport connects per message, so
/// this succeeds while the database or mail server is down.
///
/// # Errors
///
/// Returns an error if the database URL cannot be parsed.
pub fn build_state(config: &Config) -> Result<AppState> {
    let pool = connect_lazy(config).context("Invalid database configuration")?;
    let database = Arc::new(PgDatabaseProbe::new(Arc::new(pool)));
    let storage = Arc::new(FsStorageProbe::new(&config.storage_path));

    let mailer: Arc<dyn Mailer> = match config.mail_transport {
        MailTransport::Smtp => {
            tracing::info!("Mail transport: SMTP");
            Arc::new(SmtpMailer::from_config(config))
        }
        MailTransport::Log => {
            tracing::info!("Mail transport: log");
            Arc::new(LogMailer::new())
        }
    };

    let health_service = Arc::new(HealthService::new(database, storage, config.app_info()));
    let mail_service = Arc::new(MailService::new(mailer));

    Ok(AppState::new(health_service, mail_service))
}

/// Wraps the application router into the service handed to `axum::serve`.
pub fn make_service(state: AppState) -> IntoMakeService<NormalizePath<Router>> {
    ServiceExt::<Request>::into_make_service(app_router(state))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The database URL is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, make_service(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
