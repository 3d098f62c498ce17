//! PostgreSQL implementation of the database probe.

use async_trait::async_trait;
use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::{Connection, PgPool};
use std::sync::Arc;
use std::time::Duration;

use super::service::DatabaseProbe;
use crate::config::Config;
use crate::error::CheckError;

/// Builds a connection pool without opening any connection.
///
/// Connections are established on first use, so the server starts even when
/// the database is down and `/health` reports the outage.
///
/// # Errors
///
/// Returns an error only if `database_url` cannot be parsed.
pub fn connect_lazy(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_lazy(&config.database_url)
}

/// Probes PostgreSQL by acquiring a pooled connection and running `SELECT 1`.
///
/// When the pool gives up with [`sqlx::Error::PoolTimedOut`], a single direct
/// connection is attempted so the reported error names the real cause
/// (refused connection, bad credentials, unknown host) instead of the timeout.
pub struct PgDatabaseProbe {
    pool: Arc<PgPool>,
}

impl PgDatabaseProbe {
    /// Creates a new probe over a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects outside the pool to recover the underlying connect error.
    async fn diagnose_timeout(&self) -> CheckError {
        let options = self.pool.connect_options();
        let timeout = self.pool.options().get_acquire_timeout();

        match tokio::time::timeout(timeout, PgConnection::connect_with(&*options)).await {
            Ok(Err(e)) => e.into(),
            Ok(Ok(conn)) => {
                // Reachable again; report the timeout that was actually observed.
                let _ = conn.close().await;
                sqlx::Error::PoolTimedOut.into()
            }
            Err(_) => sqlx::Error::PoolTimedOut.into(),
        }
    }
}

#[async_trait]
impl DatabaseProbe for PgDatabaseProbe {
    async fn ping(&self) -> Result<(), CheckError> {
        let mut conn = match self.pool.acquire().await {
            Ok(conn) => conn,
            Err(sqlx::Error::PoolTimedOut) => return Err(self.diagnose_timeout().await),
            Err(e) => return Err(e.into()),
        };

        sqlx::query("SELECT 1").execute(&mut *conn).await?;

        Ok(())
    }
}
