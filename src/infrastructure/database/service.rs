//! Database probe trait.

use crate::error::CheckError;
use async_trait::async_trait;

/// Checks that a live database connection can be obtained.
///
/// # Implementations
///
/// - [`crate::infrastructure::database::PgDatabaseProbe`] - PostgreSQL pool probe
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Obtains a connection and verifies it answers.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Database`] when no connection can be acquired
    /// or the connection does not respond.
    async fn ping(&self) -> Result<(), CheckError>;
}
