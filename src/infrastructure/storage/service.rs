//! Storage probe trait.

use async_trait::async_trait;

/// Reports whether the application's storage directory accepts writes.
///
/// Unlike [`crate::infrastructure::database::DatabaseProbe`] this never
/// fails: any I/O problem is reported as "not writable".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageProbe: Send + Sync {
    async fn is_writable(&self) -> bool;
}
