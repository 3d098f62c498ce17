//! Database liveness probing.
//!
//! Provides a [`DatabaseProbe`] trait with a PostgreSQL implementation,
//! [`PgDatabaseProbe`].

mod pg_probe;
mod service;

pub use pg_probe::{PgDatabaseProbe, connect_lazy};
pub use service::DatabaseProbe;

#[cfg(test)]
pub use service::MockDatabaseProbe;
