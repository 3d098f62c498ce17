//! Infrastructure adapters for external collaborators.
//!
//! - [`database`] - PostgreSQL connectivity probe
//! - [`storage`] - Storage directory writability probe
//! - [`mail`] - SMTP and log mail transports

pub mod database;
pub mod mail;
pub mod storage;
