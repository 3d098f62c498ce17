//! Core types shared by the application and API layers.
//!
//! - [`app_info`] - Application identity reported by health checks and the welcome page
//! - [`health`] - Per-service health status
//! - [`mail`] - Outgoing plain-text mail messages

pub mod app_info;
pub mod health;
pub mod mail;

pub use app_info::AppInfo;
pub use health::{HealthSnapshot, ServiceStatus};
pub use mail::{MailMessage, Mailbox};
