//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod mail;

pub use health::{api_health_handler, health_handler};
pub use mail::{test_mail_handler, test_mail_multiple_handler};
