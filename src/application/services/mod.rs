//! Application services.
//!
//! Each service depends on infrastructure traits only, so handlers can be
//! exercised without a live database or mail server.

mod health_service;
mod mail_service;

pub use health_service::HealthService;
pub use mail_service::MailService;
