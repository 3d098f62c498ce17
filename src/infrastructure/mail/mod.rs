//! Outgoing mail delivery.
//!
//! Provides a [`Mailer`] trait with two implementations:
//! - [`SmtpMailer`] - SMTP delivery (Mailhog in development)
//! - [`LogMailer`] - Writes messages to the log instead of sending them

mod log_mailer;
mod service;
mod smtp_mailer;

pub use log_mailer::LogMailer;
pub use service::Mailer;
pub use smtp_mailer::SmtpMailer;

#[cfg(test)]
pub use service::MockMailer;
