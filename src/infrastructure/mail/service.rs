//! Mailer trait.

use crate::domain::MailMessage;
use crate::error::MailError;
use async_trait::async_trait;

/// Sends plain-text mail messages.
///
/// Calls are made inline from request handlers; there is no queue and no
/// retry. Timeouts are whatever the underlying transport enforces.
///
/// # Implementations
///
/// - [`crate::infrastructure::mail::SmtpMailer`] - SMTP transport
/// - [`crate::infrastructure::mail::LogMailer`] - log-only transport
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers a message to all of its to/cc/bcc recipients.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::InvalidAddress`] for malformed addresses,
    /// [`MailError::Build`] if the message cannot be assembled and
    /// [`MailError::Transport`] if the server rejects or is unreachable.
    async fn send(&self, message: MailMessage) -> Result<(), MailError>;
}
