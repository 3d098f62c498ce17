//! Log-only mailer for environments without an SMTP server.

use super::service::Mailer;
use crate::domain::MailMessage;
use crate::error::MailError;
use async_trait::async_trait;
use tracing::info;

/// A mailer that logs each message instead of delivering it.
///
/// Selected with `MAIL_MAILER=log`. Always succeeds.
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: MailMessage) -> Result<(), MailError> {
        info!(
            from = ?message.from.as_ref().map(|m| m.address.as_str()),
            to = ?message.to,
            cc = ?message.cc,
            bcc = ?message.bcc,
            subject = %message.subject,
            body = %message.body,
            "Mail message (log mailer)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_mailer_always_succeeds() {
        let message = MailMessage::plain("hello")
            .to(["someone@example.com"])
            .subject("Test");

        assert!(LogMailer::new().send(message).await.is_ok());
    }
}
