//! Diagnostic test mail.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{MailMessage, Mailbox};
use crate::error::MailError;
use crate::infrastructure::mail::Mailer;

/// Sends the fixed diagnostic messages behind the `/test-mail*` routes.
pub struct MailService {
    mailer: Arc<dyn Mailer>,
}

impl MailService {
    /// Creates a new mail service.
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Sends a plain-text message to a single fixed recipient using the
    /// mailer's default sender.
    ///
    /// # Errors
    ///
    /// Propagates the [`MailError`] from the mailer.
    pub async fn send_test_mail(&self) -> Result<(), MailError> {
        self.deliver(test_message()).await
    }

    /// Sends a plain-text message to two `to`, one `cc` and one `bcc`
    /// recipient from an explicit sender.
    ///
    /// # Errors
    ///
    /// Propagates the [`MailError`] from the mailer.
    pub async fn send_multiple_recipient_mail(&self) -> Result<(), MailError> {
        self.deliver(multiple_recipient_message()).await
    }

    async fn deliver(&self, message: MailMessage) -> Result<(), MailError> {
        let subject = message.subject.clone();
        let recipients = message.recipient_count();

        match self.mailer.send(message).await {
            Ok(()) => {
                info!(subject = %subject, recipients, "Test mail sent");
                Ok(())
            }
            Err(e) => {
                warn!(subject = %subject, error = %e, "Test mail failed");
                Err(e)
            }
        }
    }
}

fn test_message() -> MailMessage {
    MailMessage::plain("Hello from Laravel 12! This is a test email from Mailhog.")
        .to(["test@example.com"])
        .subject("Test Email from Laravel 12")
}

fn multiple_recipient_message() -> MailMessage {
    MailMessage::plain("This is a test email to multiple recipients from Laravel 12!")
        .to(["user1@example.com", "user2@example.com"])
        .cc("cc@example.com")
        .bcc("bcc@example.com")
        .subject("Multiple Recipients Test from Laravel 12")
        .from(Mailbox::named("noreply@laravel.test", "Laravel 12 App"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mail::MockMailer;

    #[tokio::test]
    async fn test_send_test_mail_single_recipient() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|m| {
                m.to == vec!["test@example.com"]
                    && m.cc.is_empty()
                    && m.bcc.is_empty()
                    && m.from.is_none()
                    && m.subject == "Test Email from Laravel 12"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = MailService::new(Arc::new(mailer));

        assert!(service.send_test_mail().await.is_ok());
    }

    #[tokio::test]
    async fn test_send_multiple_recipient_mail_addressing() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|m| {
                m.to == vec!["user1@example.com", "user2@example.com"]
                    && m.cc == vec!["cc@example.com"]
                    && m.bcc == vec!["bcc@example.com"]
                    && m.from == Some(Mailbox::named("noreply@laravel.test", "Laravel 12 App"))
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = MailService::new(Arc::new(mailer));

        assert!(service.send_multiple_recipient_mail().await.is_ok());
    }

    #[tokio::test]
    async fn test_send_failure_propagates() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .returning(|_| Err(MailError::Transport("Connection refused".to_string())));

        let service = MailService::new(Arc::new(mailer));

        let err = service.send_test_mail().await.unwrap_err();
        assert_eq!(err.to_string(), "Connection refused");
    }
}
