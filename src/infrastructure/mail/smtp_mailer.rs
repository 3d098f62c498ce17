//! SMTP mailer built on lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox as LettreMailbox, MessageBuilder};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, info};

use super::service::Mailer;
use crate::config::Config;
use crate::domain::{MailMessage, Mailbox};
use crate::error::MailError;

/// Delivers mail over plain SMTP.
///
/// Intended for Mailhog-style capture servers in development, so the
/// connection is unencrypted. Messages without an explicit sender use the
/// configured default `from` mailbox.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    default_from: Mailbox,
}

impl SmtpMailer {
    /// Builds the transport from mail configuration. No connection is opened
    /// until the first message is sent.
    pub fn from_config(config: &Config) -> Self {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.mail_host)
                .port(config.mail_port)
                .timeout(Some(Duration::from_secs(config.mail_timeout)));

        if let (Some(user), Some(password)) = (&config.mail_username, &config.mail_password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        Self {
            transport: builder.build(),
            default_from: Mailbox::named(&config.mail_from_address, &config.mail_from_name),
        }
    }

    /// Converts a message into a lettre [`Message`], applying the default sender.
    fn build_message(&self, message: &MailMessage) -> Result<Message, MailError> {
        let from = message.from.as_ref().unwrap_or(&self.default_from);

        let mut builder = Message::builder()
            .from(to_mailbox(from)?)
            .subject(message.subject.as_str());

        builder = add_recipients(builder, &message.to, MessageBuilder::to)?;
        builder = add_recipients(builder, &message.cc, MessageBuilder::cc)?;
        builder = add_recipients(builder, &message.bcc, MessageBuilder::bcc)?;

        builder
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: MailMessage) -> Result<(), MailError> {
        let email = self.build_message(&message)?;

        debug!(
            recipients = message.recipient_count(),
            subject = %message.subject,
            "Sending mail via SMTP"
        );

        let response = self
            .transport
            .send(email)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        info!(
            code = %response.code(),
            recipients = message.recipient_count(),
            "Mail accepted by SMTP server"
        );

        Ok(())
    }
}

fn parse_address(address: &str) -> Result<Address, MailError> {
    address
        .parse::<Address>()
        .map_err(|_| MailError::InvalidAddress {
            address: address.to_string(),
        })
}

fn to_mailbox(mailbox: &Mailbox) -> Result<LettreMailbox, MailError> {
    Ok(LettreMailbox::new(
        mailbox.name.clone(),
        parse_address(&mailbox.address)?,
    ))
}

fn add_recipients(
    mut builder: MessageBuilder,
    addresses: &[String],
    add: fn(MessageBuilder, LettreMailbox) -> MessageBuilder,
) -> Result<MessageBuilder, MailError> {
    for address in addresses {
        builder = add(builder, LettreMailbox::new(None, parse_address(address)?));
    }
    Ok(builder)
}
