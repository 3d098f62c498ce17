//! Outgoing mail message.

/// A sender or recipient with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub address: String,
    pub name: Option<String>,
}

impl Mailbox {
    /// Mailbox with a display name, e.g. `Laravel 12 App <noreply@laravel.test>`.
    pub fn named(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: Some(name.into()),
        }
    }
}

/// Plain-text message handed to a [`crate::infrastructure::mail::Mailer`].
///
/// When `from` is `None` the mailer's configured default sender is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub from: Option<Mailbox>,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl MailMessage {
    /// Creates a message with a body and no recipients.
    pub fn plain(body: impl Into<String>) -> Self {
        Self {
            from: None,
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: String::new(),
            body: body.into(),
        }
    }

    pub fn to<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to.extend(addresses.into_iter().map(Into::into));
        self
    }

    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.cc.push(address.into());
        self
    }

    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(address.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn from(mut self, sender: Mailbox) -> Self {
        self.from = Some(sender);
        self
    }

    /// Total number of envelope recipients (to + cc + bcc).
    pub fn recipient_count(&self) -> usize {
        self.to.len() + self.cc.len() + self.bcc.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_recipients() {
        let message = MailMessage::plain("body")
            .to(["a@example.com", "b@example.com"])
            .cc("c@example.com")
            .bcc("d@example.com")
            .subject("Hi")
            .from(Mailbox::named("noreply@example.com", "Sender"));

        assert_eq!(message.to, vec!["a@example.com", "b@example.com"]);
        assert_eq!(message.cc, vec!["c@example.com"]);
        assert_eq!(message.bcc, vec!["d@example.com"]);
        assert_eq!(message.recipient_count(), 4);
        assert_eq!(message.subject, "Hi");
        assert_eq!(
            message.from.unwrap().name.as_deref(),
            Some("Sender")
        );
    }
}
