//! Error types for infrastructure checks and mail delivery.
//!
//! Both kinds are handled at the handler boundary and never surface as
//! framework error pages:
//!
//! - [`CheckError`] becomes `503 Service Unavailable` on `/health`
//! - [`MailError`] becomes `200 OK` with `"status": "error"` on the mail routes

/// A liveness probe failed.
///
/// The display string is the underlying failure message, unprefixed, since it
/// is returned verbatim in the `/health` body.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{0}")]
    Database(String),
}

impl From<sqlx::Error> for CheckError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Sending a message failed.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Address in mailbox given [{address}] does not comply with RFC 2822")]
    InvalidAddress { address: String },

    #[error("{0}")]
    Build(String),

    #[error("{0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_error_message_is_verbatim() {
        let err = CheckError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_invalid_address_message() {
        let err = MailError::InvalidAddress {
            address: "not-an-address".to_string(),
        };
        assert!(err.to_string().contains("not-an-address"));
    }
}
