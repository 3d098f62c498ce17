//! DTOs for diagnostic mail endpoints.

use serde::Serialize;

/// Outcome of a test mail send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailStatus {
    Success,
    Error,
}

/// Body returned by `/test-mail` and `/test-mail-multiple`.
///
/// Always served with `200 OK`; callers inspect `status` to detect failures.
#[derive(Debug, Serialize)]
pub struct MailOutcome {
    pub status: MailStatus,
    pub message: String,
}

impl MailOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: MailStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: MailStatus::Error,
            message: message.into(),
        }
    }
}
