//! Handlers for diagnostic mail endpoints.
//!
//! Both endpoints answer `200 OK` even when delivery fails; the outcome is
//! carried in the JSON `status` field.

use axum::{Json, extract::State};

use crate::api::dto::mail::MailOutcome;
use crate::state::AppState;

const MAILHOG_HINT: &str = "Check Mailhog at http://localhost:8025";

/// Sends a test email to a single fixed recipient.
///
/// # Endpoint
///
/// `GET /test-mail`
///
/// # Response
///
/// ```json
/// { "status": "success", "message": "Email sent successfully! Check Mailhog at http://localhost:8025" }
/// ```
pub async fn test_mail_handler(State(state): State<AppState>) -> Json<MailOutcome> {
    let outcome = match state.mail_service.send_test_mail().await {
        Ok(()) => MailOutcome::success(format!("Email sent successfully! {}", MAILHOG_HINT)),
        Err(e) => MailOutcome::error(format!("Failed to send email: {}", e)),
    };

    Json(outcome)
}

/// Sends a test email to two `to`, one `cc` and one `bcc` recipient.
///
/// # Endpoint
///
/// `GET /test-mail-multiple`
pub async fn test_mail_multiple_handler(State(state): State<AppState>) -> Json<MailOutcome> {
    let outcome = match state.mail_service.send_multiple_recipient_mail().await {
        Ok(()) => MailOutcome::success(format!(
            "Multi-recipient email sent successfully! {}",
            MAILHOG_HINT
        )),
        Err(e) => MailOutcome::error(format!("Failed to send multi-recipient email: {}", e)),
    };

    Json(outcome)
}
