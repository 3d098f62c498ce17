//! Welcome page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Template for the welcome page.
///
/// Renders `templates/welcome.html` with the application name, version and
/// links to the diagnostic endpoints.
#[derive(Template, WebTemplate)]
#[template(path = "welcome.html")]
pub struct WelcomeTemplate {
    pub app_name: String,
    pub version: String,
}

/// Renders the welcome page.
///
/// # Endpoint
///
/// `GET /`
pub async fn welcome_handler(State(state): State<AppState>) -> impl IntoResponse {
    WelcomeTemplate {
        app_name: state.app.name.clone(),
        version: state.app.version.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_renders_app_name() {
        let page = WelcomeTemplate {
            app_name: "Laravel".to_string(),
            version: "1.0.0".to_string(),
        }
        .render()
        .unwrap();

        assert!(page.contains("Welcome to Laravel"));
        assert!(page.contains("Version 1.0.0"));
        assert!(page.contains("<code>/health</code></a>: infrastructure health"));
        assert!(!page.contains("&mdash;"));
    }
}
