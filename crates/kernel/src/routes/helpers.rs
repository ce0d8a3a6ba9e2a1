//! Shared route helpers for page rendering.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::nav::SideNavView;
use crate::state::AppState;

/// Render the side navigation, or an error page if the template fails.
pub fn render_sidenav_page(state: &AppState, view: &SideNavView) -> Response {
    match state.theme().render_sidenav(view, state.logo_html()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render side navigation");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!(
                    r#"<!DOCTYPE html>
<html><head><title>Error</title></head>
<body><h1>Template Error</h1><pre>{}</pre></body></html>"#,
                    html_escape(&format!("{e:#}"))
                )),
            )
                .into_response()
        }
    }
}

/// HTML-escape a string for safe output.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
