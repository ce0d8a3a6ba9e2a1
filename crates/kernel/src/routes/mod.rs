//! HTTP route handlers.

pub mod health;
pub mod helpers;
pub mod sidenav;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// Build the application router with its middleware layers.
pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(sidenav::router())
        .merge(health::router())
        // TraceLayer → CORS → routes
        .layer(build_cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if allowed_origins.len() == 1 && allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true)
    }
}
