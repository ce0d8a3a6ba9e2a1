#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! This module builds the REAL kernel router around an in-memory navigation
//! tree, so tests exercise the same projection, templates, and handlers the
//! server runs.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use sidenav_kernel::config::DEFAULT_LOGO_HTML;
use sidenav_kernel::nav::NavigationTree;
use sidenav_kernel::{AppState, Config, routes};

/// Organisation base URL used by every test config.
pub const BASE_URL: &str = "https://idp.example.com";

/// Config pointing at no file; tests pass the tree directly.
pub fn test_config() -> Config {
    Config {
        port: 0,
        base_organization_url: BASE_URL.to_string(),
        nav_data_path: PathBuf::from("unused.json"),
        show_roles: vec!["admin".to_string()],
        hide_roles: vec!["guest".to_string()],
        logo_html: DEFAULT_LOGO_HTML.to_string(),
        cors_allowed_origins: vec!["*".to_string()],
    }
}

/// A router over the given navigation document.
pub struct TestApp {
    router: Router,
    state: AppState,
}

impl TestApp {
    pub fn new(navigation: &Value) -> Self {
        let config = test_config();
        let tree = NavigationTree::from_json(&navigation.to_string())
            .expect("Failed to parse test navigation");
        let state = AppState::with_tree(&config, tree).expect("Failed to build state");
        let router = routes::build_router(state.clone(), &config.cors_allowed_origins);
        Self { router, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Response {
        self.request(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

/// Collect a response body as a string.
pub async fn body_string(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).expect("Body is not JSON")
}
