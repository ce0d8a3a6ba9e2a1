#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Side navigation HTTP tests.
//!
//! These drive the real router with `tower::ServiceExt::oneshot`.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{BASE_URL, TestApp, body_json, body_string};
use sidenav_test_utils::{admin_user, assert, console_navigation, test_user};

#[tokio::test]
async fn health_check_reports_items() {
    let app = TestApp::new(&console_navigation());
    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["items"], 4);
}

#[tokio::test]
async fn admin_sees_console_link_only() {
    let app = TestApp::new(&console_navigation());
    let user = admin_user();

    let response = app.get(&format!("/sidenav?{}", user.query("2"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    assert::node_display(&html, "1", "none");
    assert::node_display(&html, "1-1", "none");
    assert::node_display(&html, "1-2", "none");
    assert::node_display(&html, "2", "block");
    assert::node_display(&html, "3", "none");
    assert::node_display(&html, "4", "none");
    assert::contains(&html, "nav-item nav-item--active");
    assert::contains(&html, "Sign Out");
    assert::contains(&html, "side-nav__brand");
}

#[tokio::test]
async fn scoped_user_sees_granted_entries() {
    let app = TestApp::new(&console_navigation());
    let user = test_user("petcare", "vet", &["doctor_read", "settings_view"]);

    let html = body_string(app.get(&format!("/sidenav?{}", user.query(""))).await).await;

    assert::node_display(&html, "1", "block");
    assert::node_display(&html, "1-1", "block");
    assert::node_display(&html, "1-2", "none");
    assert::node_display(&html, "2", "none");
    assert::node_display(&html, "3", "block");
    assert::contains(&html, "<b>NEW</b>");
}

#[tokio::test]
async fn guest_role_hides_settings_despite_scopes() {
    let app = TestApp::new(&console_navigation());
    let user = test_user("petcare", "guest", &["settings_view"]);

    let html = body_string(app.get(&format!("/sidenav?{}", user.query(""))).await).await;
    assert::node_display(&html, "3", "none");
}

#[tokio::test]
async fn json_view_reports_visibility() {
    let app = TestApp::new(&console_navigation());
    let user = test_user("petcare", "vet", &["booking_read"]);

    let response = app.get(&format!("/api/sidenav?{}", user.query("1-2"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = body_json(response).await;

    assert_eq!(view["active_key"], "1-2");
    assert_eq!(view["default_open_keys"], json!(["1"]));
    assert_eq!(view["entries"][0]["kind"], "submenu");
    assert_eq!(view["entries"][0]["visibility"], "display");
    assert_eq!(view["entries"][0]["children"][1]["visibility"], "display");
    assert_eq!(view["entries"][0]["children"][1]["active"], true);
    assert_eq!(view["entries"][0]["children"][1]["is_new"], true);
    assert_eq!(view["entries"][1]["visibility"], "hide");
    assert_eq!(
        view["entries"][1]["external_url"],
        format!("{BASE_URL}/o/petcare/console")
    );
}

#[tokio::test]
async fn missing_role_is_bad_request() {
    let app = TestApp::new(&console_navigation());
    let response = app.get("/api/sidenav?org_id=petcare").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn selecting_external_entry_opens_console() {
    let app = TestApp::new(&console_navigation());
    let user = admin_user();

    let response = app
        .post_json("/api/sidenav/select", &user.select_body("2"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["event_key"], "2");
    assert_eq!(body["active_key"], "2");
    assert_eq!(body["open_url"], format!("{BASE_URL}/o/petcare/console"));
    assert_eq!(body["open_target"], "_blank");
}

#[tokio::test]
async fn selecting_submenu_entry_has_no_link() {
    let app = TestApp::new(&console_navigation());
    let user = test_user("petcare", "vet", &["doctor_read"]);

    let body = body_json(
        app.post_json("/api/sidenav/select", &user.select_body("1-1"))
            .await,
    )
    .await;
    assert_eq!(body["active_key"], "1-1");
    assert::has_key(&body, "event_key");
    assert!(body.get("open_url").is_none());
}

#[tokio::test]
async fn selecting_hidden_or_unknown_entry_is_not_found() {
    let app = TestApp::new(&console_navigation());
    let user = test_user("petcare", "vet", &[]);

    for key in ["2", "4", "1-1", "missing"] {
        let response = app
            .post_json("/api/sidenav/select", &user.select_body(key))
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "key {key}");
    }
}

#[tokio::test]
async fn selecting_empty_key_is_bad_request() {
    let app = TestApp::new(&console_navigation());
    let response = app
        .post_json("/api/sidenav/select", &admin_user().select_body(""))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sign_out_requests_dialog() {
    let app = TestApp::new(&console_navigation());
    let response = app.post_json("/api/sidenav/sign-out", &json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["sign_out_modal_open"], true);
}
