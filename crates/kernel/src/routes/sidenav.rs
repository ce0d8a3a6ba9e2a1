//! Side navigation endpoints.
//!
//! - `GET /sidenav` renders the navigation as HTML
//! - `GET /api/sidenav` returns the projected view as JSON
//! - `POST /api/sidenav/select` selects an entry
//! - `POST /api/sidenav/sign-out` requests the sign-out dialog
//!
//! The server keeps no per-user state: the caller sends role, scope, and
//! active key with every request and keeps whatever comes back.

use axum::extract::{Query, State};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::nav::{ConsoleState, SelectionOutcome, SideNavProps, SideNavView, request_sign_out};
use crate::state::AppState;

use super::helpers::render_sidenav_page;

/// Selection request body.
#[derive(Debug, Deserialize)]
struct SelectRequest {
    #[serde(flatten)]
    props: SideNavProps,
    event_key: String,
}

/// Selection result plus the caller's updated active key.
#[derive(Debug, Serialize)]
struct SelectResponse {
    #[serde(flatten)]
    outcome: SelectionOutcome,
    active_key: String,
}

/// Render the side navigation.
async fn sidenav_page(
    State(state): State<AppState>,
    Query(props): Query<SideNavProps>,
) -> Response {
    let view = state.project(&props);
    render_sidenav_page(&state, &view)
}

/// Projected view as JSON.
async fn sidenav_json(
    State(state): State<AppState>,
    Query(props): Query<SideNavProps>,
) -> Json<SideNavView> {
    Json(state.project(&props))
}

/// Select an entry.
async fn select(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> AppResult<Json<SelectResponse>> {
    if request.event_key.is_empty() {
        return Err(AppError::BadRequest("event_key is required".to_string()));
    }

    let view = state.project(&request.props);
    let mut console = ConsoleState::new(request.props.active_key.clone());

    let outcome = view
        .select(&request.event_key, |key| console.on_select(key))
        .ok_or(AppError::NotFound)?;

    info!(
        event_key = %outcome.event_key,
        role = %request.props.role,
        external = outcome.open_url.is_some(),
        "navigation entry selected"
    );

    Ok(Json(SelectResponse {
        outcome,
        active_key: console.active_key,
    }))
}

/// Request the sign-out confirmation dialog.
async fn sign_out() -> Json<ConsoleState> {
    let mut console = ConsoleState::default();
    request_sign_out(|open| console.set_sign_out_modal_open(open));
    debug!("sign-out requested");
    Json(console)
}

/// Create the side navigation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sidenav", get(sidenav_page))
        .route("/api/sidenav", get(sidenav_json))
        .route("/api/sidenav/select", post(select))
        .route("/api/sidenav/sign-out", post(sign_out))
}
