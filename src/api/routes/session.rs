//! Session control endpoints.
//!
//! Provides HTTP endpoints for:
//! - Starting the recording session (POST /session/start)
//! - Stopping the recording session (POST /session/stop)
//! - Getting session status (GET /session/status)

use crate::api::error::ApiResult;
use crate::session::{SessionController, SessionPhase};
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Shared state for session routes.
#[derive(Clone)]
pub struct SessionApiState {
    pub controller: Arc<SessionController>,
}

/// Creates the session router with all session-related endpoints.
pub fn router(state: SessionApiState) -> Router {
    Router::new()
        .route("/session/start", post(start_session))
        .route("/session/stop", post(stop_session))
        .route("/session/status", get(session_status))
        .with_state(state)
}

/// Starts the recording session.
///
/// # Response
/// 200 with the applied status on success; 409 when the session is not idle;
/// 502 when the recorder backend refused or could not be reached.
async fn start_session(State(state): State<SessionApiState>) -> ApiResult<Json<Value>> {
    info!("Session start command received via API");

    let status = state.controller.start().await?;

    Ok(Json(json!({
        "success": true,
        "phase": status.phase.as_str(),
        "message": status.message,
    })))
}

/// Stops the recording session. Same response contract as start.
async fn stop_session(State(state): State<SessionApiState>) -> ApiResult<Json<Value>> {
    info!("Session stop command received via API");

    let status = state.controller.stop().await?;

    Ok(Json(json!({
        "success": true,
        "phase": status.phase.as_str(),
        "message": status.message,
    })))
}

/// Gets the current session status.
async fn session_status(State(state): State<SessionApiState>) -> Json<Value> {
    let status = state.controller.status().await;

    Json(json!({
        "recording": status.phase == SessionPhase::Recording,
        "phase": status.phase.as_str(),
        "message": status.message,
        "duration_seconds": status.duration_seconds(),
    }))
}
