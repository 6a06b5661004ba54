//! REST API server for gravia.
//!
//! Provides HTTP endpoints for:
//! - Session control (start, stop, status)
//!
//! This is the surface the browser UI talks to.

pub mod error;
pub mod routes;

use crate::session::SessionController;
use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;

pub use routes::session::SessionApiState;

pub struct ApiServer {
    port: u16,
    session_state: SessionApiState,
}

impl ApiServer {
    pub fn new(controller: Arc<SessionController>) -> Self {
        Self {
            port: 4728, // GRAV in numbers
            session_state: SessionApiState { controller },
        }
    }

    pub async fn start(self) -> Result<()> {
        let app = Router::new()
            // Root and version endpoints
            .route("/", get(status))
            .route("/version", get(version))
            // Session control endpoints
            .merge(routes::session::router(self.session_state))
            .layer(ServiceBuilder::new());

        let listener = tokio::net::TcpListener::bind(&format!("127.0.0.1:{}", self.port)).await?;

        info!("API server listening on http://127.0.0.1:{}", self.port);
        info!("Endpoints:");
        info!("  GET  /               - Service info");
        info!("  GET  /version        - Get version info");
        info!("  POST /session/start  - Start recording session");
        info!("  POST /session/stop   - Stop recording session");
        info!("  GET  /session/status - Get session status");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

async fn status() -> Json<Value> {
    Json(json!({
        "service": "gravia",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "gravia"
    }))
}
