//! HTTP client for the remote recording backend.
//!
//! Issues the start/stop calls against a configured base URL and normalizes
//! every failure (non-2xx response, connection error, timeout) into an
//! [`OperationOutcome`] instead of surfacing transport errors to callers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Normalized result of a single remote call.
#[derive(Debug, Clone)]
pub struct OperationOutcome {
    pub succeeded: bool,
    pub message: String,
    pub error_detail: Option<String>,
}

impl OperationOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            error_detail: None,
        }
    }

    pub fn failure(message: impl Into<String>, error_detail: Option<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            error_detail,
        }
    }
}

/// Seam between the session controller and the recording backend.
/// Implemented by [`HttpRecorderClient`] and by test doubles.
#[async_trait]
pub trait RecorderClient: Send + Sync {
    async fn start_recording(&self) -> OperationOutcome;
    async fn stop_recording(&self) -> OperationOutcome;
}

/// Success body returned by the recorder backend.
#[derive(Debug, Deserialize)]
struct RecorderMessage {
    message: Option<String>,
}

/// FastAPI-style error body; `detail` carries the cause.
#[derive(Debug, Deserialize)]
struct RecorderError {
    detail: Option<String>,
}

/// Client for the recording backend HTTP API.
pub struct HttpRecorderClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecorderClient {
    /// Create a new client with the given base URL and per-request deadline.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_empty(&self, path: &str, default_message: &str) -> OperationOutcome {
        let url = format!("{}/{}", self.base_url, path);
        debug!("POST {}", url);

        let response = match self.client.post(&url).json(&json!({})).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!("Recorder request to {} timed out", url);
                return OperationOutcome::failure(
                    "recorder did not respond within the deadline",
                    Some(e.to_string()),
                );
            }
            Err(e) => {
                warn!("Recorder request to {} failed: {}", url, e);
                return OperationOutcome::failure(
                    "could not reach recorder",
                    Some(e.to_string()),
                );
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            warn!("Recorder returned {} for {}: {}", status, url, body);

            let detail = serde_json::from_str::<RecorderError>(&body)
                .ok()
                .and_then(|e| e.detail);
            let message = detail
                .unwrap_or_else(|| format!("recorder request failed with status {}", status));

            return OperationOutcome::failure(message, Some(status.to_string()));
        }

        let message = serde_json::from_str::<RecorderMessage>(&body)
            .ok()
            .and_then(|m| m.message)
            .unwrap_or_else(|| default_message.to_string());

        OperationOutcome::success(message)
    }
}

#[async_trait]
impl RecorderClient for HttpRecorderClient {
    async fn start_recording(&self) -> OperationOutcome {
        self.post_empty("iniciar-gravacao", "recording started").await
    }

    async fn stop_recording(&self) -> OperationOutcome {
        self.post_empty("parar-gravacao", "recording stopped").await
    }
}
