//! Session status types and shared state handle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Phase of the recording session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Starting,
    Recording,
    Stopping,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Starting => "starting",
            Self::Recording => "recording",
            Self::Stopping => "stopping",
        }
    }
}

/// Current session state, readable by API handlers.
#[derive(Debug, Clone)]
pub struct SessionStatus {
    pub phase: SessionPhase,
    pub message: String,
    pub started_at: Option<DateTime<Utc>>,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Idle,
            message: "ready to record".to_string(),
            started_at: None,
        }
    }
}

impl SessionStatus {
    /// Duration since recording started, in seconds.
    pub fn duration_seconds(&self) -> Option<u64> {
        self.started_at.map(|started| {
            let elapsed = Utc::now() - started;
            elapsed.num_seconds().max(0) as u64
        })
    }
}

/// Thread-safe handle for sharing session state between the controller and
/// API handlers. Phase and message are always updated under one lock, so a
/// reader never observes them out of sync.
#[derive(Clone, Default)]
pub struct SessionStatusHandle {
    inner: Arc<Mutex<SessionStatus>>,
}

impl SessionStatusHandle {
    pub async fn get(&self) -> SessionStatus {
        self.inner.lock().await.clone()
    }

    /// Atomically move the session from `from` to `to`. Fails with the
    /// observed phase when the session is not in `from`, leaving it untouched.
    pub async fn begin(
        &self,
        from: SessionPhase,
        to: SessionPhase,
        message: &str,
    ) -> Result<(), SessionPhase> {
        let mut status = self.inner.lock().await;
        if status.phase != from {
            return Err(status.phase);
        }
        status.phase = to;
        status.message = message.to_string();
        Ok(())
    }

    /// The remote start was confirmed: the session is now recording.
    pub async fn start_confirmed(&self, message: String) -> SessionStatus {
        let mut status = self.inner.lock().await;
        status.phase = SessionPhase::Recording;
        status.message = message;
        status.started_at = Some(Utc::now());
        status.clone()
    }

    /// The remote stop was confirmed: the session is idle again.
    pub async fn stop_confirmed(&self, message: String) -> SessionStatus {
        let mut status = self.inner.lock().await;
        status.phase = SessionPhase::Idle;
        status.message = message;
        status.started_at = None;
        status.clone()
    }

    /// Roll back to the pre-call phase after a failed remote call.
    /// `started_at` is untouched, so a failed stop keeps its duration.
    pub async fn revert(&self, to: SessionPhase, message: String) -> SessionStatus {
        let mut status = self.inner.lock().await;
        status.phase = to;
        status.message = message;
        status.clone()
    }
}
