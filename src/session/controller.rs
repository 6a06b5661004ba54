//! Recording session orchestrator.
//!
//! Drives the start/stop lifecycle against the remote recording backend and
//! keeps a single coherent status for API and CLI callers. The client is
//! injected via constructor — no concrete types hardcoded.

use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::client::{OperationOutcome, RecorderClient};

use super::status::{SessionPhase, SessionStatus, SessionStatusHandle};

/// Errors reported to callers of [`SessionController`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// The requested operation is not valid in the current phase.
    /// The session state is unchanged.
    #[error("cannot {attempted} while session is {}", .phase.as_str())]
    InvalidTransition {
        attempted: &'static str,
        phase: SessionPhase,
    },

    /// The remote call completed with a failure outcome. The session has
    /// been rolled back to its pre-call phase.
    #[error("{message}")]
    RemoteFailure {
        message: String,
        detail: Option<String>,
    },
}

pub struct SessionController {
    client: Arc<dyn RecorderClient>,
    status: SessionStatusHandle,
}

impl SessionController {
    pub fn new(client: Arc<dyn RecorderClient>) -> Self {
        Self {
            client,
            status: SessionStatusHandle::default(),
        }
    }

    /// Current session status snapshot.
    pub async fn status(&self) -> SessionStatus {
        self.status.get().await
    }

    /// Begin recording. Valid only while idle. The session is visible as
    /// `Starting` before the remote call is dispatched, so a concurrent
    /// caller is rejected instead of racing the in-flight operation.
    pub async fn start(&self) -> Result<SessionStatus, SessionError> {
        self.status
            .begin(SessionPhase::Idle, SessionPhase::Starting, "starting recording")
            .await
            .map_err(|phase| SessionError::InvalidTransition {
                attempted: "start",
                phase,
            })?;

        let outcome = self.client.start_recording().await;

        if outcome.succeeded {
            info!("Recording started: {}", outcome.message);
            Ok(self.status.start_confirmed(outcome.message).await)
        } else {
            let failure = remote_failure("failed to start", outcome);
            error!("{}", failure);
            self.status
                .revert(SessionPhase::Idle, failure.to_string())
                .await;
            Err(failure)
        }
    }

    /// Stop recording. Valid only while recording. A failed stop leaves the
    /// session in `Recording` — the backend reported it could not stop, so
    /// the recording is presumed still active.
    pub async fn stop(&self) -> Result<SessionStatus, SessionError> {
        self.status
            .begin(
                SessionPhase::Recording,
                SessionPhase::Stopping,
                "stopping recording",
            )
            .await
            .map_err(|phase| SessionError::InvalidTransition {
                attempted: "stop",
                phase,
            })?;

        let outcome = self.client.stop_recording().await;

        if outcome.succeeded {
            info!("Recording stopped: {}", outcome.message);
            Ok(self.status.stop_confirmed(outcome.message).await)
        } else {
            let failure = remote_failure("failed to stop", outcome);
            error!("{}", failure);
            self.status
                .revert(SessionPhase::Recording, failure.to_string())
                .await;
            Err(failure)
        }
    }
}

fn remote_failure(prefix: &str, outcome: OperationOutcome) -> SessionError {
    let message = match &outcome.error_detail {
        Some(detail) => format!("{}: {} ({})", prefix, outcome.message, detail),
        None => format!("{}: {}", prefix, outcome.message),
    };

    SessionError::RemoteFailure {
        message,
        detail: outcome.error_detail,
    }
}
