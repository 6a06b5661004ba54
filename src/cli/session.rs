//! CLI handlers for session commands.
//!
//! All commands communicate with the running service via the HTTP API.

use anyhow::{bail, Context, Result};
use serde_json::Value;

const BASE_URL: &str = "http://127.0.0.1:4728";

pub async fn start_session() -> Result<()> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/session/start", BASE_URL))
        .send()
        .await
        .context("Failed to connect to gravia service. Is it running?")?;

    let status = response.status();
    let json: Value = response.json().await?;

    if !status.is_success() {
        bail!(
            "Failed to start session: {}",
            json.get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error")
        );
    }

    println!(
        "Recording session started: {}",
        json.get("message").and_then(|v| v.as_str()).unwrap_or("")
    );

    Ok(())
}

pub async fn stop_session() -> Result<()> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/session/stop", BASE_URL))
        .send()
        .await
        .context("Failed to connect to gravia service. Is it running?")?;

    let status = response.status();
    let json: Value = response.json().await?;

    if !status.is_success() {
        bail!(
            "Failed to stop session: {}",
            json.get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error")
        );
    }

    println!(
        "Recording session stopped: {}",
        json.get("message").and_then(|v| v.as_str()).unwrap_or("")
    );

    Ok(())
}

pub async fn session_status() -> Result<()> {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/session/status", BASE_URL))
        .send()
        .await
        .context("Failed to connect to gravia service. Is it running?")?;

    let json: Value = response.json().await?;

    let phase = json
        .get("phase")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown");
    let recording = json
        .get("recording")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    if recording {
        let duration = json
            .get("duration_seconds")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);

        let minutes = duration / 60;
        let seconds = duration % 60;

        println!("Recording in progress ({:02}:{:02})", minutes, seconds);
    } else {
        println!("No recording in progress (status: {})", phase);
    }

    if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
        println!("Last status: {}", message);
    }

    Ok(())
}
