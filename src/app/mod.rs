use crate::api::ApiServer;
use crate::client::HttpRecorderClient;
use crate::config::Config;
use crate::session::SessionController;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub async fn run_service() -> Result<()> {
    info!("Starting gravia service");

    let config = Config::load()?;

    let client = HttpRecorderClient::new(
        &config.recorder.base_url,
        Duration::from_secs(config.recorder.timeout_seconds),
    )?;
    let controller = Arc::new(SessionController::new(Arc::new(client)));

    info!("Recorder backend: {}", config.recorder.base_url);
    info!("Gravia is ready!");

    let api_server = ApiServer::new(controller);
    api_server.start().await
}
