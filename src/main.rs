use anyhow::Result;
use clap::Parser;
use gravia::{
    app,
    cli::{self, Cli, CliCommand},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("Gravia {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(CliCommand::Start) => return cli::session::start_session().await,
        Some(CliCommand::Stop) => return cli::session::stop_session().await,
        Some(CliCommand::Status) => return cli::session::session_status().await,
        None => {}
    }

    app::run_service().await
}
