use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gravia")]
#[command(about = "Meeting recording session controller", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Start the recording session
    Start,
    /// Stop the recording session
    Stop,
    /// Show the current session status
    Status,
    /// Print version information
    Version,
}
