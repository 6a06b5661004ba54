pub mod args;
pub mod session;

pub use args::{Cli, CliCommand};
