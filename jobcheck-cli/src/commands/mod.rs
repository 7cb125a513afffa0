//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod list;
mod run;

use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;

use crate::config::{ConnectionArgs, RunArgs};

/// Top-level CLI commands; without one the checks run
#[derive(Subcommand)]
pub enum Commands {
    /// List every job on the server
    List,
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute, `None` to run the checks
/// * `run` - Options for running the checks
/// * `connection` - Endpoint and credentials
///
/// # Returns
/// The process exit code: success only if everything passed
pub async fn handle_command(
    command: Option<Commands>,
    run: &RunArgs,
    connection: &ConnectionArgs,
) -> Result<ExitCode> {
    match command {
        None => run::handle_run_command(run, connection).await,
        Some(Commands::List) => list::handle_list_command(connection).await,
    }
}
