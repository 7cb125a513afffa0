//! Jobcheck CLI
//!
//! Runs the CRUD scenario checks against a CI/CD server's jobs endpoint.

mod commands;
mod config;
mod console;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{ConnectionArgs, RunArgs};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobcheck")]
#[command(about = "CRUD checks for a CI/CD server's jobs API", long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobcheck=info,jobcheck_suite=info,jobcheck_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    handle_command(cli.command, &cli.run, &cli.connection).await
}
