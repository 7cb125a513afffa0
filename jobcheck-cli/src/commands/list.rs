//! List command handler

use anyhow::{Context, Result};
use colored::*;
use jobcheck_client::fetch_all_jobs;
use std::process::ExitCode;

use crate::config::{ConnectionArgs, RunArgs, harness_config};
use crate::console::ConsoleRecorder;

pub async fn handle_list_command(connection: &ConnectionArgs) -> Result<ExitCode> {
    let client = harness_config(connection, &RunArgs::default())?.client();

    let envelope = fetch_all_jobs(&client, &ConsoleRecorder::default())
        .await
        .context("Failed to list jobs")?;

    if !envelope.status.is_success() {
        println!(
            "{}",
            format!("Server answered {}", envelope.status).yellow()
        );
        return Ok(ExitCode::FAILURE);
    }

    if envelope.items().is_some_and(|items| items.is_empty()) {
        println!("{}", "No jobs found.".yellow());
    }

    Ok(ExitCode::SUCCESS)
}
