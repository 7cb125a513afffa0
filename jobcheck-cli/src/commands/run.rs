//! Run command handler
//!
//! Runs the suite and prints a summary.

use anyhow::Result;
use colored::*;
use jobcheck_suite::{CheckOutcome, SuiteReport, SuiteRunner};
use std::process::ExitCode;
use std::sync::Arc;

use crate::config::{ConnectionArgs, RunArgs, harness_config};
use crate::console::ConsoleRecorder;

pub async fn handle_run_command(args: &RunArgs, connection: &ConnectionArgs) -> Result<ExitCode> {
    let config = harness_config(connection, args)?;
    tracing::info!(
        "Running checks against {} as {}",
        config.base_url,
        config.credentials.username
    );

    let runner = SuiteRunner::new(config, Arc::new(ConsoleRecorder::default()));
    let report = runner.run().await;

    print!("{}", render_summary(&report));
    Ok(exit_code(&report))
}

/// Success only if every check passed
fn exit_code(report: &SuiteReport) -> ExitCode {
    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn render_summary(report: &SuiteReport) -> String {
    let rule = "─".repeat(60).dimmed();
    let mut out = format!("\n{}\n{}\n", "Summary:".bold(), rule);
    for outcome in &report.outcomes {
        out.push_str(&render_outcome(outcome));
    }
    out.push_str(&format!("{}\n", rule));

    let line = format!(
        "{} of {} check(s) passed",
        report.passed_count(),
        report.outcomes.len()
    );
    if report.all_passed() {
        out.push_str(&format!("{}\n", line.green()));
    } else {
        out.push_str(&format!("{}\n", line.red()));
    }
    out
}

fn render_outcome(outcome: &CheckOutcome) -> String {
    match &outcome.result {
        Ok(()) => format!("  {} {}\n", "✓".green(), outcome.name),
        Err(failure) => format!(
            "  {} {}\n    {}\n",
            "✗".red(),
            outcome.name,
            failure.to_string().red()
        ),
    }
}
