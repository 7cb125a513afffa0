//! Configuration module
//!
//! Turns command-line options into the harness configuration.

use clap::Args;
use jobcheck_client::Credentials;
use jobcheck_suite::{HarnessConfig, JobTarget};

/// Connection options shared by every command
///
/// Unset options fall back to the `JOBCHECK_*` environment variables, then
/// to the built-in defaults.
#[derive(Debug, Default, Args)]
pub struct ConnectionArgs {
    /// Collection URL of the jobs resource [default: http://localhost:8080/api/jobs]
    #[arg(long)]
    pub base_url: Option<String>,

    /// HTTP Basic username [default: user]
    #[arg(long)]
    pub username: Option<String>,

    /// HTTP Basic password
    #[arg(long)]
    pub password: Option<String>,
}

/// Options for running the checks
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Run the by-ID checks against this existing job instead of seeding one per check
    #[arg(long)]
    pub job_id: Option<i64>,

    /// Confirm with a GET that deleted jobs are gone [default: true]
    #[arg(long, value_name = "BOOL")]
    pub verify_delete: Option<bool>,

    /// Also run the status, job type and date range filter checks
    #[arg(long)]
    pub extended: bool,
}

/// Builds the harness configuration from the environment and the options
pub fn harness_config(connection: &ConnectionArgs, run: &RunArgs) -> anyhow::Result<HarnessConfig> {
    let config = apply_args(HarnessConfig::from_env()?, connection, run);
    config.validate()?;
    Ok(config)
}

/// Overrides `config` with every option given on the command line
fn apply_args(mut config: HarnessConfig, connection: &ConnectionArgs, run: &RunArgs) -> HarnessConfig {
    if let Some(base_url) = &connection.base_url {
        config.base_url = base_url.clone();
    }

    if connection.username.is_some() || connection.password.is_some() {
        let username = connection
            .username
            .clone()
            .unwrap_or_else(|| config.credentials.username.clone());
        let password = connection
            .password
            .clone()
            .unwrap_or_else(|| config.credentials.password().to_string());
        config.credentials = Credentials::new(username, password);
    }

    if let Some(id) = run.job_id {
        config.target = JobTarget::Fixed(id);
    }

    if let Some(verify_delete) = run.verify_delete {
        config.verify_delete = verify_delete;
    }

    if run.extended {
        config.extended = true;
    }

    config
}
