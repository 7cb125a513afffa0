//! Harness configuration
//!
//! Where the jobs endpoint lives, who to authenticate as, and how the
//! by-ID checks get a job to work on.

use anyhow::Context;
use jobcheck_client::{Credentials, JobsClient};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/jobs";
pub const DEFAULT_USERNAME: &str = "user";
pub const DEFAULT_PASSWORD: &str = "1234";

/// How the read/update/delete checks pick their job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobTarget {
    /// Each check seeds its own job and removes it afterwards
    Isolated,
    /// Every check works on one pre-existing job
    Fixed(i64),
}

/// Harness configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Collection URL of the jobs resource
    pub base_url: String,

    /// HTTP Basic credentials attached to every request
    pub credentials: Credentials,

    /// Job used by the by-ID checks
    pub target: JobTarget,

    /// Follow the delete with a GET that must not return 200
    pub verify_delete: bool,

    /// Also run the status/type/date-range filter checks
    pub extended: bool,
}

impl HarnessConfig {
    /// Creates a new configuration with defaults for everything but the endpoint
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
            target: JobTarget::Isolated,
            verify_delete: true,
            extended: false,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// All variables are optional:
    /// - JOBCHECK_BASE_URL (default: http://localhost:8080/api/jobs)
    /// - JOBCHECK_USERNAME (default: user)
    /// - JOBCHECK_PASSWORD (default: 1234)
    /// - JOBCHECK_JOB_ID (switches to a fixed target job)
    /// - JOBCHECK_VERIFY_DELETE (true/false, default: true)
    /// - JOBCHECK_EXTENDED (true/false, default: false)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HarnessConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("JOBCHECK_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let username = lookup("JOBCHECK_USERNAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        let password = lookup("JOBCHECK_PASSWORD").unwrap_or_else(|| DEFAULT_PASSWORD.to_string());

        let target = match lookup("JOBCHECK_JOB_ID") {
            Some(raw) => {
                let id = raw
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("JOBCHECK_JOB_ID is not an integer: {}", raw))?;
                JobTarget::Fixed(id)
            }
            None => JobTarget::Isolated,
        };

        let verify_delete = lookup("JOBCHECK_VERIFY_DELETE")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(true);

        let extended = lookup("JOBCHECK_EXTENDED")
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(false);

        Ok(Self {
            base_url,
            credentials: Credentials::new(username, password),
            target,
            verify_delete,
            extended,
        })
    }

    pub fn with_target(mut self, target: JobTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_verify_delete(mut self, verify_delete: bool) -> Self {
        self.verify_delete = verify_delete;
        self
    }

    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.credentials.username.is_empty() {
            anyhow::bail!("username cannot be empty");
        }

        Ok(())
    }

    /// Builds the authenticated client for this configuration
    pub fn client(&self) -> JobsClient {
        JobsClient::new(self.base_url.clone(), self.credentials.clone())
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL,
            Credentials::new(DEFAULT_USERNAME, DEFAULT_PASSWORD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api/jobs");
        assert_eq!(config.credentials.username, "user");
        assert_eq!(config.credentials.password(), "1234");
        assert_eq!(config.target, JobTarget::Isolated);
        assert!(config.verify_delete);
        assert!(!config.extended);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_with_nothing_set_matches_default() {
        let config = HarnessConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.target, JobTarget::Isolated);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = HarnessConfig::from_lookup(lookup_from(&[
            ("JOBCHECK_BASE_URL", "https://ci.example.com/api/jobs"),
            ("JOBCHECK_USERNAME", "ci"),
            ("JOBCHECK_PASSWORD", "secret"),
            ("JOBCHECK_JOB_ID", "1"),
            ("JOBCHECK_VERIFY_DELETE", "false"),
            ("JOBCHECK_EXTENDED", "true"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://ci.example.com/api/jobs");
        assert_eq!(config.credentials, Credentials::new("ci", "secret"));
        assert_eq!(config.target, JobTarget::Fixed(1));
        assert!(!config.verify_delete);
        assert!(config.extended);
    }

    #[test]
    fn test_from_lookup_rejects_bad_job_id() {
        let result = HarnessConfig::from_lookup(lookup_from(&[("JOBCHECK_JOB_ID", "one")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = HarnessConfig::default();
        assert!(config.validate().is_ok());

        config.base_url = "localhost:8080/api/jobs".to_string();
        assert!(config.validate().is_err());

        config.base_url = String::new();
        assert!(config.validate().is_err());

        config.base_url = DEFAULT_BASE_URL.to_string();
        config.credentials = Credentials::new("", "1234");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = HarnessConfig::default()
            .with_target(JobTarget::Fixed(42))
            .with_verify_delete(false)
            .with_extended(true);

        assert_eq!(config.target, JobTarget::Fixed(42));
        assert!(!config.verify_delete);
        assert!(config.extended);
    }
}
