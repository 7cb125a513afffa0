//! Scenario checks
//!
//! Each check drives one operation of the jobs resource through the same
//! cycle: send the request, pass the response through the logger, assert
//! on the status, then do any informational listing. Transport faults are
//! turned into [`CheckFailure::Transport`] right where they happen.

mod create;
mod delete;
mod filters;
mod list;
mod read;
mod update;

pub use create::CreateJobCheck;
pub use delete::DeleteJobCheck;
pub use filters::{ListByDateRangeCheck, ListByJobTypeCheck, ListByStatusCheck};
pub use list::ListAllJobsCheck;
pub use read::ReadJobCheck;
pub use update::UpdateJobCheck;

use async_trait::async_trait;
use jobcheck_client::{Envelope, ExchangeRecorder, JobsClient, Response, log_response};
use std::future::Future;

use crate::config::HarnessConfig;
use crate::failure::CheckFailure;
use crate::fixture::JobFixture;
use crate::payloads;

/// A single scenario check
#[async_trait]
pub trait ScenarioCheck: Send + Sync {
    /// Human-readable name used in the report
    fn name(&self) -> &'static str;

    /// Whether the check operates on an existing job by ID
    fn needs_job(&self) -> bool {
        false
    }

    /// Runs the check
    ///
    /// # Returns
    /// `Ok(())` if every assertion held
    async fn run(&self, ctx: &CheckContext<'_>) -> Result<(), CheckFailure>;
}

/// Everything a check may touch while it runs
pub struct CheckContext<'a> {
    pub client: &'a JobsClient,
    pub recorder: &'a dyn ExchangeRecorder,
    /// Job for by-ID checks, from the fixture or the fixed target
    pub job_id: Option<i64>,
    pub verify_delete: bool,
    /// Present when checks clean up after themselves
    pub fixture: Option<&'a JobFixture<'a>>,
}

impl CheckContext<'_> {
    /// The job a by-ID check should use
    pub fn target_job(&self) -> Result<i64, CheckFailure> {
        self.job_id
            .ok_or_else(|| CheckFailure::Fixture("no job available for this check".to_string()))
    }

    /// Hands a job the check created to the fixture for removal
    pub fn track_created(&self, job_id: i64) {
        if let Some(fixture) = self.fixture {
            fixture.track(job_id);
        }
    }

    /// Awaits one request and logs its response
    ///
    /// Any transport fault, on send or while reading the body, comes back
    /// as a [`CheckFailure::Transport`] for `operation`.
    pub async fn exchange<F>(&self, operation: &str, request: F) -> Result<Envelope, CheckFailure>
    where
        F: Future<Output = jobcheck_client::Result<Response>> + Send,
    {
        let response = request
            .await
            .map_err(|e| CheckFailure::transport(operation, e))?;

        log_response(self.recorder, response)
            .await
            .map_err(|e| CheckFailure::transport(operation, e))
    }

    /// Records a heading followed by a body
    pub fn show(&self, heading: &str, envelope: &Envelope) {
        self.recorder.record_note(heading);
        self.recorder.record_note(&envelope.body.to_string());
    }
}

/// The checks a configuration asks for, in run order
pub fn default_checks(config: &HarnessConfig) -> Vec<Box<dyn ScenarioCheck>> {
    let mut checks: Vec<Box<dyn ScenarioCheck>> = vec![
        Box::new(ListAllJobsCheck),
        Box::new(CreateJobCheck),
        Box::new(ReadJobCheck),
        Box::new(UpdateJobCheck),
        Box::new(DeleteJobCheck),
    ];

    if config.extended {
        checks.push(Box::new(ListByStatusCheck::default()));
        checks.push(Box::new(ListByJobTypeCheck::default()));
        checks.push(Box::new(ListByDateRangeCheck::new(payloads::recent_range())));
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_checks_order() {
        let names: Vec<_> = default_checks(&HarnessConfig::default())
            .iter()
            .map(|check| check.name())
            .collect();

        assert_eq!(
            names,
            vec!["List all jobs", "Create job", "Read job by ID", "Update job by ID", "Delete job by ID"]
        );
    }

    #[test]
    fn test_extended_checks_are_appended() {
        let config = HarnessConfig::default().with_extended(true);
        let checks = default_checks(&config);

        assert_eq!(checks.len(), 8);
        assert!(checks[5..].iter().all(|check| !check.needs_job()));
    }

    #[test]
    fn test_only_by_id_checks_need_a_job() {
        let needs: Vec<_> = default_checks(&HarnessConfig::default())
            .iter()
            .map(|check| check.needs_job())
            .collect();

        assert_eq!(needs, vec![false, false, true, true, true]);
    }
}
