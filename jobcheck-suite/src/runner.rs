//! Suite runner
//!
//! Runs checks strictly one after another inside the suite fixture. With
//! an isolated target each check gets its own job fixture; with a fixed
//! target every by-ID check shares the configured job.

use jobcheck_client::{ExchangeRecorder, JobsClient};
use std::sync::Arc;
use tracing::{error, info};

use crate::checks::{CheckContext, ScenarioCheck, default_checks};
use crate::config::{HarnessConfig, JobTarget};
use crate::failure::CheckFailure;
use crate::fixture::{JobFixture, SuiteFixture};

/// Result of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub result: Result<(), CheckFailure>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a whole run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &CheckFailure)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|failure| (o.name, failure)))
    }

    /// Outcome of the check with this name, if it ran
    pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

/// Runs a list of checks against one endpoint
pub struct SuiteRunner {
    config: HarnessConfig,
    client: JobsClient,
    recorder: Arc<dyn ExchangeRecorder>,
    checks: Vec<Box<dyn ScenarioCheck>>,
}

impl SuiteRunner {
    /// Creates a runner with the checks `config` asks for
    pub fn new(config: HarnessConfig, recorder: Arc<dyn ExchangeRecorder>) -> Self {
        let checks = default_checks(&config);
        Self::with_checks(config, recorder, checks)
    }

    /// Creates a runner with an explicit list of checks
    pub fn with_checks(
        config: HarnessConfig,
        recorder: Arc<dyn ExchangeRecorder>,
        checks: Vec<Box<dyn ScenarioCheck>>,
    ) -> Self {
        let client = config.client();
        Self {
            config,
            client,
            recorder,
            checks,
        }
    }

    pub fn client(&self) -> &JobsClient {
        &self.client
    }

    /// Runs every check once, in order
    ///
    /// A failing check is reported and the next one still runs.
    pub async fn run(&self) -> SuiteReport {
        let suite = SuiteFixture::setup(self.recorder.as_ref());
        let mut report = SuiteReport::default();

        for check in &self.checks {
            let outcome = self.run_check(check.as_ref()).await;
            match &outcome.result {
                Ok(()) => info!("PASS {}", outcome.name),
                Err(failure) => error!("FAIL {}: {}", outcome.name, failure),
            }
            report.outcomes.push(outcome);
        }

        suite.teardown();

        info!(
            "{} of {} checks passed",
            report.passed_count(),
            report.outcomes.len()
        );
        report
    }

    /// Runs a single check inside its bracket
    pub async fn run_check(&self, check: &dyn ScenarioCheck) -> CheckOutcome {
        let name = check.name();
        info!("Running check: {}", name);

        let result = match self.config.target {
            JobTarget::Fixed(job_id) => {
                let ctx = self.context(Some(job_id), None);
                check.run(&ctx).await
            }
            JobTarget::Isolated => {
                let fixture = JobFixture::new(&self.client, self.recorder.as_ref());
                let result = self.run_isolated(check, &fixture).await;
                fixture.teardown().await;
                result
            }
        };

        CheckOutcome { name, result }
    }

    async fn run_isolated(
        &self,
        check: &dyn ScenarioCheck,
        fixture: &JobFixture<'_>,
    ) -> Result<(), CheckFailure> {
        let job_id = if check.needs_job() {
            Some(fixture.seed().await?)
        } else {
            None
        };

        let ctx = self.context(job_id, Some(fixture));
        check.run(&ctx).await
    }

    fn context<'a>(
        &'a self,
        job_id: Option<i64>,
        fixture: Option<&'a JobFixture<'a>>,
    ) -> CheckContext<'a> {
        CheckContext {
            client: &self.client,
            recorder: self.recorder.as_ref(),
            job_id,
            verify_delete: self.config.verify_delete,
            fixture,
        }
    }
}
