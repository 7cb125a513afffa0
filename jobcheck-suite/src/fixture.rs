//! Lifecycle fixtures
//!
//! `SuiteFixture` brackets a whole run with setup and teardown markers.
//! `JobFixture` brackets a single check: it can seed a job for the check to
//! work on, and removes whatever it seeded or was asked to track.

use jobcheck_client::{ExchangeRecorder, JobsClient, StatusCode, log_response};
use jobcheck_core::domain::job::Job;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};

use crate::failure::{CheckFailure, expect_status};
use crate::payloads;

/// Setup/teardown bracket around the whole suite
///
/// Teardown runs exactly once, either through [`SuiteFixture::teardown`]
/// or when the fixture is dropped (including while unwinding).
pub struct SuiteFixture<'a> {
    recorder: &'a dyn ExchangeRecorder,
    torn_down: bool,
}

impl<'a> SuiteFixture<'a> {
    /// Runs setup and returns the open bracket
    pub fn setup(recorder: &'a dyn ExchangeRecorder) -> Self {
        info!("Suite setup");
        recorder.record_note("Setup for the suite");
        Self {
            recorder,
            torn_down: false,
        }
    }

    pub fn teardown(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.recorder.record_note("Teardown for the suite");
        info!("Suite teardown");
    }
}

impl Drop for SuiteFixture<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Per-check bracket owning the jobs a check creates
pub struct JobFixture<'a> {
    client: &'a JobsClient,
    recorder: &'a dyn ExchangeRecorder,
    owned: Mutex<Vec<i64>>,
}

impl<'a> JobFixture<'a> {
    pub fn new(client: &'a JobsClient, recorder: &'a dyn ExchangeRecorder) -> Self {
        Self {
            client,
            recorder,
            owned: Mutex::new(Vec::new()),
        }
    }

    /// Creates a job for the check and returns its server-assigned ID
    pub async fn seed(&self) -> Result<i64, CheckFailure> {
        let response = self
            .client
            .create_job(&payloads::fixture_job())
            .await
            .map_err(|e| CheckFailure::Fixture(e.to_string()))?;
        let envelope = log_response(self.recorder, response)
            .await
            .map_err(|e| CheckFailure::Fixture(e.to_string()))?;

        expect_status(&envelope, StatusCode::CREATED, "seed a fixture job")
            .map_err(|e| CheckFailure::Fixture(e.to_string()))?;

        let job: Job = envelope.decode().ok_or_else(|| {
            CheckFailure::Fixture(format!("created job has no usable body: {}", envelope.body))
        })?;

        debug!("Seeded fixture job {}", job.id);
        self.track(job.id);
        Ok(job.id)
    }

    /// Marks a job for removal at teardown
    pub fn track(&self, job_id: i64) {
        self.owned
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(job_id);
    }

    pub fn owned(&self) -> Vec<i64> {
        self.owned
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Deletes every tracked job
    ///
    /// Each cleanup response is logged like any other. A 404 means the
    /// check already removed the job. Other problems are logged and
    /// otherwise ignored; teardown never fails a check.
    pub async fn teardown(self) {
        let owned = self.owned.into_inner().unwrap_or_else(PoisonError::into_inner);

        for job_id in owned {
            let response = match self.client.delete_job(job_id).await {
                Ok(response) => response,
                Err(e) => {
                    warn!("Failed to clean up fixture job {}: {}", job_id, e);
                    continue;
                }
            };

            match log_response(self.recorder, response).await {
                Ok(envelope)
                    if envelope.status.is_success() || envelope.status == StatusCode::NOT_FOUND =>
                {
                    debug!("Fixture job {} cleaned up ({})", job_id, envelope.status);
                }
                Ok(envelope) => {
                    warn!("Failed to clean up fixture job {}: status {}", job_id, envelope.status);
                }
                Err(e) => warn!("Failed to clean up fixture job {}: {}", job_id, e),
            }
        }
    }
}
