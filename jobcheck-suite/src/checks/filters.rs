//! Filtered listings
//!
//! Status, job type and creation-date filters. Each expects 200 and a JSON
//! array whose elements all satisfy the filter.

use async_trait::async_trait;
use jobcheck_client::{Envelope, StatusCode, render_jobs};
use jobcheck_core::domain::job::{Job, JobStatus};
use jobcheck_core::dto::job::DateRange;

use super::{CheckContext, ScenarioCheck};
use crate::failure::{CheckFailure, expect_status};
use crate::payloads::BUILD_JOB_TYPE;

/// Asserts 200 + array body and returns the decoded jobs
fn expect_job_list(envelope: &Envelope, operation: &str) -> Result<Vec<Job>, CheckFailure> {
    expect_status(envelope, StatusCode::OK, operation)?;

    if !envelope.is_sequence() {
        return Err(CheckFailure::shape(
            operation,
            format!("response body doesn't contain a list: {}", envelope.body),
        ));
    }

    envelope
        .decode::<Vec<Job>>()
        .ok_or_else(|| CheckFailure::shape(operation, "list elements are not jobs"))
}

pub struct ListByStatusCheck {
    status: JobStatus,
}

impl ListByStatusCheck {
    pub fn new(status: JobStatus) -> Self {
        Self { status }
    }
}

impl Default for ListByStatusCheck {
    fn default() -> Self {
        Self::new(JobStatus::Pending)
    }
}

#[async_trait]
impl ScenarioCheck for ListByStatusCheck {
    fn name(&self) -> &'static str {
        "List jobs by status"
    }

    async fn run(&self, ctx: &CheckContext<'_>) -> Result<(), CheckFailure> {
        let operation = format!("get jobs with status: {}", self.status);

        let envelope = ctx
            .exchange(&operation, ctx.client.list_by_status(&self.status))
            .await?;
        let jobs = expect_job_list(&envelope, &operation)?;

        if let Some(job) = jobs.iter().find(|job| job.status != self.status) {
            return Err(CheckFailure::shape(
                &operation,
                format!("job {} has status {}", job.id, job.status),
            ));
        }

        render_jobs(ctx.recorder, &format!("Jobs with status {}:", self.status), &envelope);
        Ok(())
    }
}

pub struct ListByJobTypeCheck {
    job_type: String,
}

impl ListByJobTypeCheck {
    pub fn new(job_type: impl Into<String>) -> Self {
        Self {
            job_type: job_type.into(),
        }
    }
}

impl Default for ListByJobTypeCheck {
    fn default() -> Self {
        Self::new(BUILD_JOB_TYPE)
    }
}

#[async_trait]
impl ScenarioCheck for ListByJobTypeCheck {
    fn name(&self) -> &'static str {
        "List jobs by type"
    }

    async fn run(&self, ctx: &CheckContext<'_>) -> Result<(), CheckFailure> {
        let operation = format!("get jobs with job type: {}", self.job_type);

        let envelope = ctx
            .exchange(&operation, ctx.client.list_by_job_type(&self.job_type))
            .await?;
        let jobs = expect_job_list(&envelope, &operation)?;

        if let Some(job) = jobs.iter().find(|job| job.job_type != self.job_type) {
            return Err(CheckFailure::shape(
                &operation,
                format!("job {} has job type {}", job.id, job.job_type),
            ));
        }

        render_jobs(ctx.recorder, &format!("Jobs of type {}:", self.job_type), &envelope);
        Ok(())
    }
}

pub struct ListByDateRangeCheck {
    range: DateRange,
}

impl ListByDateRangeCheck {
    pub fn new(range: DateRange) -> Self {
        Self { range }
    }
}

#[async_trait]
impl ScenarioCheck for ListByDateRangeCheck {
    fn name(&self) -> &'static str {
        "List jobs by date range"
    }

    async fn run(&self, ctx: &CheckContext<'_>) -> Result<(), CheckFailure> {
        let operation = format!(
            "get jobs created between {} and {}",
            self.range.start_date, self.range.end_date
        );

        let envelope = ctx
            .exchange(&operation, ctx.client.list_by_date_range(self.range))
            .await?;
        let jobs = expect_job_list(&envelope, &operation)?;

        // Jobs without a creation time cannot violate the range.
        let outside = jobs
            .iter()
            .find(|job| job.created_at.is_some_and(|at| !self.range.contains(at)));
        if let Some(job) = outside {
            return Err(CheckFailure::shape(
                &operation,
                format!("job {} was created outside the range", job.id),
            ));
        }

        render_jobs(ctx.recorder, "Jobs in date range:", &envelope);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_job_list_accepts_jobs() {
        let envelope = Envelope::from_parts(
            StatusCode::OK,
            br#"[{"id":2,"jobName":"Deploy Project","status":"Pending","jobType":"Deploy"}]"#,
        );

        let jobs = expect_job_list(&envelope, "get jobs with status: Pending").unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].status, JobStatus::Pending);
    }

    #[test]
    fn test_expect_job_list_rejects_object() {
        let envelope = Envelope::from_parts(StatusCode::OK, br#"{"id":2}"#);

        let failure = expect_job_list(&envelope, "get jobs with status: Pending").unwrap_err();
        assert!(matches!(failure, CheckFailure::UnexpectedShape { .. }));
    }

    #[test]
    fn test_expect_job_list_rejects_wrong_status() {
        let envelope = Envelope::from_parts(StatusCode::UNAUTHORIZED, b"");

        let failure = expect_job_list(&envelope, "get jobs with job type: Build").unwrap_err();
        assert!(matches!(
            failure,
            CheckFailure::UnexpectedStatus { expected: 200, actual: 401, .. }
        ));
    }
}
