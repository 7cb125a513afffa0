//! Update a job by ID

use async_trait::async_trait;
use jobcheck_client::StatusCode;

use super::{CheckContext, ScenarioCheck};
use crate::failure::{CheckFailure, expect_status};
use crate::payloads;

/// GET the job, PUT new fields, expect 200 on the PUT
///
/// The pre-read is informational; only the PUT status is asserted. Both
/// bodies are recorded so before and after can be compared.
pub struct UpdateJobCheck;

#[async_trait]
impl ScenarioCheck for UpdateJobCheck {
    fn name(&self) -> &'static str {
        "Update job by ID"
    }

    fn needs_job(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &CheckContext<'_>) -> Result<(), CheckFailure> {
        let job_id = ctx.target_job()?;
        let operation = format!("update job with ID: {}", job_id);

        let before = ctx
            .exchange(
                &format!("get job with ID: {}", job_id),
                ctx.client.get_job(job_id),
            )
            .await?;
        ctx.show(&format!("Job with ID {} before update:", job_id), &before);

        let payload = payloads::updated_job();
        let after = ctx
            .exchange(&operation, ctx.client.update_job(job_id, &payload))
            .await?;
        expect_status(&after, StatusCode::OK, &operation)?;

        ctx.show(&format!("Job with ID {} after update:", job_id), &after);
        Ok(())
    }
}
