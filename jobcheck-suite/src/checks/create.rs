//! Create a job

use async_trait::async_trait;
use jobcheck_client::{StatusCode, fetch_all_jobs};
use jobcheck_core::domain::job::Job;

use super::{CheckContext, ScenarioCheck};
use crate::failure::{CheckFailure, expect_status};
use crate::payloads;

/// POST a new job; expects 201, then lists the collection
pub struct CreateJobCheck;

#[async_trait]
impl ScenarioCheck for CreateJobCheck {
    fn name(&self) -> &'static str {
        "Create job"
    }

    async fn run(&self, ctx: &CheckContext<'_>) -> Result<(), CheckFailure> {
        let operation = "create a new job";
        let payload = payloads::new_job();

        let envelope = ctx
            .exchange(operation, ctx.client.create_job(&payload))
            .await?;

        // Track before asserting so a job created with an odd status is still removed.
        if let Some(job) = envelope.decode::<Job>() {
            ctx.track_created(job.id);
        }

        expect_status(&envelope, StatusCode::CREATED, operation)?;
        ctx.show("Created Job:", &envelope);

        fetch_all_jobs(ctx.client, ctx.recorder)
            .await
            .map_err(|e| CheckFailure::transport("list jobs after creation", e))?;

        Ok(())
    }
}
