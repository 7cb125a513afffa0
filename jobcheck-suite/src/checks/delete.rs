//! Delete a job by ID

use async_trait::async_trait;
use jobcheck_client::{StatusCode, fetch_all_jobs};

use super::{CheckContext, ScenarioCheck};
use crate::failure::{CheckFailure, expect_status};

/// DELETE one job; expects 204, then lists the collection
///
/// With `verify_delete` set, a follow-up GET on the same ID must not
/// return 200.
pub struct DeleteJobCheck;

#[async_trait]
impl ScenarioCheck for DeleteJobCheck {
    fn name(&self) -> &'static str {
        "Delete job by ID"
    }

    fn needs_job(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &CheckContext<'_>) -> Result<(), CheckFailure> {
        let job_id = ctx.target_job()?;
        let operation = format!("delete job with ID: {}", job_id);

        let envelope = ctx.exchange(&operation, ctx.client.delete_job(job_id)).await?;
        expect_status(&envelope, StatusCode::NO_CONTENT, &operation)?;

        ctx.recorder
            .record_note(&format!("Job with ID {} deleted successfully.", job_id));

        fetch_all_jobs(ctx.client, ctx.recorder)
            .await
            .map_err(|e| CheckFailure::transport("list jobs after deletion", e))?;

        if ctx.verify_delete {
            let lookup = format!("confirm job with ID: {} is gone", job_id);
            let follow_up = ctx.exchange(&lookup, ctx.client.get_job(job_id)).await?;
            if follow_up.status == StatusCode::OK {
                return Err(CheckFailure::StillPresent { job_id });
            }
        }

        Ok(())
    }
}
