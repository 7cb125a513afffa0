//! Read a job by ID

use async_trait::async_trait;
use jobcheck_client::StatusCode;

use super::{CheckContext, ScenarioCheck};
use crate::failure::{CheckFailure, expect_status};

/// GET one job; expects 200
pub struct ReadJobCheck;

#[async_trait]
impl ScenarioCheck for ReadJobCheck {
    fn name(&self) -> &'static str {
        "Read job by ID"
    }

    fn needs_job(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &CheckContext<'_>) -> Result<(), CheckFailure> {
        let job_id = ctx.target_job()?;
        let operation = format!("get job with ID: {}", job_id);

        let envelope = ctx.exchange(&operation, ctx.client.get_job(job_id)).await?;
        expect_status(&envelope, StatusCode::OK, &operation)?;

        ctx.show(&format!("Retrieved Job with ID {}:", job_id), &envelope);
        Ok(())
    }
}
