//! List all jobs

use async_trait::async_trait;
use jobcheck_client::{StatusCode, render_jobs};

use super::{CheckContext, ScenarioCheck};
use crate::failure::{CheckFailure, expect_status};

/// GET the collection; expects 200 and a JSON array
pub struct ListAllJobsCheck;

#[async_trait]
impl ScenarioCheck for ListAllJobsCheck {
    fn name(&self) -> &'static str {
        "List all jobs"
    }

    async fn run(&self, ctx: &CheckContext<'_>) -> Result<(), CheckFailure> {
        let operation = "get all jobs";

        let envelope = ctx.exchange(operation, ctx.client.list_jobs()).await?;
        expect_status(&envelope, StatusCode::OK, operation)?;

        if !envelope.is_sequence() {
            return Err(CheckFailure::shape(
                operation,
                format!("response body doesn't contain a list: {}", envelope.body),
            ));
        }

        render_jobs(ctx.recorder, "Retrieved Jobs:", &envelope);
        Ok(())
    }
}
