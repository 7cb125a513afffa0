//! Job endpoints
//!
//! Each method issues exactly one authenticated request and returns the raw
//! response. Non-2xx statuses are not errors here.

use jobcheck_core::domain::job::JobStatus;
use jobcheck_core::dto::job::{CreateJob, DateRange, UpdateJob};
use reqwest::Response;

use crate::JobsClient;
use crate::error::Result;

impl JobsClient {
    // =============================================================================
    // CRUD
    // =============================================================================

    /// GET `<base_url>`
    pub async fn list_jobs(&self) -> Result<Response> {
        let url = self.endpoint(&[])?;
        tracing::debug!("GET {}", url);
        let response = self.authorize(self.client.get(url)).send().await?;

        Ok(response)
    }

    /// POST `<base_url>` with a JSON body
    ///
    /// # Arguments
    /// * `req` - The job to create
    pub async fn create_job(&self, req: &CreateJob) -> Result<Response> {
        let url = self.endpoint(&[])?;
        tracing::debug!("POST {}", url);
        let response = self.authorize(self.client.post(url)).json(req).send().await?;

        Ok(response)
    }

    /// GET `<base_url>/<id>`
    pub async fn get_job(&self, job_id: i64) -> Result<Response> {
        let url = self.job_endpoint(job_id)?;
        tracing::debug!("GET {}", url);
        let response = self.authorize(self.client.get(url)).send().await?;

        Ok(response)
    }

    /// PUT `<base_url>/<id>` with a JSON body
    ///
    /// # Arguments
    /// * `job_id` - The job to update
    /// * `req` - The replacement fields
    pub async fn update_job(&self, job_id: i64, req: &UpdateJob) -> Result<Response> {
        let url = self.job_endpoint(job_id)?;
        tracing::debug!("PUT {}", url);
        let response = self.authorize(self.client.put(url)).json(req).send().await?;

        Ok(response)
    }

    /// DELETE `<base_url>/<id>`
    pub async fn delete_job(&self, job_id: i64) -> Result<Response> {
        let url = self.job_endpoint(job_id)?;
        tracing::debug!("DELETE {}", url);
        let response = self.authorize(self.client.delete(url)).send().await?;

        Ok(response)
    }

    fn job_endpoint(&self, job_id: i64) -> Result<reqwest::Url> {
        let id = job_id.to_string();
        self.endpoint(&[id.as_str()])
    }

    // =============================================================================
    // Filters
    // =============================================================================

    /// GET `<base_url>/status/<status>`
    pub async fn list_by_status(&self, status: &JobStatus) -> Result<Response> {
        let url = self.endpoint(&["status", status.as_str()])?;
        tracing::debug!("GET {}", url);
        let response = self.authorize(self.client.get(url)).send().await?;

        Ok(response)
    }

    /// GET `<base_url>/jobType/<job_type>`
    pub async fn list_by_job_type(&self, job_type: &str) -> Result<Response> {
        let url = self.endpoint(&["jobType", job_type])?;
        tracing::debug!("GET {}", url);
        let response = self.authorize(self.client.get(url)).send().await?;

        Ok(response)
    }

    /// GET `<base_url>/date-range?startDate=..&endDate=..`
    pub async fn list_by_date_range(&self, range: DateRange) -> Result<Response> {
        let url = self.endpoint(&["date-range"])?;
        tracing::debug!("GET {}", url);
        let response = self
            .authorize(self.client.get(url))
            .query(&range)
            .send()
            .await?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Credentials;
    use crate::error::ClientError;
    use tokio::net::TcpListener;

    /// Address with nothing listening on it
    async fn closed_addr() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/api/jobs", addr)
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = JobsClient::new(closed_addr().await, Credentials::new("user", "1234"));

        let err = client.get_job(1).await.unwrap_err();
        assert!(err.is_connect(), "unexpected error: {}", err);
    }

    #[tokio::test]
    async fn test_invalid_base_url_fails_before_sending() {
        let client = JobsClient::new("jobs", Credentials::new("user", "1234"));

        let err = client.list_jobs().await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
