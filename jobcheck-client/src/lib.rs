//! Jobcheck HTTP Client
//!
//! An authenticated HTTP client for the CI/CD server's `/api/jobs` resource,
//! plus the pieces the scenario suite builds on:
//!
//! - [`JobsClient`]: one method per verb/endpoint, HTTP Basic auth on every call
//! - [`log_response`]: turns a raw response into an [`Envelope`] and records it
//! - [`fetch_all_jobs`]: lists the collection and renders each job
//! - [`ExchangeRecorder`]: where envelopes and notes are written
//!
//! The verb methods hand back the raw `reqwest::Response`. Logging and
//! status assertions are the caller's job.
//!
//! # Example
//!
//! ```no_run
//! use jobcheck_client::{Credentials, JobsClient, TracingRecorder, log_response};
//!
//! #[tokio::main]
//! async fn main() -> jobcheck_client::Result<()> {
//!     let client = JobsClient::new(
//!         "http://localhost:8080/api/jobs",
//!         Credentials::new("user", "1234"),
//!     );
//!
//!     let response = client.get_job(1).await?;
//!     let envelope = log_response(&TracingRecorder, response).await?;
//!
//!     println!("status: {}", envelope.status);
//!     Ok(())
//! }
//! ```

mod credentials;
mod envelope;
pub mod error;
mod jobs;
mod listing;
mod logger;
mod recorder;

pub use credentials::Credentials;
pub use envelope::{Body, Envelope, NON_JSON_BODY};
pub use error::{ClientError, Result};
pub use listing::{fetch_all_jobs, render_jobs};
pub use logger::log_response;
pub use recorder::{ExchangeRecorder, MemoryRecorder, Record, TracingRecorder};
pub use reqwest::{Response, StatusCode};

use reqwest::{Client, RequestBuilder, Url};

/// HTTP client for the jobs endpoint
///
/// Every request carries the configured credentials as HTTP Basic auth.
/// No timeout or retry policy is applied beyond the transport defaults.
#[derive(Debug, Clone)]
pub struct JobsClient {
    /// Collection URL (e.g., "http://localhost:8080/api/jobs")
    base_url: String,
    /// Credentials attached to every request
    credentials: Credentials,
    /// HTTP client instance
    client: Client,
}

impl JobsClient {
    /// Create a new jobs client
    ///
    /// # Arguments
    /// * `base_url` - The collection URL (e.g., "http://localhost:8080/api/jobs")
    /// * `credentials` - Basic auth credentials sent with every request
    ///
    /// # Example
    /// ```
    /// use jobcheck_client::{Credentials, JobsClient};
    ///
    /// let client = JobsClient::new("http://localhost:8080/api/jobs", Credentials::new("user", "1234"));
    /// ```
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self::with_client(base_url, credentials, Client::new())
    }

    /// Create a new jobs client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, credentials: Credentials, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client,
        }
    }

    /// Get the collection URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the credentials attached to requests
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // =============================================================================
    // Request Building
    // =============================================================================

    /// Build `<base_url>/<segment>/...`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
                .pop_if_empty()
                .extend(segments);
        }

        Ok(url)
    }

    /// Attach the credential pair
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(
            &self.credentials.username,
            Some(self.credentials.password()),
        )
    }
}
