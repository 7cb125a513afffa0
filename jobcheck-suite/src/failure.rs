//! Check failures
//!
//! Every way a check can fail ends up as one of these, with a message that
//! names the operation. Transport faults never escape a check unconverted.

use jobcheck_client::{ClientError, Envelope, StatusCode};
use thiserror::Error;
use tracing::error;

/// Why a check failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckFailure {
    /// The request never produced a response
    #[error("Failed to {operation}: request error: {message}")]
    Transport { operation: String, message: String },

    /// The server answered with the wrong status code
    #[error("Failed to {operation}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        operation: String,
        expected: u16,
        actual: u16,
    },

    /// The body did not have the expected structure
    #[error("Failed to {operation}: {detail}")]
    UnexpectedShape { operation: String, detail: String },

    /// A deleted job could still be fetched
    #[error("Job with ID: {job_id} still exists after delete")]
    StillPresent { job_id: i64 },

    /// The per-check fixture could not prepare a job
    #[error("Fixture setup failed: {0}")]
    Fixture(String),
}

impl CheckFailure {
    /// Convert a transport fault, logging it at ERROR
    pub fn transport(operation: &str, err: ClientError) -> Self {
        error!("Request failed: {}", err);
        Self::Transport {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }

    pub fn shape(operation: &str, detail: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            operation: operation.to_string(),
            detail: detail.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Assert the envelope carries `expected`
pub fn expect_status(
    envelope: &Envelope,
    expected: StatusCode,
    operation: &str,
) -> Result<(), CheckFailure> {
    if envelope.status == expected {
        return Ok(());
    }

    Err(CheckFailure::UnexpectedStatus {
        operation: operation.to_string(),
        expected: expected.as_u16(),
        actual: envelope.status.as_u16(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_status_match() {
        let envelope = Envelope::from_parts(StatusCode::CREATED, b"{}");
        assert!(expect_status(&envelope, StatusCode::CREATED, "create a new job").is_ok());
    }

    #[test]
    fn test_expect_status_mismatch_names_operation() {
        let envelope = Envelope::from_parts(StatusCode::NOT_FOUND, b"");
        let failure =
            expect_status(&envelope, StatusCode::OK, "get job with ID: 1").unwrap_err();

        assert_eq!(
            failure.to_string(),
            "Failed to get job with ID: 1: expected status 200, got 404"
        );
    }

    #[test]
    fn test_transport_message() {
        let failure = CheckFailure::transport(
            "get all jobs",
            ClientError::InvalidUrl("jobs".to_string()),
        );

        assert!(failure.is_transport());
        assert_eq!(
            failure.to_string(),
            "Failed to get all jobs: request error: Invalid base URL: jobs"
        );
    }
}
