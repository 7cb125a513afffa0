//! Job domain types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job record as returned by the server
///
/// The server owns the `id`; the harness never generates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub job_name: String,
    pub status: JobStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    pub job_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] type={}",
            self.id, self.job_name, self.status, self.job_type
        )
    }
}

/// Job status
///
/// The server stores status as free text. The well-known values get their
/// own variant; anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(untagged)]
    Other(String),
}

impl JobStatus {
    /// Wire representation of the status
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for JobStatus {
    fn from(value: &str) -> Self {
        match value {
            "Pending" => JobStatus::Pending,
            "In Progress" => JobStatus::InProgress,
            "Completed" => JobStatus::Completed,
            other => JobStatus::Other(other.to_string()),
        }
    }
}
