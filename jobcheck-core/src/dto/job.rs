//! Job request DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::job::JobStatus;

/// Body of `POST /api/jobs`
///
/// The server fills in missing timestamps with its own clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    pub job_name: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    pub job_type: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `PUT /api/jobs/{id}`
///
/// Carries no `createdAt`; the creation time is immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJob {
    pub job_name: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    pub job_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Query of `GET /api/jobs/date-range`, inclusive on `createdAt`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

impl DateRange {
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start_date && instant <= self.end_date
    }
}
