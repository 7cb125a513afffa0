//! Request payloads used by the checks

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use jobcheck_core::domain::job::JobStatus;
use jobcheck_core::dto::job::{CreateJob, DateRange, UpdateJob};

/// Job type every payload uses, and the one the type filter asks for
pub const BUILD_JOB_TYPE: &str = "Build";

fn timestamp(year: i32, month: u32, day: u32, hour: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(hour, 0, 0))
}

/// Body of the create check
pub fn new_job() -> CreateJob {
    CreateJob {
        job_name: "New CI/CD Job".to_string(),
        status: JobStatus::Pending,
        created_at: timestamp(2024, 8, 15, 12),
        updated_at: timestamp(2024, 8, 15, 12),
        job_type: BUILD_JOB_TYPE.to_string(),
        password: "securepassword123".to_string(),
    }
}

/// Body of the update check
pub fn updated_job() -> UpdateJob {
    UpdateJob {
        job_name: "Updated CI/CD Job".to_string(),
        status: JobStatus::Completed,
        updated_at: timestamp(2024, 8, 15, 13),
        job_type: BUILD_JOB_TYPE.to_string(),
        password: Some("newsecurepassword123".to_string()),
    }
}

/// Job seeded by a per-check fixture
///
/// Timestamps are left to the server clock so the seed always falls inside
/// [`recent_range`].
pub fn fixture_job() -> CreateJob {
    CreateJob {
        job_name: "Fixture CI/CD Job".to_string(),
        status: JobStatus::Pending,
        created_at: None,
        updated_at: None,
        job_type: BUILD_JOB_TYPE.to_string(),
        password: "fixturepassword123".to_string(),
    }
}

/// One day either side of the local clock
pub fn recent_range() -> DateRange {
    let now = Local::now().naive_local();
    DateRange {
        start_date: now - TimeDelta::days(1),
        end_date: now + TimeDelta::days(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_job_wire_shape() {
        assert_eq!(
            serde_json::to_value(new_job()).unwrap(),
            json!({
                "jobName": "New CI/CD Job",
                "status": "Pending",
                "createdAt": "2024-08-15T12:00:00",
                "updatedAt": "2024-08-15T12:00:00",
                "jobType": "Build",
                "password": "securepassword123"
            })
        );
    }

    #[test]
    fn test_updated_job_wire_shape() {
        assert_eq!(
            serde_json::to_value(updated_job()).unwrap(),
            json!({
                "jobName": "Updated CI/CD Job",
                "status": "Completed",
                "updatedAt": "2024-08-15T13:00:00",
                "jobType": "Build",
                "password": "newsecurepassword123"
            })
        );
    }

    #[test]
    fn test_recent_range_contains_now() {
        let range = recent_range();
        assert!(range.contains(Local::now().naive_local()));
    }
}
