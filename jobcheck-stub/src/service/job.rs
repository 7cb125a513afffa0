//! Job Service
//!
//! Business logic for the jobs resource.

use chrono::{Local, NaiveDateTime};
use jobcheck_core::domain::job::{Job, JobStatus};
use jobcheck_core::dto::job::{CreateJob, DateRange, UpdateJob};
use thiserror::Error;

use crate::repository::job_repository::{self, NewJob};
use crate::store::JobStore;

/// Service error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobError {
    #[error("Job not found with ID: {0}")]
    NotFound(i64),
}

pub type Result<T> = std::result::Result<T, JobError>;

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

// =============================================================================
// CRUD
// =============================================================================

/// Create a job; missing timestamps default to the current time
pub fn create_job(store: &JobStore, req: CreateJob) -> Job {
    tracing::info!("Creating new job: {}", req.job_name);

    let now = now();
    let job = job_repository::create(
        store,
        NewJob {
            job_name: req.job_name,
            status: req.status,
            created_at: req.created_at.unwrap_or(now),
            updated_at: req.updated_at.unwrap_or(now),
            job_type: req.job_type,
            password: req.password,
        },
    );

    tracing::info!("Job created successfully with ID: {}", job.id);
    job
}

pub fn get_job(store: &JobStore, id: i64) -> Result<Job> {
    job_repository::find_by_id(store, id).ok_or(JobError::NotFound(id))
}

pub fn list_all_jobs(store: &JobStore) -> Vec<Job> {
    job_repository::list_all(store)
}

/// Update a job
///
/// `updatedAt` is always set to the current time, whatever the request says.
/// The stored password is kept when the request carries none or an empty one.
/// An unknown ID is `JobError::NotFound`, which the API answers with 404.
pub fn update_job(store: &JobStore, id: i64, req: UpdateJob) -> Result<Job> {
    tracing::info!("Updating job with ID: {}", id);

    let mut job = get_job(store, id)?;
    job.job_name = req.job_name;
    job.status = req.status;
    job.updated_at = Some(now());
    job.job_type = req.job_type;
    if let Some(password) = req.password.filter(|p| !p.is_empty()) {
        job.password = Some(password);
    }

    let job = job_repository::save(store, job).ok_or(JobError::NotFound(id))?;
    tracing::info!("Job updated successfully with ID: {}", id);
    Ok(job)
}

pub fn delete_job(store: &JobStore, id: i64) -> Result<()> {
    tracing::info!("Deleting job with ID: {}", id);

    if !job_repository::delete(store, id) {
        return Err(JobError::NotFound(id));
    }

    tracing::info!("Job deleted successfully with ID: {}", id);
    Ok(())
}

// =============================================================================
// Queries
// =============================================================================

pub fn find_jobs_by_status(store: &JobStore, status: &JobStatus) -> Vec<Job> {
    job_repository::find_by_status(store, status)
}

pub fn find_jobs_by_job_type(store: &JobStore, job_type: &str) -> Vec<Job> {
    job_repository::find_by_job_type(store, job_type)
}

pub fn find_jobs_by_date_range(store: &JobStore, range: DateRange) -> Vec<Job> {
    job_repository::find_by_date_range(store, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_body(password: &str) -> CreateJob {
        CreateJob {
            job_name: "Integration Test Job".to_string(),
            status: JobStatus::InProgress,
            created_at: None,
            updated_at: None,
            job_type: "Build".to_string(),
            password: password.to_string(),
        }
    }

    fn update_body(password: Option<&str>) -> UpdateJob {
        UpdateJob {
            job_name: "Updated Job".to_string(),
            status: JobStatus::Completed,
            updated_at: None,
            job_type: "Deploy".to_string(),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_create_fills_timestamps() {
        let store = JobStore::new();
        let job = create_job(&store, create_body("password123"));

        assert!(job.created_at.is_some());
        assert!(job.updated_at.is_some());
        assert_eq!(get_job(&store, job.id).unwrap(), job);
    }

    #[test]
    fn test_update_replaces_fields() {
        let store = JobStore::new();
        let job = create_job(&store, create_body("password123"));

        let updated = update_job(&store, job.id, update_body(Some("newpassword123"))).unwrap();
        assert_eq!(updated.job_name, "Updated Job");
        assert_eq!(updated.status, JobStatus::Completed);
        assert_eq!(updated.job_type, "Deploy");
        assert_eq!(updated.password.as_deref(), Some("newpassword123"));
        assert_eq!(updated.created_at, job.created_at);
    }

    #[test]
    fn test_update_keeps_password_when_blank() {
        let store = JobStore::new();
        let job = create_job(&store, create_body("password123"));

        let updated = update_job(&store, job.id, update_body(Some(""))).unwrap();
        assert_eq!(updated.password.as_deref(), Some("password123"));

        let updated = update_job(&store, job.id, update_body(None)).unwrap();
        assert_eq!(updated.password.as_deref(), Some("password123"));
    }

    #[test]
    fn test_missing_job() {
        let store = JobStore::new();
        assert_eq!(get_job(&store, 1), Err(JobError::NotFound(1)));
        assert_eq!(
            update_job(&store, 1, update_body(None)),
            Err(JobError::NotFound(1))
        );
        assert_eq!(delete_job(&store, 1), Err(JobError::NotFound(1)));
    }
}
