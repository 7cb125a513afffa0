//! Job Repository
//!
//! Handles all storage operations related to jobs.

use chrono::NaiveDateTime;
use jobcheck_core::domain::job::{Job, JobStatus};
use jobcheck_core::dto::job::DateRange;

use crate::store::JobStore;

/// Fields of a job before the store assigns an ID
pub struct NewJob {
    pub job_name: String,
    pub status: JobStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub job_type: String,
    pub password: String,
}

/// Insert a job and return it with its assigned ID
pub fn create(store: &JobStore, new_job: NewJob) -> Job {
    let mut tables = store.write();
    let id = tables.next_id();

    let job = Job {
        id,
        job_name: new_job.job_name,
        status: new_job.status,
        created_at: Some(new_job.created_at),
        updated_at: Some(new_job.updated_at),
        job_type: new_job.job_type,
        password: Some(new_job.password),
    };

    tables.jobs.insert(id, job.clone());
    job
}

/// Find a job by ID
pub fn find_by_id(store: &JobStore, id: i64) -> Option<Job> {
    store.read().jobs.get(&id).cloned()
}

/// List all jobs ordered by ID
pub fn list_all(store: &JobStore) -> Vec<Job> {
    store.read().jobs.values().cloned().collect()
}

/// Replace a stored job; returns `None` if it does not exist
pub fn save(store: &JobStore, job: Job) -> Option<Job> {
    let mut tables = store.write();
    let slot = tables.jobs.get_mut(&job.id)?;
    *slot = job.clone();
    Some(job)
}

/// Delete a job; returns whether it existed
pub fn delete(store: &JobStore, id: i64) -> bool {
    store.write().jobs.remove(&id).is_some()
}

pub fn find_by_status(store: &JobStore, status: &JobStatus) -> Vec<Job> {
    filter(store, |job| &job.status == status)
}

pub fn find_by_job_type(store: &JobStore, job_type: &str) -> Vec<Job> {
    filter(store, |job| job.job_type == job_type)
}

/// Jobs whose `createdAt` lies within the range, bounds included
pub fn find_by_date_range(store: &JobStore, range: DateRange) -> Vec<Job> {
    filter(store, |job| job.created_at.is_some_and(|at| range.contains(at)))
}

fn filter(store: &JobStore, predicate: impl Fn(&Job) -> bool) -> Vec<Job> {
    store
        .read()
        .jobs
        .values()
        .filter(|job| predicate(job))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn new_job(name: &str, status: JobStatus, created: &str) -> NewJob {
        NewJob {
            job_name: name.to_string(),
            status,
            created_at: ts(created),
            updated_at: ts(created),
            job_type: "Build".to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let store = JobStore::new();
        let a = create(&store, new_job("a", JobStatus::Pending, "2024-01-01T00:00:00"));
        let b = create(&store, new_job("b", JobStatus::Pending, "2024-01-01T00:00:00"));
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = JobStore::new();
        let a = create(&store, new_job("a", JobStatus::Pending, "2024-01-01T00:00:00"));
        assert!(delete(&store, a.id));
        assert!(!delete(&store, a.id));

        let b = create(&store, new_job("b", JobStatus::Pending, "2024-01-01T00:00:00"));
        assert_eq!(b.id, 2);
        assert!(find_by_id(&store, 1).is_none());
    }

    #[test]
    fn test_save_requires_existing_job() {
        let store = JobStore::new();
        let mut job = create(&store, new_job("a", JobStatus::Pending, "2024-01-01T00:00:00"));

        job.status = JobStatus::Completed;
        assert!(save(&store, job.clone()).is_some());
        assert_eq!(find_by_id(&store, job.id).unwrap().status, JobStatus::Completed);

        job.id = 99;
        assert!(save(&store, job).is_none());
    }

    #[test]
    fn test_filters() {
        let store = JobStore::new();
        create(&store, new_job("a", JobStatus::Pending, "2024-01-01T00:00:00"));
        create(&store, new_job("b", JobStatus::Completed, "2024-06-01T00:00:00"));

        assert_eq!(find_by_status(&store, &JobStatus::Pending).len(), 1);
        assert_eq!(find_by_job_type(&store, "Build").len(), 2);
        assert_eq!(find_by_job_type(&store, "Deploy").len(), 0);

        let range = DateRange {
            start_date: ts("2024-05-01T00:00:00"),
            end_date: ts("2024-06-01T00:00:00"),
        };
        let found = find_by_date_range(&store, range);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].job_name, "b");
    }
}
