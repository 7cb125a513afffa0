//! Startup data
//!
//! Seeds the store with the same three jobs the real server starts with.

use chrono::Local;
use jobcheck_core::domain::job::JobStatus;

use crate::repository::job_repository::{self, NewJob};
use crate::store::JobStore;

pub fn seed_jobs(store: &JobStore) {
    tracing::info!("Seeding job store...");

    let seeds = [
        ("Build Project", JobStatus::InProgress, "Build", "password1"),
        ("Deploy Project", JobStatus::Pending, "Deploy", "password2"),
        ("Test Project", JobStatus::Completed, "Test", "password3"),
    ];

    for (name, status, job_type, password) in seeds {
        let now = Local::now().naive_local();
        let job = job_repository::create(
            store,
            NewJob {
                job_name: name.to_string(),
                status,
                created_at: now,
                updated_at: now,
                job_type: job_type.to_string(),
                password: password.to_string(),
            },
        );
        tracing::info!("Created Job: {}", job);
    }

    tracing::info!("Job store seeding completed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_creates_three_jobs() {
        let store = JobStore::new();
        seed_jobs(&store);

        let jobs = job_repository::list_all(&store);
        let names: Vec<_> = jobs.iter().map(|job| (job.id, job.job_name.as_str())).collect();
        assert_eq!(
            names,
            vec![(1, "Build Project"), (2, "Deploy Project"), (3, "Test Project")]
        );
    }
}
