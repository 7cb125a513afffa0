//! Service Layer
//!
//! Business logic between the HTTP handlers and the repository.

pub mod job;

pub use job as job_service;
