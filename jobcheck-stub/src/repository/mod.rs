//! Repository layer
//!
//! Data access over the in-memory store.

pub mod job;

pub use job as job_repository;
