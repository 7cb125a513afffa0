//! Jobcheck Core
//!
//! Wire types for the CI/CD server's `/api/jobs` resource.
//!
//! This crate contains:
//! - Domain types: the `Job` record as the server returns it
//! - DTOs: request bodies sent by the harness

pub mod domain;
pub mod dto;
