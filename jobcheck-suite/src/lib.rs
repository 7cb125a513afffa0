//! Jobcheck Suite
//!
//! Scenario checks for the CI/CD server's `/api/jobs` resource.
//!
//! Architecture:
//! - Configuration: base URL, credentials, and how checks find their job
//! - Fixtures: one bracket around the whole run, one per check
//! - Checks: list, create, read, update, delete (plus optional filter checks)
//! - Runner: executes checks one after another and collects a report
//!
//! A failing check never stops the run; every check is attempted and the
//! report says which ones failed and why.

pub mod checks;
pub mod config;
pub mod failure;
pub mod fixture;
pub mod payloads;
pub mod runner;

pub use checks::{CheckContext, ScenarioCheck};
pub use config::{HarnessConfig, JobTarget};
pub use failure::CheckFailure;
pub use runner::{CheckOutcome, SuiteReport, SuiteRunner};
