//! Data transfer objects
//!
//! Request payloads sent to the jobs endpoint.

pub mod job;
