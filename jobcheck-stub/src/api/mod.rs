//! API Module
//!
//! HTTP API layer of the stub server.

pub mod auth;
pub mod error;
pub mod health;
pub mod job;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::store::JobStore;
use auth::BasicCredentials;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: JobStore,
    /// Required Basic credentials; `None` leaves the API open
    pub credentials: Option<BasicCredentials>,
}

impl AppState {
    pub fn new(store: JobStore, credentials: Option<BasicCredentials>) -> Self {
        Self { store, credentials }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let jobs = Router::new()
        .route("/api/jobs", get(job::list_all_jobs).post(job::create_job))
        .route("/api/jobs/date-range", get(job::list_jobs_by_date_range))
        .route("/api/jobs/status/{status}", get(job::list_jobs_by_status))
        .route("/api/jobs/jobType/{job_type}", get(job::list_jobs_by_job_type))
        .route(
            "/api/jobs/{id}",
            get(job::get_job).put(job::update_job).delete(job::delete_job),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(jobs)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
