//! Job API Handlers
//!
//! HTTP endpoints for the `/api/jobs` resource.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use jobcheck_core::domain::job::{Job, JobStatus};
use jobcheck_core::dto::job::{CreateJob, DateRange, UpdateJob};

use crate::api::AppState;
use crate::api::error::ApiResult;
use crate::service::job_service;

// =============================================================================
// CRUD Endpoints
// =============================================================================

/// GET /api/jobs
pub async fn list_all_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    tracing::info!("Received request to retrieve all jobs.");
    Json(job_service::list_all_jobs(&state.store))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJob>,
) -> (StatusCode, Json<Job>) {
    tracing::info!("Received request to create a new job.");
    let job = job_service::create_job(&state.store, req);
    (StatusCode::CREATED, Json(job))
}

/// GET /api/jobs/{id}
pub async fn get_job(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Job>> {
    tracing::info!("Received request to retrieve job with ID: {}", id);
    let job = job_service::get_job(&state.store, id)?;
    Ok(Json(job))
}

/// PUT /api/jobs/{id}
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateJob>,
) -> ApiResult<Json<Job>> {
    tracing::info!("Received request to update job with ID: {}", id);
    let job = job_service::update_job(&state.store, id, req)?;
    Ok(Json(job))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    tracing::info!("Received request to delete job with ID: {}", id);
    job_service::delete_job(&state.store, id)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Query Endpoints
// =============================================================================

/// GET /api/jobs/status/{status}
pub async fn list_jobs_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Json<Vec<Job>> {
    tracing::info!("Received request to retrieve jobs by status: {}", status);
    let status = JobStatus::from(status.as_str());
    Json(job_service::find_jobs_by_status(&state.store, &status))
}

/// GET /api/jobs/jobType/{job_type}
pub async fn list_jobs_by_job_type(
    State(state): State<AppState>,
    Path(job_type): Path<String>,
) -> Json<Vec<Job>> {
    tracing::info!("Received request to retrieve jobs by job type: {}", job_type);
    Json(job_service::find_jobs_by_job_type(&state.store, &job_type))
}

/// GET /api/jobs/date-range?startDate=..&endDate=..
pub async fn list_jobs_by_date_range(
    State(state): State<AppState>,
    Query(range): Query<DateRange>,
) -> Json<Vec<Job>> {
    tracing::info!(
        "Received request to retrieve jobs by date range: {} - {}",
        range.start_date,
        range.end_date
    );
    Json(job_service::find_jobs_by_date_range(&state.store, range))
}
