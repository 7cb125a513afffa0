//! Health Check API Handler

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::api::AppState;

/// GET /health
/// Reports liveness; never requires credentials
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    tracing::debug!("Health check ({} jobs stored)", state.store.read().jobs.len());
    (StatusCode::OK, "OK")
}
