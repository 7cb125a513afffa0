//! Jobcheck Stub
//!
//! In-memory implementation of the CI/CD server's `/api/jobs` resource.
//! Used as the target of the end-to-end tests and runnable locally as
//! `jobcheck-stub`.

pub mod api;
pub mod config;
pub mod repository;
pub mod seed;
pub mod service;
pub mod store;

pub use api::auth::BasicCredentials;
pub use api::{AppState, create_router};
pub use store::JobStore;

use tokio::net::TcpListener;

/// Serve the API on an already bound listener until the task is dropped
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, create_router(state)).await
}
