//! Shared helpers for the end-to-end tests

#![allow(dead_code)]

use axum::{Router, extract::Request, middleware::Next};
use jobcheck_client::Credentials;
use jobcheck_stub::{AppState, BasicCredentials, JobStore, create_router, seed};
use jobcheck_suite::HarnessConfig;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const USERNAME: &str = "user";
pub const PASSWORD: &str = "1234";

/// A server running on an ephemeral port for the duration of a test
pub struct TestServer {
    pub base_url: String,
    pub store: JobStore,
    requests: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Seeded stub requiring the default credentials
    pub async fn stub() -> Self {
        let store = JobStore::new();
        seed::seed_jobs(&store);
        let state = AppState::new(store.clone(), Some(BasicCredentials::new(USERNAME, PASSWORD)));
        Self::start(create_router(state), store).await
    }

    /// Any router, e.g. one that misbehaves on purpose
    pub async fn custom(router: Router) -> Self {
        Self::start(router, JobStore::new()).await
    }

    async fn start(router: Router, store: JobStore) -> Self {
        let requests = Arc::new(AtomicUsize::new(0));
        let counter = requests.clone();
        let router = router.layer(axum::middleware::from_fn(move |req: Request, next: Next| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                next.run(req).await
            }
        }));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/api/jobs", addr),
            store,
            requests,
            handle,
        }
    }

    /// Requests received since the last call
    pub fn take_request_count(&self) -> usize {
        self.requests.swap(0, Ordering::SeqCst)
    }

    pub fn config(&self) -> HarnessConfig {
        HarnessConfig::new(self.base_url.clone(), Credentials::new(USERNAME, PASSWORD))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Base URL on which nothing listens
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/jobs", addr)
}
