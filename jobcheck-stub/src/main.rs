use anyhow::Context;
use jobcheck_stub::config::StubConfig;
use jobcheck_stub::{AppState, JobStore, seed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobcheck_stub=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting jobcheck stub server...");

    let config = StubConfig::from_env();

    let store = JobStore::new();
    if config.seed {
        seed::seed_jobs(&store);
    }

    if config.credentials.is_none() {
        tracing::warn!("Basic authentication disabled");
    }

    let state = AppState::new(store, config.credentials);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    jobcheck_stub::serve(listener, state)
        .await
        .context("Failed to start server")
}
