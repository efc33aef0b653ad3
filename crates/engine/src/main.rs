//! HEMA catalog engine - Main entry point.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hema_engine::api::{self, middleware::build_cors_layer};
use hema_engine::infrastructure::{clock::SystemClock, config::AppConfig};
use hema_engine::stores::CatalogStore;
use hema_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hema_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HEMA catalog engine");

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr()?;
    tracing::info!(
        environment = %config.environment,
        snapshot_dir = ?config.snapshot_dir,
        request_timeout = ?config.request_timeout,
        "Configuration loaded"
    );

    let source = config.snapshot_source();
    let store =
        CatalogStore::load(&source).with_context(|| format!("failed to load catalog from {source:?}"))?;

    let counts = store.counts();
    tracing::info!(
        sword_masters = counts.sword_masters,
        fighting_books = counts.fighting_books,
        chapters = counts.chapters,
        techniques = counts.techniques,
        "Catalog loaded"
    );

    let app = Arc::new(App::new(
        Arc::new(store),
        Arc::new(SystemClock::new()),
        config.environment.clone(),
    ));

    let cors = build_cors_layer(&config.cors_allowed_origins);
    if cors.is_some() {
        tracing::info!(origins = ?config.cors_allowed_origins, "CORS enabled");
    }
    let router = api::router(app, cors, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
