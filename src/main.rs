//! Sugar - nutrition lookup service
//!
//! Serves food searches and carbohydrate details, cached in memory with LRU
//! eviction and TTL expiration.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sugar::fdc::FdcClient;
use sugar::{create_router, server, spawn_cleanup_task, storage, AppState, Config};

/// Main entry point for the nutrition lookup server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the Food Data Central client and open storage
/// 4. Create both caches and start the background TTL cleanup task
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM, bounded by `SHUTDOWN_TIMEOUT`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sugar=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sugar nutrition server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_size={}, cache_ttl={}s, port={}, cleanup_interval={}s, fdc_timeout={}s, storage_dir={:?}",
        config.cache_size,
        config.cache_ttl,
        config.server_port,
        config.cleanup_interval,
        config.fdc_timeout,
        config.storage_dir
    );

    let provider = FdcClient::connect(config.fdc_config())
        .context("failed to set up Food Data Central client")?;
    let storage = storage::open(&config.storage_dir)
        .await
        .context("failed to open storage")?;
    if config.storage_dir.trim().is_empty() {
        warn!("STORAGE_DIR is empty, lookup results will not survive a restart");
    }

    let state = AppState::from_config(&config, storage, Arc::new(provider))
        .context("invalid cache configuration")?;
    info!("Caches initialized");

    let cleanup_handle = spawn_cleanup_task(state.clone(), config.cleanup_interval);
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    server::serve(
        listener,
        app,
        shutdown_signal(cleanup_handle),
        Duration::from_secs(config.shutdown_timeout),
    )
    .await
    .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then aborts the cleanup task.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
