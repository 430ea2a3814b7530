//! Playlist Bridge - mirrors shared track links into a capped playlist
//!
//! Watches a chat group for track links and keeps a bounded-size playlist in
//! sync: deduplicated insertion, oldest-first eviction, runtime-adjustable
//! capacity limit.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playlist_bridge::api::{create_router, AppState};
use playlist_bridge::config::{LimitStore, Settings};
use playlist_bridge::ingest::{ingest_queue, spawn_ingest_worker, Orchestrator};
use playlist_bridge::playlist::Mutator;
use playlist_bridge::spotify::SpotifyClient;

/// Main entry point for the playlist bridge.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load settings from environment variables
/// 3. Build the Spotify client and playlist mutator
/// 4. Start the sequential ingest worker on its bounded queue
/// 5. Create Axum router with the control endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playlist_bridge=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Playlist Bridge");

    // Load settings from environment variables
    let settings = Settings::from_env();
    if settings.client_id.is_empty() || settings.refresh_token.is_empty() {
        warn!("Spotify credentials are not configured; playlist calls will fail");
    }
    info!(
        "Settings loaded: group={}, playlist={}, port={}, limit_file={}",
        settings.group_name,
        settings.playlist_id,
        settings.server_port,
        settings.limit_file.display()
    );

    // Durable capacity limit
    let limits = LimitStore::from_settings(&settings);
    let current_limit = limits.get().context("failed to read playlist limit")?;
    info!("Playlist limit: {}", current_limit);

    // Playlist pipeline: Spotify client -> mutator -> orchestrator
    let service = Arc::new(SpotifyClient::from_settings(&settings));
    let mutator = Mutator::new(service, limits.clone());
    let orchestrator = Orchestrator::new(mutator);

    // Start the sequential ingest worker
    let (ingest_tx, ingest_rx) = ingest_queue();
    let worker_handle = spawn_ingest_worker(ingest_rx, orchestrator, settings.group_name.clone());
    info!("Ingest worker started");

    // Create router with all endpoints
    let state = AppState::new(limits, ingest_tx);
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(worker_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the ingest worker and allows graceful shutdown.
async fn shutdown_signal(worker_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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

    // Abort the ingest worker
    worker_handle.abort();
    warn!("Ingest worker aborted");
}
