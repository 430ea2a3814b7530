//! API Routes
//!
//! Configures the Axum router with all control endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, ingest_handler, limit_handler, update_limit_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /update-limit?size=N` - Set the playlist capacity limit
/// - `GET /limit` - Read the current capacity limit
/// - `POST /ingest` - Deliver one chat message for ingestion
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/update-limit", get(update_limit_handler))
        .route("/limit", get(limit_handler))
        .route("/ingest", post(ingest_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
