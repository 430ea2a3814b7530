//! API Handlers
//!
//! HTTP request handlers for each control endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tokio::sync::mpsc;
use tracing::info;

use crate::config::LimitStore;
use crate::error::{BridgeError, Result};
use crate::ingest::ChatMessage;
use crate::models::{
    HealthResponse, IngestRequest, IngestResponse, LimitResponse, UpdateLimitParams,
    UpdateLimitResponse,
};

// == App State ==
/// Application state shared across all handlers.
///
/// The limit store reads and writes the config file directly, so no lock is
/// held here; the ingest sender feeds the sequential worker queue.
#[derive(Clone)]
pub struct AppState {
    /// Durable capacity limit
    pub limits: LimitStore,
    /// Producer side of the ingestion queue
    pub ingest_tx: mpsc::Sender<ChatMessage>,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(limits: LimitStore, ingest_tx: mpsc::Sender<ChatMessage>) -> Self {
        Self { limits, ingest_tx }
    }
}

/// Handler for GET /update-limit?size=N
///
/// Validates and persists a new capacity limit. Missing, non-numeric, and
/// non-positive sizes are rejected with 400 and leave the stored limit
/// untouched.
pub async fn update_limit_handler(
    State(state): State<AppState>,
    Query(params): Query<UpdateLimitParams>,
) -> Result<Json<UpdateLimitResponse>> {
    let size = params.parse_size()?;
    let limit = state.limits.set(size)?;

    info!(limit, "playlist limit updated");
    Ok(Json(UpdateLimitResponse::new(limit)))
}

/// Handler for GET /limit
///
/// Returns the currently stored capacity limit.
pub async fn limit_handler(State(state): State<AppState>) -> Result<Json<LimitResponse>> {
    let limit = state.limits.get()?;
    Ok(Json(LimitResponse::new(limit)))
}

/// Handler for POST /ingest
///
/// Chat-transport adapter: queues one `(group, text)` event for the
/// sequential ingest worker. Returns 202 once the message is queued;
/// processing outcomes are reported through logs, not this response.
pub async fn ingest_handler(
    State(state): State<AppState>,
    Json(req): Json<IngestRequest>,
) -> Result<(StatusCode, Json<IngestResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(BridgeError::Validation(error_msg));
    }

    state
        .ingest_tx
        .send(ChatMessage {
            group: req.group,
            body: req.text,
        })
        .await
        .map_err(|_| BridgeError::Transport("ingest worker unavailable".to_string()))?;

    Ok((StatusCode::ACCEPTED, Json(IngestResponse::queued())))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
