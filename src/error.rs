//! Error types for the playlist bridge
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Bridge Error Enum ==
/// Unified error type for the playlist bridge.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Invalid input at a boundary (bad limit value, bad request data)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Streaming service or chat transport unreachable or rejected the call
    #[error("Transport error: {0}")]
    Transport(String),

    /// Credential refresh failed after the retry-once policy
    #[error("Auth error: {0}")]
    Auth(String),

    /// Playlist changed between fetch and act; next cycle self-corrects
    #[error("Playlist inconsistency: {0}")]
    Inconsistency(String),

    /// Configuration storage could not be read or written
    #[error("Config storage error: {0}")]
    Config(#[from] std::io::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            BridgeError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            BridgeError::Transport(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            BridgeError::Auth(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            BridgeError::Inconsistency(msg) => (StatusCode::CONFLICT, msg.clone()),
            BridgeError::Config(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the playlist bridge.
pub type Result<T> = std::result::Result<T, BridgeError>;
