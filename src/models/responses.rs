//! Response DTOs for the control API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for `GET /update-limit`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateLimitResponse {
    /// Confirmation message
    pub message: String,
    /// The limit now in effect
    pub limit: usize,
}

impl UpdateLimitResponse {
    /// Creates a new UpdateLimitResponse
    pub fn new(limit: usize) -> Self {
        Self {
            message: format!("Playlist limit updated to {}", limit),
            limit,
        }
    }
}

/// Response body for `GET /limit`.
#[derive(Debug, Clone, Serialize)]
pub struct LimitResponse {
    /// Currently stored capacity limit
    pub limit: usize,
}

impl LimitResponse {
    /// Creates a new LimitResponse
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

/// Response body for `POST /ingest`.
#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    /// Queueing status
    pub status: String,
}

impl IngestResponse {
    /// Creates a response confirming the message was queued
    pub fn queued() -> Self {
        Self {
            status: "queued".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_limit_response_serialize() {
        let resp = UpdateLimitResponse::new(25);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("25"));
        assert!(json.contains("updated"));
    }

    #[test]
    fn test_limit_response_serialize() {
        let resp = LimitResponse::new(100);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("100"));
    }

    #[test]
    fn test_ingest_response_serialize() {
        let resp = IngestResponse::queued();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("queued"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
