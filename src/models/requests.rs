//! Request DTOs for the control API
//!
//! Defines the structure of incoming HTTP request parameters and bodies.

use serde::Deserialize;

use crate::error::{BridgeError, Result};

/// Query parameters of `GET /update-limit?size=N`.
///
/// `size` arrives as a raw string so that missing and non-numeric values can
/// both be rejected with a 400 and a useful message.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLimitParams {
    /// Requested capacity limit, as given in the query string
    #[serde(default)]
    pub size: Option<String>,
}

impl UpdateLimitParams {
    /// Validates and parses the requested limit.
    ///
    /// Missing, non-numeric, and non-positive values are all validation
    /// errors; the stored limit is not touched in any of those cases.
    pub fn parse_size(&self) -> Result<usize> {
        let raw = self
            .size
            .as_deref()
            .ok_or_else(|| BridgeError::Validation("missing size parameter".to_string()))?;

        let size: usize = raw.trim().parse().map_err(|_| {
            BridgeError::Validation(format!("invalid size parameter: {}", raw))
        })?;

        if size == 0 {
            return Err(BridgeError::Validation(
                "size must be a positive integer".to_string(),
            ));
        }
        Ok(size)
    }
}

/// Body of `POST /ingest`, the chat-transport adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestRequest {
    /// Group the message was posted in
    pub group: String,
    /// Message text body
    pub text: String,
}

impl IngestRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.group.is_empty() {
            return Some("group cannot be empty".to_string());
        }
        if self.text.is_empty() {
            return Some("text cannot be empty".to_string());
        }
        None
    }
}
