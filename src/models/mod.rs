//! Models Module
//!
//! Request and response DTOs for the control API.

mod requests;
mod responses;

// Re-export public types
pub use requests::{IngestRequest, UpdateLimitParams};
pub use responses::{
    ErrorResponse, HealthResponse, IngestResponse, LimitResponse, UpdateLimitResponse,
};
