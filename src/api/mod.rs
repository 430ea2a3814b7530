//! API Module
//!
//! HTTP control surface: capacity-limit management, the chat-transport
//! ingest adapter, and health checks.

mod handlers;
mod routes;

// Re-export public types
pub use handlers::AppState;
pub use routes::create_router;
