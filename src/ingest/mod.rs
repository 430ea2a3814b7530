//! Ingestion Module
//!
//! Turns inbound chat messages into playlist mutations: extraction,
//! deduplicated insertion, and capacity enforcement, one message at a time.

mod orchestrator;
mod worker;

// Re-export public types
pub use orchestrator::Orchestrator;
pub use worker::{ingest_queue, spawn_ingest_worker, ChatMessage, QUEUE_DEPTH};
