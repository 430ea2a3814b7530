//! Playlist Bridge - mirrors shared track links into a capped playlist
//!
//! Watches a chat group for track links and keeps a bounded-size playlist in
//! sync: deduplicated insertion, oldest-first eviction, runtime-adjustable
//! capacity limit.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod models;
pub mod playlist;
pub mod spotify;

pub use api::AppState;
pub use config::{LimitStore, Settings};
pub use ingest::{ingest_queue, spawn_ingest_worker, ChatMessage, Orchestrator};
