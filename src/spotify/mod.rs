//! Spotify Module
//!
//! Streaming-service implementation of the playlist interface: paginated
//! track listing, add/remove, and transparent access-token refresh.

mod client;
mod types;

// Re-export public types
pub use client::{Credentials, SpotifyClient};
pub use types::{TokenResponse, TracksPage};
