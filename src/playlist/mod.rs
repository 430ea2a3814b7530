//! Playlist Module
//!
//! Membership tracking and bounded-size maintenance for the mirrored
//! playlist. The playlist itself lives on the streaming service; everything
//! here works against fresh snapshots fetched through [`PlaylistService`].

mod entry;
mod membership;
mod mutator;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
pub(crate) mod testutil;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use entry::{PlaylistEntry, TrackId};
pub use membership::Membership;
pub use mutator::{EvictionResult, InsertResult, Mutator};

// == Public Constants ==
/// Tracks requested per page; the service caps list requests at 100.
pub const PAGE_SIZE: usize = 100;

// == Track Page ==
/// One page of a playlist listing.
///
/// `has_more` is derived from the raw item count the service reported, not
/// from `entries.len()`: unresolvable items are dropped from `entries` but
/// still occupy playlist positions, so only the raw count can say whether
/// the playlist continues past this page.
#[derive(Debug, Clone)]
pub struct TrackPage {
    /// Resolvable entries of this page, in service order
    pub entries: Vec<PlaylistEntry>,
    /// Whether the playlist continues past this page
    pub has_more: bool,
}

// == Playlist Service Trait ==
/// Narrow interface over the remote playlist.
///
/// Implemented by the Spotify client in production and by in-memory fakes in
/// tests. Credential handling is the implementor's concern.
#[async_trait]
pub trait PlaylistService: Send + Sync {
    /// Returns up to `limit` entries starting at `offset`, in service order.
    async fn list_tracks(&self, limit: usize, offset: usize) -> Result<TrackPage>;

    /// Appends a track to the playlist.
    async fn add_track(&self, id: &TrackId) -> Result<()>;

    /// Removes a track from the playlist.
    async fn remove_track(&self, id: &TrackId) -> Result<()>;
}
