//! Spotify Wire Types
//!
//! Response bodies of the Web API endpoints the bridge talks to.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::playlist::{PlaylistEntry, TrackId};

// == Token Response ==
/// Body of a successful refresh-token grant.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Short-lived bearer token for API calls
    pub access_token: String,
}

// == Tracks Page ==
/// One page of a playlist track listing.
#[derive(Debug, Deserialize)]
pub struct TracksPage {
    /// Entries in playlist order
    pub items: Vec<PageItem>,
}

/// A single listed playlist item.
#[derive(Debug, Deserialize)]
pub struct PageItem {
    /// When the track was added to the playlist
    pub added_at: DateTime<Utc>,
    /// Track reference; null for tracks the service can no longer resolve
    pub track: Option<TrackRef>,
}

/// Reference to the underlying track.
#[derive(Debug, Deserialize)]
pub struct TrackRef {
    /// Canonical track URI
    pub uri: String,
}

impl TracksPage {
    /// Converts the page into playlist entries, dropping unresolvable items.
    pub fn into_entries(self) -> Vec<PlaylistEntry> {
        self.items
            .into_iter()
            .filter_map(|item| {
                item.track
                    .map(|track| PlaylistEntry::new(TrackId::new(track.uri), item.added_at))
            })
            .collect()
    }
}
