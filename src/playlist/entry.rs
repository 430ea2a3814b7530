//! Playlist Entry Module
//!
//! Defines the track identifier and per-entry metadata fetched from the
//! streaming service.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Track Id ==
/// Canonical identifier of a track within the streaming service's namespace.
///
/// Stored as the full `spotify:track:<base62>` URI. Equality is exact-string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Wraps an already canonical track URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Builds the canonical URI from a bare base62 id, as it appears in
    /// shared links.
    pub fn from_base62(id: &str) -> Self {
        Self(format!("spotify:track:{}", id))
    }

    /// The canonical URI string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Playlist Entry ==
/// A single playlist member at a point in time.
///
/// `added_at` is the ordering key for eviction, ascending = oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Canonical track identifier
    pub id: TrackId,
    /// When the streaming service recorded the addition
    pub added_at: DateTime<Utc>,
}

impl PlaylistEntry {
    /// Creates a new entry.
    pub fn new(id: TrackId, added_at: DateTime<Utc>) -> Self {
        Self { id, added_at }
    }
}
