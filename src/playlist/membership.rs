//! Playlist Membership Module
//!
//! Pagination-aware retrieval of the full current playlist and the
//! membership test derived from it.

use std::sync::Arc;

use crate::error::Result;
use crate::playlist::{PlaylistEntry, PlaylistService, TrackId, PAGE_SIZE};

// == Membership ==
/// Fetches the complete playlist membership, one page at a time.
///
/// Snapshots are never cached; every query re-fetches so the staleness
/// window is a single round trip.
#[derive(Clone)]
pub struct Membership {
    /// Remote playlist access
    service: Arc<dyn PlaylistService>,
}

impl Membership {
    // == Constructor ==
    /// Creates a membership view over the given playlist service.
    pub fn new(service: Arc<dyn PlaylistService>) -> Self {
        Self { service }
    }

    // == Fetch All ==
    /// Retrieves the complete playlist as a fresh snapshot.
    ///
    /// Pages of [`PAGE_SIZE`] are fetched until the service reports no
    /// further items. Termination and offsets follow the service's raw item
    /// count, never `entries.len()`: a page can come back short of
    /// [`PAGE_SIZE`] entries because unresolvable items were dropped from
    /// it, while the playlist still continues. The loop is bounded by the
    /// playlist's actual size, not the configured capacity limit, so a
    /// limit lowered below the current membership never truncates a
    /// duplicate check.
    pub async fn fetch_all(&self) -> Result<Vec<PlaylistEntry>> {
        let mut all = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.service.list_tracks(PAGE_SIZE, offset).await?;
            all.extend(page.entries);

            if !page.has_more {
                break;
            }
            // has_more implies the raw page was full, so the next offset
            // is exactly one page further along
            offset += PAGE_SIZE;
        }

        Ok(all)
    }

    // == Contains ==
    /// Membership test against a fresh snapshot.
    pub async fn contains(&self, id: &TrackId) -> Result<bool> {
        let snapshot = self.fetch_all().await?;
        Ok(snapshot.iter().any(|entry| &entry.id == id))
    }
}
