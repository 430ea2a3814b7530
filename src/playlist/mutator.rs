//! Playlist Mutator Module
//!
//! Idempotent insertion and single-step, oldest-first eviction under the
//! currently configured capacity limit.

use std::sync::Arc;

use crate::config::LimitStore;
use crate::error::{BridgeError, Result};
use crate::playlist::{Membership, PlaylistEntry, PlaylistService, TrackId};

// == Insert Result ==
/// Outcome of an insert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertResult {
    /// The track was appended to the playlist
    Added,
    /// The track was already a member; no add call was made
    AlreadyPresent,
}

// == Eviction Result ==
/// Outcome of a capacity enforcement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvictionResult {
    /// Membership was within the limit
    NoneEvicted,
    /// The oldest entry was removed
    Evicted(TrackId),
}

// == Mutator ==
/// Mutating operations on the remote playlist.
///
/// The capacity limit is read fresh from the store before every eviction
/// decision, never snapshotted across calls.
#[derive(Clone)]
pub struct Mutator {
    /// Remote playlist access
    service: Arc<dyn PlaylistService>,
    /// Fresh-snapshot membership view
    membership: Membership,
    /// Durable capacity limit
    limits: LimitStore,
}

impl Mutator {
    // == Constructor ==
    /// Creates a mutator over the given playlist service and limit store.
    pub fn new(service: Arc<dyn PlaylistService>, limits: LimitStore) -> Self {
        let membership = Membership::new(service.clone());
        Self {
            service,
            membership,
            limits,
        }
    }

    // == Insert ==
    /// Inserts a track unless it is already a member.
    ///
    /// The membership check runs against a fresh snapshot, so calling insert
    /// twice with the same id never produces two entries and never errors on
    /// the second call.
    pub async fn insert(&self, id: &TrackId) -> Result<InsertResult> {
        if self.membership.contains(id).await? {
            return Ok(InsertResult::AlreadyPresent);
        }

        self.service.add_track(id).await?;
        Ok(InsertResult::Added)
    }

    // == Enforce Capacity ==
    /// Removes the oldest entry if membership exceeds the current limit.
    ///
    /// Removes at most one entry per call; the orchestrator invokes it once
    /// per added track, which bounds transient growth to one-over-limit. An
    /// eviction failure never undoes the insert that triggered it.
    pub async fn enforce_capacity(&self) -> Result<EvictionResult> {
        let limit = self.limits.get()?;
        let snapshot = self.membership.fetch_all().await?;

        if snapshot.len() <= limit {
            return Ok(EvictionResult::NoneEvicted);
        }

        let oldest = oldest_entry(&snapshot).ok_or_else(|| {
            BridgeError::Inconsistency("playlist over limit but snapshot is empty".to_string())
        })?;

        self.service.remove_track(&oldest.id).await?;
        Ok(EvictionResult::Evicted(oldest.id.clone()))
    }
}

// == Selection ==
/// The entry with the minimum added_at; ties keep the first fetched entry.
fn oldest_entry(snapshot: &[PlaylistEntry]) -> Option<&PlaylistEntry> {
    snapshot.iter().fold(None, |best, entry| match best {
        Some(current) if current.added_at <= entry.added_at => Some(current),
        _ => Some(entry),
    })
}
