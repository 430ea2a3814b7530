//! In-memory playlist fake shared by unit and property tests.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use crate::config::LimitStore;
use crate::error::{BridgeError, Result};
use crate::playlist::{PlaylistEntry, PlaylistService, TrackId, TrackPage};

/// Creates a limit store over a throwaway file.
///
/// The TempDir must stay alive for the store's lifetime.
pub(crate) fn test_limits(default_limit: usize) -> (TempDir, LimitStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = LimitStore::new(dir.path().join("bridge.conf"), default_limit);
    (dir, store)
}

/// In-memory stand-in for the remote playlist.
///
/// Entries receive strictly increasing added_at timestamps in insertion
/// order, mirroring how the real service records additions. A `None` slot
/// models an item the service cannot resolve to a track: it occupies a
/// playlist position but yields no entry when listed.
pub(crate) struct FakePlaylist {
    tracks: Mutex<Vec<Option<PlaylistEntry>>>,
    next_ts: AtomicI64,
    add_calls: AtomicUsize,
    fail_list: AtomicBool,
    fail_remove: AtomicBool,
}

impl FakePlaylist {
    pub(crate) fn new() -> Self {
        Self {
            tracks: Mutex::new(Vec::new()),
            next_ts: AtomicI64::new(1_700_000_000),
            add_calls: AtomicUsize::new(0),
            fail_list: AtomicBool::new(false),
            fail_remove: AtomicBool::new(false),
        }
    }

    /// Pre-populates the playlist from bare base62 ids, oldest first.
    pub(crate) fn seed(&self, ids: &[&str]) {
        for id in ids {
            self.push(TrackId::from_base62(id));
        }
    }

    fn push(&self, id: TrackId) {
        let ts = self.next_ts.fetch_add(1, Ordering::SeqCst);
        let added_at = Utc.timestamp_opt(ts, 0).single().expect("valid timestamp");
        self.tracks
            .lock()
            .expect("fake playlist lock")
            .push(Some(PlaylistEntry::new(id, added_at)));
    }

    /// Appends an unresolvable item: it counts toward pagination but is
    /// dropped from listed entries.
    pub(crate) fn seed_unresolvable(&self) {
        self.next_ts.fetch_add(1, Ordering::SeqCst);
        self.tracks.lock().expect("fake playlist lock").push(None);
    }

    /// Current member ids in service order.
    pub(crate) fn ids(&self) -> Vec<String> {
        self.tracks
            .lock()
            .expect("fake playlist lock")
            .iter()
            .flatten()
            .map(|entry| entry.id.as_str().to_string())
            .collect()
    }

    /// Number of resolvable members.
    pub(crate) fn len(&self) -> usize {
        self.tracks
            .lock()
            .expect("fake playlist lock")
            .iter()
            .flatten()
            .count()
    }

    /// Number of add_track calls seen, for idempotence assertions.
    pub(crate) fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    /// Makes the next list_tracks call fail with a transport error.
    pub(crate) fn fail_next_list(&self) {
        self.fail_list.store(true, Ordering::SeqCst);
    }

    /// Makes the next remove_track call fail with a transport error.
    pub(crate) fn fail_next_remove(&self) {
        self.fail_remove.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl PlaylistService for FakePlaylist {
    async fn list_tracks(&self, limit: usize, offset: usize) -> Result<TrackPage> {
        if self.fail_list.swap(false, Ordering::SeqCst) {
            return Err(BridgeError::Transport("injected list failure".to_string()));
        }

        let tracks = self.tracks.lock().expect("fake playlist lock");
        if offset >= tracks.len() {
            return Ok(TrackPage {
                entries: Vec::new(),
                has_more: false,
            });
        }
        let end = (offset + limit).min(tracks.len());
        // Unresolvable slots are dropped after the raw slice is taken,
        // like the real service
        let entries = tracks[offset..end].iter().filter_map(Clone::clone).collect();
        Ok(TrackPage {
            entries,
            has_more: end < tracks.len(),
        })
    }

    async fn add_track(&self, id: &TrackId) -> Result<()> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        self.push(id.clone());
        Ok(())
    }

    async fn remove_track(&self, id: &TrackId) -> Result<()> {
        if self.fail_remove.swap(false, Ordering::SeqCst) {
            return Err(BridgeError::Transport(
                "injected remove failure".to_string(),
            ));
        }

        let mut tracks = self.tracks.lock().expect("fake playlist lock");
        let before = tracks.len();
        tracks.retain(|slot| slot.as_ref().map_or(true, |entry| &entry.id != id));
        if tracks.len() == before {
            return Err(BridgeError::Inconsistency(format!(
                "track {} not in playlist",
                id
            )));
        }
        Ok(())
    }
}
