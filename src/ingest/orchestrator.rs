//! Ingestion Orchestrator Module
//!
//! Coordinates extraction, membership-checked insertion, and capacity
//! enforcement for each inbound message.

use tracing::{info, warn};

use crate::extract::extract_track_ids;
use crate::playlist::{EvictionResult, InsertResult, Mutator};

// == Orchestrator ==
/// Drives one ingestion cycle per inbound message.
///
/// Tracks are processed strictly in appearance order and sequentially, so
/// every membership check observes the effect of the previous insert.
#[derive(Clone)]
pub struct Orchestrator {
    /// Playlist insert/evict operations
    mutator: Mutator,
}

impl Orchestrator {
    // == Constructor ==
    /// Creates an orchestrator over the given mutator.
    pub fn new(mutator: Mutator) -> Self {
        Self { mutator }
    }

    // == Handle Incoming Text ==
    /// Processes one inbound message body.
    ///
    /// For each extracted id: insert, and on a successful add run one
    /// capacity enforcement pass. A failure on one track is logged and does
    /// not block the remaining tracks; nothing is raised to the caller.
    pub async fn handle_incoming_text(&self, text: &str) {
        let ids = extract_track_ids(text);
        if ids.is_empty() {
            return;
        }

        info!(links = ids.len(), "track links found in message");

        for id in ids {
            match self.mutator.insert(&id).await {
                Ok(InsertResult::AlreadyPresent) => {
                    info!(track = %id, "already in playlist, skipping");
                }
                Ok(InsertResult::Added) => {
                    info!(track = %id, "track added to playlist");
                    match self.mutator.enforce_capacity().await {
                        Ok(EvictionResult::Evicted(evicted)) => {
                            info!(track = %evicted, "oldest track evicted");
                        }
                        Ok(EvictionResult::NoneEvicted) => {}
                        Err(err) => {
                            warn!(track = %id, error = %err, "capacity enforcement failed");
                        }
                    }
                }
                Err(err) => {
                    warn!(track = %id, error = %err, "failed to add track");
                }
            }
        }
    }
}
