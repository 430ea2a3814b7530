//! Ingest Worker Task
//!
//! Strictly sequential consumer of inbound chat messages. One worker drains
//! a bounded queue one message at a time, so at most one ingestion cycle is
//! ever in flight and fetch-then-decide checks stay coherent.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::ingest::Orchestrator;

/// Bound of the inbound message queue; senders back-pressure when full.
pub const QUEUE_DEPTH: usize = 64;

// == Chat Message ==
/// An inbound chat event as delivered by a transport.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Name of the group the message was posted in
    pub group: String,
    /// Message text body
    pub body: String,
}

/// Creates the bounded ingestion queue.
pub fn ingest_queue() -> (mpsc::Sender<ChatMessage>, mpsc::Receiver<ChatMessage>) {
    mpsc::channel(QUEUE_DEPTH)
}

// == Worker ==
/// Spawns the ingestion worker.
///
/// Messages from groups other than `group_name` are dropped. The task ends
/// when every sender is gone; during shutdown the returned handle can be
/// aborted instead.
pub fn spawn_ingest_worker(
    mut rx: mpsc::Receiver<ChatMessage>,
    orchestrator: Orchestrator,
    group_name: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(group = %group_name, "ingest worker started");

        while let Some(message) = rx.recv().await {
            if message.group != group_name {
                debug!(group = %message.group, "message from other group ignored");
                continue;
            }
            // Awaited to completion before the next message is taken
            orchestrator.handle_incoming_text(&message.body).await;
        }

        info!("ingest worker stopped");
    })
}
