//! Interfaces for collaborators the pages talk to but this server does not own:
//! the pub/sub channel used for linked video playback, and payload validation.

use crate::error::{PreconditionError, PublishError};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;

/// Event published when a participant seeks the linked video.
pub const LINKED_VIDEO_SEEK_EVENT: &str = "linked_video_seek";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublishedEvent {
    pub event: String,
    pub payload: Value,
}

#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, event: &str, payload: Value) -> Result<(), PublishError>;
}

/// In-process fan-out. Publishing with nobody listening is not an error.
#[derive(Clone, Debug)]
pub struct BroadcastPublisher {
    tx: broadcast::Sender<PublishedEvent>,
}

impl BroadcastPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        BroadcastPublisher { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PublishedEvent> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastPublisher {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl Publisher for BroadcastPublisher {
    async fn publish(&self, event: &str, payload: Value) -> Result<(), PublishError> {
        let delivered = self
            .tx
            .send(PublishedEvent {
                event: event.to_string(),
                payload,
            })
            .unwrap_or(0);
        tracing::debug!(event, delivered, "published");
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationLevel {
    Basic,
    Strict,
}

pub trait Validate {
    fn validate(&self, level: ValidationLevel) -> Result<(), PreconditionError>;
}
