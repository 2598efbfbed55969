//! Client event layer.
//!
//! Coordinators publish state changes on a broadcast bus; skins and other
//! coordinators subscribe explicitly. The bus is constructed once by the
//! app shell and handed to each coordinator; there is no global emitter.

use tokio::sync::broadcast;
use tracing::debug;

use crate::gateway::types::Work;

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub enum ClientEvent {
    /// The announcements collection changed load state.
    AnnouncementsUpdated,
    /// The works collection changed load state.
    WorksUpdated,
    /// A submission was accepted by the backend.
    WorkSubmitted(Work),
}

#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ClientEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Publish to all current subscribers. Publishing with nobody
    /// listening is not an error.
    pub fn emit(&self, event: ClientEvent) {
        if self.tx.send(event).is_err() {
            debug!("event dropped, no subscribers");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
