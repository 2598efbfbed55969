//! Listing coordinator: the announcements and works collections.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};

use crate::events::{ClientEvent, EventBus};
use crate::gateway::types::{Announcement, Work};
use crate::gateway::GatewayClient;

/// Load status of one independently fetched collection.
///
/// `Failed` is distinct from an empty `Loaded` so callers can tell
/// "backend unreachable" from "nothing there", even though the render
/// contract maps both to the empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed,
    Loaded(Vec<T>),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Owns the two collections shown by the listing panels. The collections
/// load independently; neither fetch waits on the other.
pub struct ListingCoordinator {
    gateway: Arc<GatewayClient>,
    bus: EventBus,
    announcements: RwLock<LoadState<Announcement>>,
    works: RwLock<LoadState<Work>>,
    /// Ticket of the newest works fetch. A completed fetch holding an
    /// older ticket must not store its result.
    works_ticket: AtomicU64,
}

impl ListingCoordinator {
    pub fn new(gateway: Arc<GatewayClient>, bus: EventBus) -> Self {
        Self {
            gateway,
            bus,
            announcements: RwLock::new(LoadState::Loading),
            works: RwLock::new(LoadState::Loading),
            works_ticket: AtomicU64::new(0),
        }
    }

    pub async fn announcements(&self) -> LoadState<Announcement> {
        self.announcements.read().await.clone()
    }

    pub async fn works(&self) -> LoadState<Work> {
        self.works.read().await.clone()
    }

    pub async fn refresh_announcements(&self) {
        *self.announcements.write().await = LoadState::Loading;
        self.bus.emit(ClientEvent::AnnouncementsUpdated);

        let state = match self.gateway.list_announcements().await {
            Ok(items) => LoadState::Loaded(items),
            Err(e) => {
                warn!("announcements fetch failed: {}", e);
                LoadState::Failed
            }
        };

        *self.announcements.write().await = state;
        self.bus.emit(ClientEvent::AnnouncementsUpdated);
    }

    /// Refetch works, optionally filtered by a search query.
    ///
    /// Overlapping calls may complete in any order; only the response to
    /// the newest call is stored. A stale response is discarded, so the
    /// displayed list always belongs to the most recently issued query.
    pub async fn refresh_works(&self, query: Option<&str>) {
        let ticket = self.works_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        *self.works.write().await = LoadState::Loading;
        self.bus.emit(ClientEvent::WorksUpdated);

        let result = self.gateway.list_works(query).await;

        {
            let mut works = self.works.write().await;
            // Checked under the write lock so a newer fetch cannot bump the
            // ticket between the check and the store.
            if self.works_ticket.load(Ordering::SeqCst) != ticket {
                debug!(ticket, "discarding stale works response");
                return;
            }
            *works = match result {
                Ok(items) => LoadState::Loaded(items),
                Err(e) => {
                    warn!("works fetch failed: {}", e);
                    LoadState::Failed
                }
            };
        }
        self.bus.emit(ClientEvent::WorksUpdated);
    }

    /// Long-lived listener reacting to accepted submissions with exactly
    /// one unfiltered works refetch per event.
    pub fn spawn_submission_listener(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        let mut events = self.bus.subscribe();
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(ClientEvent::WorkSubmitted(_)) => self.refresh_works(None).await,
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "submission listener lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}
