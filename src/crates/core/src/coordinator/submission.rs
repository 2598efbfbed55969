//! Submission coordinator: owns the create-work draft.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::events::{ClientEvent, EventBus};
use crate::gateway::types::{DraftField, WorkDraft};
use crate::gateway::GatewayClient;
use crate::util::errors::KaryaError;

/// Inline message after a successful submit.
pub const MSG_SUBMIT_SUCCESS: &str = "Karya berhasil dikirim!";

/// Inline message for failures that carry no HTTP status.
pub const MSG_SUBMIT_FAILURE: &str = "Terjadi kesalahan";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn success() -> Self {
        Self {
            kind: StatusKind::Success,
            text: MSG_SUBMIT_SUCCESS.to_string(),
        }
    }

    fn error(err: &KaryaError) -> Self {
        let text = match err.status() {
            Some(status) => format!("Gagal {}", status),
            None => MSG_SUBMIT_FAILURE.to_string(),
        };
        Self {
            kind: StatusKind::Error,
            text,
        }
    }
}

/// Observable submission state handed to skins.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSnapshot {
    pub draft: WorkDraft,
    pub submitting: bool,
    pub message: Option<StatusMessage>,
}

struct SubmissionState {
    draft: WorkDraft,
    submitting: bool,
    message: Option<StatusMessage>,
}

pub struct SubmissionCoordinator {
    gateway: Arc<GatewayClient>,
    bus: EventBus,
    state: RwLock<SubmissionState>,
}

impl SubmissionCoordinator {
    pub fn new(gateway: Arc<GatewayClient>, bus: EventBus) -> Self {
        Self {
            gateway,
            bus,
            state: RwLock::new(SubmissionState {
                draft: WorkDraft::default(),
                submitting: false,
                message: None,
            }),
        }
    }

    pub async fn snapshot(&self) -> SubmissionSnapshot {
        let state = self.state.read().await;
        SubmissionSnapshot {
            draft: state.draft.clone(),
            submitting: state.submitting,
            message: state.message.clone(),
        }
    }

    /// Update one draft field. Edits are ignored while a submit is in
    /// flight.
    pub async fn update_field(&self, field: DraftField, value: &str) {
        let mut state = self.state.write().await;
        if state.submitting {
            return;
        }
        state.draft.set(field, value);
    }

    /// Submit the current draft.
    ///
    /// Returns `false` when a submit is already in flight (the skin is
    /// expected to have disabled the trigger). On success the draft is
    /// replaced with the empty default and a [`ClientEvent::WorkSubmitted`]
    /// is published; on failure the draft is preserved for correction.
    pub async fn submit(&self) -> bool {
        let draft = {
            let mut state = self.state.write().await;
            if state.submitting {
                warn!("submit ignored, already in flight");
                return false;
            }
            state.submitting = true;
            state.message = None;
            state.draft.clone()
        };

        match self.gateway.create_work(&draft).await {
            Ok(work) => {
                debug!(title = %work.title, "submission accepted");
                {
                    let mut state = self.state.write().await;
                    state.submitting = false;
                    state.draft = WorkDraft::default();
                    state.message = Some(StatusMessage::success());
                }
                self.bus.emit(ClientEvent::WorkSubmitted(work));
            }
            Err(e) => {
                warn!("submission failed: {}", e);
                let mut state = self.state.write().await;
                state.submitting = false;
                state.message = Some(StatusMessage::error(&e));
            }
        }
        true
    }
}
