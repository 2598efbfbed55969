//! Render contract shared by presentation skins.
//!
//! Maps a collection's load state to what a skin must show: placeholder
//! slots while loading, a single empty indicator for nothing-to-show, or
//! the items in backend order. Skins draw these values and never touch
//! the gateway themselves.

use crate::coordinator::LoadState;

/// Number of placeholder slots drawn while a collection loads.
pub const LOADING_PLACEHOLDER_SLOTS: usize = 6;

pub const EMPTY_ANNOUNCEMENTS: &str = "Belum ada pengumuman";
pub const EMPTY_WORKS: &str = "Belum ada karya diunggah";

#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    /// Fixed placeholder slots while the fetch is outstanding.
    Placeholders(usize),
    /// Nothing to show: an empty response or a failed read. The two are
    /// indistinguishable on screen.
    Empty(&'static str),
    /// One entry per element, backend order preserved.
    Items(Vec<T>),
}

impl<T: Clone> ListView<T> {
    pub fn from_state(state: &LoadState<T>, empty_label: &'static str) -> Self {
        match state {
            LoadState::Loading => ListView::Placeholders(LOADING_PLACEHOLDER_SLOTS),
            LoadState::Failed => ListView::Empty(empty_label),
            LoadState::Loaded(items) if items.is_empty() => ListView::Empty(empty_label),
            LoadState::Loaded(items) => ListView::Items(items.clone()),
        }
    }
}

/// Tag chip text as rendered on an announcement card.
pub fn tag_chip(tag: &str) -> String {
    format!("#{}", tag)
}
