//! Coordinators owning client-side state.
//!
//! The listing coordinator holds the two fetched collections; the
//! submission coordinator holds the draft. They talk to each other only
//! through the event bus.

pub mod listing;
pub mod submission;

pub use listing::{ListingCoordinator, LoadState};
pub use submission::{StatusKind, StatusMessage, SubmissionCoordinator, SubmissionSnapshot};
