// Karya Core Library - Platform-agnostic client logic
// Layering: Util -> Config/Gateway -> Coordinators -> View contract

pub mod config; // Configuration - backend address, resolved once at startup
pub mod coordinator; // Coordinators - listing and submission state owners
pub mod events; // Event layer - broadcast bus between coordinators and skins
pub mod gateway; // Gateway layer - HTTP client for the community backend
pub mod util; // Utility layer - errors, helpers
pub mod view; // View contract - render mapping consumed by skins

// Export main types
pub use util::errors::{KaryaError, KaryaResult};

pub use config::BackendConfig;
pub use coordinator::{
    ListingCoordinator, LoadState, StatusKind, StatusMessage, SubmissionCoordinator,
    SubmissionSnapshot,
};
pub use events::{ClientEvent, EventBus};
pub use gateway::types::{Announcement, DraftField, Work, WorkDraft};
pub use gateway::GatewayClient;
pub use view::ListView;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CORE_NAME: &str = "Karya Core";
