//! Utility layer: errors and shared helpers.

pub mod errors;

pub use errors::{KaryaError, KaryaResult};
