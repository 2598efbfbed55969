//! Error types shared across the client.

use thiserror::Error;

pub type KaryaResult<T> = Result<T, KaryaError>;

#[derive(Debug, Error)]
pub enum KaryaError {
    /// Backend answered with a non-success HTTP status.
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },

    /// Transport-level failure: connect, timeout, interrupted body.
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Successful status but a body that does not parse as expected.
    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl KaryaError {
    /// HTTP status carried by a rejected request, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            KaryaError::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}
