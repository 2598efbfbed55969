//! Backend connection configuration.
//!
//! Built exactly once at process start and passed by reference into the
//! gateway. Request-building code never consults the environment.

use std::time::Duration;

use crate::util::errors::{KaryaError, KaryaResult};

/// Fallback when neither the CLI flag nor the environment names a backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable consulted once during [`BackendConfig::resolve`].
pub const BACKEND_URL_ENV: &str = "KARYA_BACKEND_URL";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Per-request timeout applied to every gateway call.
    pub request_timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> KaryaResult<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(KaryaError::Config("backend base URL is empty".to_string()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(KaryaError::Config(format!(
                "backend base URL must start with http:// or https://: {}",
                trimmed
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Resolves the backend address: explicit override first, then the
    /// `KARYA_BACKEND_URL` environment variable, then the default.
    ///
    /// Called once from the app shell; the resulting value is the only
    /// configuration the rest of the client ever sees.
    pub fn resolve(override_url: Option<&str>) -> KaryaResult<Self> {
        if let Some(url) = override_url {
            return Self::new(url);
        }
        match std::env::var(BACKEND_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = BackendConfig::new("http://localhost:8000/").expect("valid config");
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn empty_url_is_rejected() {
        assert!(matches!(
            BackendConfig::new("   "),
            Err(KaryaError::Config(_))
        ));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert!(matches!(
            BackendConfig::new("ftp://example.com"),
            Err(KaryaError::Config(_))
        ));
    }

    #[test]
    fn explicit_override_wins() {
        let config = BackendConfig::resolve(Some("https://karya.example.org"))
            .expect("valid override");
        assert_eq!(config.base_url, "https://karya.example.org");
    }
}
