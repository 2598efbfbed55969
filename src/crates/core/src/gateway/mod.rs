//! HTTP gateway to the community backend.
//!
//! Wraps the three REST operations behind a configured base URL. All
//! operations are plain request/response; no caching, no retries.

pub mod types;

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::util::errors::{KaryaError, KaryaResult};
use types::{Announcement, ListEnvelope, Work, WorkDraft};

pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(config: &BackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client, using default config: {}", e);
                reqwest::Client::new()
            });

        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/api/announcements`
    pub async fn list_announcements(&self) -> KaryaResult<Vec<Announcement>> {
        let url = format!("{}/api/announcements", self.base_url);
        let items: Vec<Announcement> = self.fetch_list(self.http.get(&url)).await?;
        debug!(count = items.len(), "fetched announcements");
        Ok(items)
    }

    /// `GET {base}/api/works[?q=<query>]`
    ///
    /// A `Some` non-empty query is passed verbatim as the `q` parameter;
    /// `None` or an empty string sends no parameter at all.
    pub async fn list_works(&self, query: Option<&str>) -> KaryaResult<Vec<Work>> {
        let url = format!("{}/api/works", self.base_url);
        let mut request = self.http.get(&url);
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            request = request.query(&[("q", q)]);
        }
        let items: Vec<Work> = self.fetch_list(request).await?;
        debug!(count = items.len(), query = ?query, "fetched works");
        Ok(items)
    }

    /// `POST {base}/api/works` with the full draft as a JSON body.
    ///
    /// Succeeds only on a 2xx status; anything else fails with
    /// [`KaryaError::RequestFailed`] carrying the status code.
    pub async fn create_work(&self, draft: &WorkDraft) -> KaryaResult<Work> {
        let url = format!("{}/api/works", self.base_url);
        let response = self.http.post(&url).json(draft).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(KaryaError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let work: Work = serde_json::from_str(&body)
            .map_err(|e| KaryaError::Decode(format!("created work did not parse: {}", e)))?;
        debug!(title = %work.title, "work created");
        Ok(work)
    }

    /// Round-trips a lightweight read to verify the backend is reachable.
    pub async fn check_connection(&self) -> KaryaResult<Duration> {
        let started = Instant::now();
        self.list_announcements().await?;
        Ok(started.elapsed())
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> KaryaResult<Vec<T>> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(KaryaError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: ListEnvelope<T> = serde_json::from_str(&body)
            .map_err(|e| KaryaError::Decode(format!("list body did not parse: {}", e)))?;
        Ok(envelope.data)
    }
}
