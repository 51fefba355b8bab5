//! Low-level HTTP client — `StockfighterHttp`.
//!
//! One method per API endpoint. Returns validated [`Payload`]s; decoding into
//! domain types happens in the sub-clients. One `reqwest::Client` is shared by
//! every request, and nothing here is mutated after construction, so clones
//! can issue requests concurrently.

use crate::domain::level::LevelName;
use crate::error::HttpError;
use crate::http::response::{self, Payload};
use crate::http::url::{self, ApiUrls};
use crate::shared::InstanceId;

use reqwest::{Client, Method, Url};

/// Low-level HTTP client for the Stockfighter APIs.
#[derive(Debug, Clone)]
pub struct StockfighterHttp {
    urls: ApiUrls,
    client: Client,
}

impl StockfighterHttp {
    /// Wrap a prepared `reqwest::Client`. The client is expected to carry the
    /// authorization header as a default header.
    pub fn new(urls: ApiUrls, client: Client) -> Self {
        Self { urls, client }
    }

    pub fn urls(&self) -> &ApiUrls {
        &self.urls
    }

    // ── Order book ───────────────────────────────────────────────────────

    pub async fn heartbeat(&self) -> Result<Payload, HttpError> {
        self.get(url::heartbeat_url(self.urls.order_book())).await
    }

    pub async fn venue_heartbeat(&self, venue: &str) -> Result<Payload, HttpError> {
        self.get(url::venue_heartbeat_url(self.urls.order_book(), venue))
            .await
    }

    // ── Game master ──────────────────────────────────────────────────────

    pub async fn start_level(&self, level: LevelName) -> Result<Payload, HttpError> {
        self.post(url::start_level_url(self.urls.game_master(), level))
            .await
    }

    pub async fn instance_status(&self, instance: InstanceId) -> Result<Payload, HttpError> {
        self.get(url::instance_status_url(self.urls.game_master(), instance))
            .await
    }

    pub async fn stop_instance(&self, instance: InstanceId) -> Result<Payload, HttpError> {
        self.post(url::stop_instance_url(self.urls.game_master(), instance))
            .await
    }

    pub async fn restart_instance(&self, instance: InstanceId) -> Result<Payload, HttpError> {
        self.post(url::restart_instance_url(self.urls.game_master(), instance))
            .await
    }

    pub async fn resume_instance(&self, instance: InstanceId) -> Result<Payload, HttpError> {
        self.post(url::resume_instance_url(self.urls.game_master(), instance))
            .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get(&self, url: Url) -> Result<Payload, HttpError> {
        self.do_request(Method::GET, url).await
    }

    async fn post(&self, url: Url) -> Result<Payload, HttpError> {
        self.do_request(Method::POST, url).await
    }

    async fn do_request(&self, method: Method, url: Url) -> Result<Payload, HttpError> {
        tracing::debug!(%method, %url, "Sending request");

        let resp = self.client.request(method, url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;

        let result = response::validate(status, &body);
        if let Err(e) = &result {
            tracing::debug!(status, error = %e, "Response rejected");
        }
        result
    }
}
