//! High-level client — `StockfighterClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::heartbeat::client::Heartbeats;
use crate::domain::instance::client::Instances;
use crate::domain::level::client::Levels;
use crate::error::{ConfigError, SdkError};
use crate::http::{ApiUrls, StockfighterHttp};
use crate::network::{AUTH_HEADER, DEFAULT_BASE_URL};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::heartbeat::client::Heartbeats as HeartbeatsClient;
pub use crate::domain::instance::client::Instances as InstancesClient;
pub use crate::domain::level::client::Levels as LevelsClient;

/// The primary entry point for the Stockfighter SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.heartbeats()`, `client.levels()`, `client.instances()`.
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct StockfighterClient {
    pub(crate) http: StockfighterHttp,
}

impl StockfighterClient {
    pub fn builder() -> StockfighterClientBuilder {
        StockfighterClientBuilder::default()
    }

    /// Client for `base_url` authorized with `api_key`.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, SdkError> {
        Self::builder().base_url(base_url).api_key(api_key).build()
    }

    pub fn urls(&self) -> &ApiUrls {
        self.http.urls()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn heartbeats(&self) -> Heartbeats<'_> {
        Heartbeats { client: self }
    }

    pub fn levels(&self) -> Levels<'_> {
        Levels { client: self }
    }

    pub fn instances(&self) -> Instances<'_> {
        Instances { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct StockfighterClientBuilder {
    base_url: String,
    urls: Option<(String, String)>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl Default for StockfighterClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            urls: None,
            api_key: None,
            timeout: None,
            default_headers: Vec::new(),
        }
    }
}

impl StockfighterClientBuilder {
    /// Host serving both APIs; `/ob/api` and `/gm` are appended.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Explicit order book and game-master bases. Overrides `base_url`.
    pub fn api_urls(mut self, order_book: &str, game_master: &str) -> Self {
        self.urls = Some((order_book.to_string(), game_master.to_string()));
        self
    }

    /// API key sent as `X-Starfighter-Authorization` on every request.
    ///
    /// Without a key only the heartbeat endpoints answer.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Whole-request deadline. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    /// Validate the configuration and build the client.
    ///
    /// Fails with [`SdkError::Config`] on an unusable base URL or header; no
    /// request is ever sent by a client that failed to build.
    pub fn build(self) -> Result<StockfighterClient, SdkError> {
        let urls = match &self.urls {
            Some((order_book, game_master)) => ApiUrls::from_parts(order_book, game_master)?,
            None => ApiUrls::parse(&self.base_url)?,
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in &self.default_headers {
            headers.insert(header_name(name)?, header_value(name, value)?);
        }

        if let Some(key) = &self.api_key {
            let mut value = header_value(AUTH_HEADER, key)?;
            value.set_sensitive(true);
            headers.insert(header_name(AUTH_HEADER)?, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ConfigError::Client)?;

        tracing::debug!(
            order_book = %urls.order_book(),
            game_master = %urls.game_master(),
            authorized = self.api_key.is_some(),
            "Built Stockfighter client"
        );

        Ok(StockfighterClient {
            http: StockfighterHttp::new(urls, client),
        })
    }
}

fn header_name(name: &str) -> Result<HeaderName, ConfigError> {
    HeaderName::try_from(name).map_err(|e| ConfigError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
