//! # Stockfighter SDK
//!
//! An async Rust client for the Stockfighter trading game: the order book API
//! (`/ob/api`) and the game-master API (`/gm`) that starts, polls and stops
//! level instances.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain types and their JSON decoders (always available)
//! 2. **HTTP** — URL builder, response validator and `StockfighterHttp` transport
//! 3. **High-Level Client** — `StockfighterClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockfighter::prelude::*;
//!
//! let client = StockfighterClient::builder()
//!     .api_key("my-api-key")
//!     .build()?;
//!
//! if client.heartbeats().check().await.ok {
//!     let level = client.levels().start(LevelName::FirstSteps).await?;
//!     let status = client.instances().status(level.instance_id).await;
//!     client.instances().stop(level.instance_id).await;
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// URL builder, response validator and the low-level transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `StockfighterClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::InstanceId;

    // Domain types
    pub use crate::domain::heartbeat::Heartbeat;
    pub use crate::domain::instance::{InstanceState, InstanceStatus};
    pub use crate::domain::level::{Level, LevelName};
    pub use crate::domain::DecodeError;

    // Errors
    pub use crate::error::{ConfigError, HttpError, SdkError};

    // Network
    pub use crate::network::{AUTH_HEADER, DEFAULT_BASE_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        HeartbeatsClient, InstancesClient, LevelsClient, StockfighterClient,
        StockfighterClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{ApiUrls, Payload};
}
