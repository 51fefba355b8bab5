//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, ready for game logic)
//! - `wire.rs` — Raw serde structs matching game server responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `client.rs` — Sub-client with HTTP methods

pub mod heartbeat;
pub mod instance;
pub mod level;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Why a JSON payload could not become a domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload carried `ok: false`.
    #[error("server reported failure: {0}")]
    NotOk(String),

    #[error("unknown instance state '{0}'")]
    UnknownState(String),

    #[error("unknown level '{0}'")]
    UnknownLevel(String),

    /// A required field is missing or has the wrong JSON type.
    #[error("unexpected payload shape: {0}")]
    Shape(String),
}

/// Require `ok: true`, surfacing the server's `error` text otherwise.
pub(crate) fn ensure_ok(value: &Value) -> Result<(), DecodeError> {
    match value.get("ok") {
        Some(Value::Bool(true)) => Ok(()),
        Some(Value::Bool(false)) => Err(DecodeError::NotOk(
            value
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        )),
        _ => Err(DecodeError::Shape("missing boolean `ok` field".to_string())),
    }
}

/// Deserialize a wire struct out of a borrowed JSON value.
pub(crate) fn from_json<W: DeserializeOwned>(value: &Value) -> Result<W, DecodeError> {
    W::deserialize(value).map_err(|e| DecodeError::Shape(e.to_string()))
}
