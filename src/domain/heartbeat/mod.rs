//! Heartbeat domain — liveness of the order book API and its venues.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use serde::Serialize;
use serde_json::Value;

/// Health report of a remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heartbeat {
    pub ok: bool,
    /// Server diagnostic; empty when `ok` is true.
    pub error: String,
}

impl Heartbeat {
    /// The sentinel reported whenever the API could not be reached or its
    /// answer could not be read.
    pub fn dead() -> Self {
        Self {
            ok: false,
            error: String::new(),
        }
    }

    /// Decode a heartbeat from a JSON object carrying at least a boolean `ok`.
    pub fn decode(value: &Value) -> Option<Self> {
        super::from_json::<wire::HeartbeatResponse>(value)
            .ok()
            .map(Self::from)
    }
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::dead()
    }
}
