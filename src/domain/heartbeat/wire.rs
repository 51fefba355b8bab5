//! Wire types for heartbeat responses.

use serde::{Deserialize, Serialize};

/// Response for `GET {ob}/heartbeat`, `GET {ob}/venues/{venue}/heartbeat`
/// and `POST {gm}/instances/{id}/stop`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeartbeatResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Only present on venue heartbeats.
    #[serde(default)]
    pub venue: Option<String>,
}
