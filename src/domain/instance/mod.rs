//! Instance domain — point-in-time status of a running level instance.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use super::DecodeError;
use crate::shared::InstanceId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

// ─── InstanceState ───────────────────────────────────────────────────────────

/// Lifecycle state reported by the game master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceState {
    Open,
    Closed,
}

impl InstanceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceState::Open => "open",
            InstanceState::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(InstanceState::Open),
            "closed" => Some(InstanceState::Closed),
            _ => None,
        }
    }
}

impl std::fmt::Display for InstanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── InstanceStatus ──────────────────────────────────────────────────────────

/// Snapshot of a level instance, taken on each status poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceStatus {
    /// Last trading day of the level (`details.endOfTheWorldDay`).
    pub total_days: u64,
    pub trading_day: u64,
    pub done: bool,
    pub instance_id: InstanceId,
    pub state: InstanceState,
    /// Client clock at decode time.
    pub observed_at: DateTime<Utc>,
}

impl InstanceStatus {
    /// Decode a status snapshot, reporting why the payload was rejected.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        super::ensure_ok(value)?;
        Self::try_from(super::from_json::<wire::InstanceStatusResponse>(value)?)
    }

    /// Decode a status snapshot, or `None` for unknown states and missing fields.
    pub fn decode(value: &Value) -> Option<Self> {
        Self::from_value(value).ok()
    }

    /// Trading days left before the level ends.
    pub fn days_remaining(&self) -> u64 {
        self.total_days.saturating_sub(self.trading_day)
    }
}
