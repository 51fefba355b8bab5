//! Wire types for game-master instance responses.

use crate::shared::InstanceId;
use serde::{Deserialize, Serialize};

/// Response for `GET {gm}/instances/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstanceStatusResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub id: InstanceId,
    pub done: bool,
    pub state: String,
    pub details: InstanceDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDetails {
    pub end_of_the_world_day: u64,
    pub trading_day: u64,
}
