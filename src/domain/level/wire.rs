//! Wire types for game-master level responses.

use crate::shared::InstanceId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response for `POST {gm}/levels/{level}` and for instance restart/resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub account: String,
    pub instance_id: InstanceId,
    pub instructions: HashMap<String, String>,
    pub seconds_per_trading_day: u64,
    pub tickers: Vec<String>,
    pub venues: Vec<String>,
    pub balances: HashMap<String, i64>,
}
