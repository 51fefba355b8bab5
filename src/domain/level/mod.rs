//! Level domain — the game's level roster and freshly started level instances.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use super::DecodeError;
use crate::shared::InstanceId;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ─── LevelName ───────────────────────────────────────────────────────────────

/// Levels the game master can start, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelName {
    FirstSteps = 1,
    ChockABlock = 2,
    SellSide = 3,
    DuelingBulldozers = 4,
    IrrationalExuberance = 5,
    MakingAmends = 6,
}

impl LevelName {
    pub const ALL: [LevelName; 6] = [
        LevelName::FirstSteps,
        LevelName::ChockABlock,
        LevelName::SellSide,
        LevelName::DuelingBulldozers,
        LevelName::IrrationalExuberance,
        LevelName::MakingAmends,
    ];

    /// Name used in game-master URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelName::FirstSteps => "first_steps",
            LevelName::ChockABlock => "chock_a_block",
            LevelName::SellSide => "sell_side",
            LevelName::DuelingBulldozers => "dueling_bulldozers",
            LevelName::IrrationalExuberance => "irrational_exuberance",
            LevelName::MakingAmends => "making_amends",
        }
    }

    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.ordinal() == ordinal)
    }
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelName {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| DecodeError::UnknownLevel(s.to_string()))
    }
}

// ─── Level ───────────────────────────────────────────────────────────────────

/// A level instance as reported when it is started, restarted or resumed.
///
/// Every field is required on the wire; there is no partially populated level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Level {
    pub account: String,
    pub instance_id: InstanceId,
    /// Briefing text keyed by section title.
    pub instructions: HashMap<String, String>,
    pub seconds_per_trading_day: u64,
    pub tickers: Vec<String>,
    pub venues: Vec<String>,
    /// Starting balances keyed by currency symbol.
    pub balances: HashMap<String, i64>,
}

impl Level {
    /// Decode a level, reporting why the payload was rejected.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        super::ensure_ok(value)?;
        Self::try_from(super::from_json::<wire::LevelResponse>(value)?)
    }

    /// Decode a level, or `None` if any required field is absent or mistyped.
    pub fn decode(value: &Value) -> Option<Self> {
        Self::from_value(value).ok()
    }
}
