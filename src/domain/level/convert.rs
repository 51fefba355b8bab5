//! Conversion: LevelResponse → Level (TryFrom + validation).

use super::wire::LevelResponse;
use super::Level;
use crate::domain::DecodeError;

impl TryFrom<LevelResponse> for Level {
    type Error = DecodeError;

    fn try_from(source: LevelResponse) -> Result<Self, Self::Error> {
        if !source.ok {
            return Err(DecodeError::NotOk(source.error.unwrap_or_default()));
        }

        Ok(Level {
            account: source.account,
            instance_id: source.instance_id,
            instructions: source.instructions,
            seconds_per_trading_day: source.seconds_per_trading_day,
            tickers: source.tickers,
            venues: source.venues,
            balances: source.balances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::LevelName;
    use super::*;
    use crate::shared::InstanceId;
    use serde_json::{json, Value};

    fn sample_level_json() -> Value {
        json!({
            "ok": true,
            "account": "EXB123",
            "instanceId": 42,
            "instructions": {},
            "secondsPerTradingDay": 60,
            "tickers": ["FOOBAR"],
            "venues": ["TESTEX"],
            "balances": {"USD": 0}
        })
    }

    #[test]
    fn test_decode_level() {
        let level = Level::decode(&sample_level_json()).unwrap();
        assert_eq!(level.account, "EXB123");
        assert_eq!(level.instance_id, InstanceId::new(42));
        assert!(level.instructions.is_empty());
        assert_eq!(level.seconds_per_trading_day, 60);
        assert_eq!(level.tickers, vec!["FOOBAR".to_string()]);
        assert_eq!(level.venues, vec!["TESTEX".to_string()]);
        assert_eq!(level.balances.get("USD"), Some(&0));
    }

    #[test]
    fn test_decode_level_with_instructions() {
        let mut payload = sample_level_json();
        payload["instructions"] = json!({"Instructions": "Buy 100 shares", "Order Types": "limit"});
        let level = Level::decode(&payload).unwrap();
        assert_eq!(level.instructions.len(), 2);
        assert_eq!(level.instructions["Instructions"], "Buy 100 shares");
    }

    #[test]
    fn test_every_field_is_required() {
        for field in [
            "account",
            "instanceId",
            "instructions",
            "secondsPerTradingDay",
            "tickers",
            "venues",
            "balances",
        ] {
            let mut payload = sample_level_json();
            payload.as_object_mut().unwrap().remove(field);
            assert!(
                matches!(Level::from_value(&payload), Err(DecodeError::Shape(_))),
                "level without `{field}` must not decode"
            );
        }
    }

    #[test]
    fn test_mistyped_field_is_rejected() {
        let mut payload = sample_level_json();
        payload["tickers"] = json!("FOOBAR");
        assert!(Level::decode(&payload).is_none());

        let mut payload = sample_level_json();
        payload["instanceId"] = json!("42");
        assert!(Level::decode(&payload).is_none());
    }

    #[test]
    fn test_not_ok_is_rejected_with_message() {
        let mut payload = sample_level_json();
        payload["ok"] = json!(false);
        payload["error"] = json!("level locked");
        assert_eq!(
            Level::from_value(&payload),
            Err(DecodeError::NotOk("level locked".to_string()))
        );

        // A bare failure carries none of the level fields.
        assert_eq!(
            Level::from_value(&json!({"ok": false, "error": "bad key"})),
            Err(DecodeError::NotOk("bad key".to_string()))
        );
    }

    #[test]
    fn test_level_name_strings() {
        assert_eq!(LevelName::FirstSteps.as_str(), "first_steps");
        assert_eq!(LevelName::FirstSteps.to_string(), "first_steps");
        assert_eq!(LevelName::ChockABlock.as_str(), "chock_a_block");
        assert_eq!(LevelName::MakingAmends.as_str(), "making_amends");
        assert_eq!(
            "dueling_bulldozers".parse::<LevelName>(),
            Ok(LevelName::DuelingBulldozers)
        );
        assert_eq!(
            "level_nine".parse::<LevelName>(),
            Err(DecodeError::UnknownLevel("level_nine".to_string()))
        );
    }

    #[test]
    fn test_level_name_ordinals() {
        assert_eq!(LevelName::FirstSteps.ordinal(), 1);
        assert_eq!(LevelName::from_ordinal(1), Some(LevelName::FirstSteps));
        assert_eq!(LevelName::from_ordinal(6), Some(LevelName::MakingAmends));
        assert_eq!(LevelName::from_ordinal(0), None);
        assert_eq!(LevelName::from_ordinal(7), None);
        for level in LevelName::ALL {
            assert_eq!(LevelName::from_ordinal(level.ordinal()), Some(level));
            assert_eq!(level.as_str().parse::<LevelName>(), Ok(level));
        }
    }
}
