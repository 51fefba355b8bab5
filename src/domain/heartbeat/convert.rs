//! Conversions from wire types to domain types for heartbeats.

use super::wire::HeartbeatResponse;
use super::Heartbeat;

impl From<HeartbeatResponse> for Heartbeat {
    fn from(h: HeartbeatResponse) -> Self {
        Self {
            ok: h.ok,
            error: h.error.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_healthy() {
        let hb = Heartbeat::decode(&json!({"ok": true, "error": ""})).unwrap();
        assert_eq!(
            hb,
            Heartbeat {
                ok: true,
                error: String::new()
            }
        );
    }

    #[test]
    fn test_decode_keeps_server_diagnostic() {
        let hb = Heartbeat::decode(&json!({"ok": false, "error": "venue is down"})).unwrap();
        assert!(!hb.ok);
        assert_eq!(hb.error, "venue is down");
    }

    #[test]
    fn test_decode_error_is_optional() {
        let hb = Heartbeat::decode(&json!({"ok": true})).unwrap();
        assert!(hb.ok);
        assert!(hb.error.is_empty());

        let hb = Heartbeat::decode(&json!({"ok": true, "error": null})).unwrap();
        assert!(hb.error.is_empty());
    }

    #[test]
    fn test_decode_venue_heartbeat() {
        let hb = Heartbeat::decode(&json!({"ok": true, "venue": "TESTEX"})).unwrap();
        assert!(hb.ok);
    }

    #[test]
    fn test_decode_rejects_missing_or_mistyped_ok() {
        assert!(Heartbeat::decode(&json!({"error": "nope"})).is_none());
        assert!(Heartbeat::decode(&json!({"ok": "yes"})).is_none());
        assert!(Heartbeat::decode(&json!({"ok": 1})).is_none());
        assert!(Heartbeat::decode(&json!({"ok": true, "error": 7})).is_none());
        assert!(Heartbeat::decode(&json!("ok")).is_none());
        assert!(Heartbeat::decode(&json!(null)).is_none());
    }

    #[test]
    fn test_dead_sentinel() {
        let dead = Heartbeat::dead();
        assert!(!dead.ok);
        assert_eq!(dead.error, "");
        assert_eq!(Heartbeat::default(), dead);
    }
}
