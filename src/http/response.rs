//! Response validation shared by every endpoint.
//!
//! Transport failures never reach this module: `StockfighterHttp` maps them to
//! [`HttpError::Transport`] before a body is read, so no partial body is ever
//! decoded.

use crate::error::{HttpError, SdkError};
use serde_json::Value;

/// A validated response body: a JSON object with a boolean `ok` field.
///
/// `ok: false` is still a valid payload; it carries the server's failure
/// message in `error`.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload(Value);

impl Payload {
    pub fn ok(&self) -> bool {
        matches!(self.0.get("ok"), Some(Value::Bool(true)))
    }

    /// Server-supplied `error` text, empty when absent.
    pub fn error_message(&self) -> &str {
        self.0
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Keep the payload only if the server reported success.
    pub fn into_success(self) -> Result<Self, SdkError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(SdkError::Application(self.error_message().to_string()))
        }
    }
}

impl TryFrom<Value> for Payload {
    type Error = HttpError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(HttpError::MalformedPayload(
                "expected a JSON object".to_string(),
            ));
        }
        match value.get("ok") {
            Some(Value::Bool(_)) => Ok(Payload(value)),
            _ => Err(HttpError::MalformedPayload(
                "missing boolean `ok` field".to_string(),
            )),
        }
    }
}

/// Classify a completed HTTP exchange.
///
/// Anything other than `200` is [`HttpError::UnexpectedStatus`], with the body
/// kept for diagnostics. An empty or non-JSON body, or one without a boolean
/// `ok`, is [`HttpError::MalformedPayload`].
pub fn validate(status: u16, body: &[u8]) -> Result<Payload, HttpError> {
    if status != 200 {
        return Err(HttpError::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(HttpError::MalformedPayload("empty body".to_string()));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| HttpError::MalformedPayload(format!("invalid JSON: {}", e)))?;
    Payload::try_from(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_success_payload() {
        let payload = validate(200, br#"{"ok":true,"error":""}"#).unwrap();
        assert!(payload.ok());
        assert_eq!(payload.error_message(), "");
        assert!(payload.into_success().is_ok());
    }

    #[test]
    fn test_ok_false_is_valid_but_not_success() {
        let payload = validate(200, br#"{"ok":false,"error":"Unknown level"}"#).unwrap();
        assert!(!payload.ok());
        assert_eq!(payload.error_message(), "Unknown level");
        match payload.into_success() {
            Err(SdkError::Application(msg)) => assert_eq!(msg, "Unknown level"),
            other => panic!("expected application error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_200_status() {
        for status in [201, 204, 301, 401, 404, 500, 503] {
            let err = validate(status, br#"{"ok":true}"#).unwrap_err();
            assert_eq!(err.status(), Some(status));
        }

        match validate(500, b"internal error") {
            Err(HttpError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("expected unexpected status, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_bodies() {
        let bodies: [&[u8]; 10] = [
            b"",
            b"   ",
            b"not json",
            b"[1,2,3]",
            b"\"ok\"",
            b"true",
            br#"{"error":"no ok"}"#,
            br#"{"ok":"true"}"#,
            br#"{"ok":null}"#,
            br#"{"ok":true"#,
        ];
        for body in bodies {
            assert!(
                matches!(validate(200, body), Err(HttpError::MalformedPayload(_))),
                "body {:?} should be malformed",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_status_checked_before_body() {
        assert!(matches!(
            validate(404, b""),
            Err(HttpError::UnexpectedStatus { status: 404, .. })
        ));
    }
}
