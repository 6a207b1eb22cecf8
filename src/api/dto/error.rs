//! DTO for failure bodies.

use serde::Deserialize;
use serde_json::Value;

/// Body of a non-2xx response.
///
/// The usual shape is `{ "error": "text" }`. Structured errors of the form
/// `{ "error": { "message": "text", ... } }` are also understood.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorBody {
    /// Decodes a raw body leniently; anything unreadable yields no message.
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    /// Extracts the human-readable error text, if any.
    pub fn message(self) -> Option<String> {
        match self.error? {
            Value::String(text) => Some(text),
            Value::Object(mut map) => match map.remove("message") {
                Some(Value::String(text)) => Some(text),
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_error_text() {
        let body = ErrorBody::from_slice(br#"{"error":"bad url"}"#);
        assert_eq!(body.message().as_deref(), Some("bad url"));
    }

    #[test]
    fn test_structured_error() {
        let body = ErrorBody::from_slice(
            br#"{"error":{"code":"not_found","message":"Short link not found","details":{}}}"#,
        );
        assert_eq!(body.message().as_deref(), Some("Short link not found"));
    }

    #[test]
    fn test_unreadable_bodies_have_no_message() {
        assert_eq!(ErrorBody::from_slice(b"<html>502</html>").message(), None);
        assert_eq!(ErrorBody::from_slice(b"{}").message(), None);
        assert_eq!(ErrorBody::from_slice(br#"{"error":42}"#).message(), None);
        assert_eq!(ErrorBody::from_slice(b"").message(), None);
    }
}
