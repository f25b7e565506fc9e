//! Hook input parsing.

use crate::error::Result;
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::io::Read;
use tracing::error;

/// Event payload received from Claude Code on stdin.
///
/// No schema is enforced: handlers pull the fields they care about by name
/// and fall back to a default when a field is absent or has the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct HookInput {
    fields: Map<String, Value>,
}

impl HookInput {
    /// Parse raw stdin contents.
    ///
    /// Blank input is an empty payload. Anything else must be a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON object.
    pub fn parse(raw: &str) -> serde_json::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Get a raw field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a string field, or `""` if absent or not a string.
    #[must_use]
    pub fn str_field(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Get a numeric field as sent, or `None` if absent or not a number.
    #[must_use]
    pub fn number_field(&self, key: &str) -> Option<&Number> {
        match self.get(key)? {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Whether the payload carried no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for HookInput {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Read the whole payload from `reader`.
///
/// Malformed JSON is logged and replaced by an empty payload so the hook
/// still answers the host.
///
/// # Errors
///
/// Returns an error only if reading fails (including non-UTF-8 input).
pub fn read_input<R: Read>(mut reader: R) -> Result<HookInput> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;

    match HookInput::parse(&raw) {
        Ok(input) => Ok(input),
        Err(e) => {
            error!("Failed to parse input JSON: {e}");
            Ok(HookInput::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input_of(value: Value) -> HookInput {
        match value {
            Value::Object(map) => HookInput::from(map),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn parse_empty_input() {
        let input = HookInput::parse("").unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn parse_whitespace_input() {
        let input = HookInput::parse("  \n\t").unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn parse_object() {
        let input = HookInput::parse(r#"{"tool_name": "Bash", "session_id": "abc"}"#).unwrap();
        assert_eq!(input.str_field("tool_name"), "Bash");
        assert_eq!(input.str_field("session_id"), "abc");
    }

    #[test]
    fn malformed_json_fails() {
        assert!(HookInput::parse(r#"{"tool_name": Bash}"#).is_err());
    }

    #[test]
    fn non_object_json_fails() {
        assert!(HookInput::parse("[1, 2, 3]").is_err());
        assert!(HookInput::parse(r#""PreToolUse""#).is_err());
    }

    #[test]
    fn str_field_defaults() {
        let input = input_of(json!({"session_id": 42, "tool_name": null}));
        assert_eq!(input.str_field("session_id"), "");
        assert_eq!(input.str_field("tool_name"), "");
        assert_eq!(input.str_field("missing"), "");
    }

    #[test]
    fn number_field_keeps_the_sent_number() {
        let input = input_of(json!({
            "current_token_count": 15000,
            "negative": -5,
            "text": "120",
            "float": 1234.0
        }));
        let shown = |key| input.number_field(key).map(ToString::to_string);
        assert_eq!(shown("current_token_count").as_deref(), Some("15000"));
        assert_eq!(shown("negative").as_deref(), Some("-5"));
        assert_eq!(shown("float").as_deref(), Some("1234.0"));
        assert_eq!(shown("text"), None);
        assert_eq!(shown("missing"), None);
    }

    #[test]
    fn read_input_recovers_from_malformed_json() {
        let input = read_input("{not json".as_bytes()).unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn read_input_parses_payload() {
        let input = read_input(r#"{"notification_type": "idle"}"#.as_bytes()).unwrap();
        assert_eq!(input.str_field("notification_type"), "idle");
    }

    #[test]
    fn read_input_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x7b, 0xff, 0xfe, 0x7d];
        assert!(read_input(bytes).is_err());
    }
}
