//! Invocation events.
//!
//! An invocation either carries an S3 object-created notification or is a
//! direct (manual or test) call. Both shapes may carry per-invocation output
//! overrides as top-level keys.

use crate::config::Settings;
use crate::error::{Result, SummarizerError};
use crate::location::ObjectLocation;
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// S3 notification record. Only the fields the summarizer reads are modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Object {
    /// Object key as delivered by S3, URL-encoded.
    pub key: String,
}

/// Per-invocation destination overrides.
///
/// `Some("")` is a real override: it clears the configured value so that the
/// fallback (input bucket, derived key) applies. A key present with `null`
/// parses to `Some("")`; only a missing key is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_object_key: Option<String>,
}

/// A parsed invocation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationEvent {
    /// S3 notification; only the first record is processed.
    Notification {
        record: S3EventRecord,
        record_count: usize,
        overrides: OutputOverrides,
    },
    /// Any other payload, including none at all.
    Direct(OutputOverrides),
}

impl Default for InvocationEvent {
    fn default() -> Self {
        InvocationEvent::Direct(OutputOverrides::default())
    }
}

impl InvocationEvent {
    /// Parse a raw invocation payload.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(map) = value.as_object() else {
            return Ok(Self::default());
        };

        let overrides = OutputOverrides {
            output_bucket: string_field(map, "output_bucket")?,
            output_object_key: string_field(map, "output_object_key")?,
        };

        match map.get("Records") {
            Some(Value::Array(records)) if !records.is_empty() => {
                let record: S3EventRecord = serde_json::from_value(records[0].clone())
                    .map_err(|e| SummarizerError::MissingField(format!("Records[0]: {}", e)))?;
                Ok(InvocationEvent::Notification {
                    record,
                    record_count: records.len(),
                    overrides,
                })
            }
            _ => Ok(InvocationEvent::Direct(overrides)),
        }
    }

    /// Destination overrides carried by this event.
    pub fn overrides(&self) -> &OutputOverrides {
        match self {
            InvocationEvent::Notification { overrides, .. } => overrides,
            InvocationEvent::Direct(overrides) => overrides,
        }
    }

    /// Mutable access to the destination overrides.
    pub fn overrides_mut(&mut self) -> &mut OutputOverrides {
        match self {
            InvocationEvent::Notification { overrides, .. } => overrides,
            InvocationEvent::Direct(overrides) => overrides,
        }
    }

    /// Resolve which transcript object to read.
    pub fn input_location(&self, settings: &Settings) -> ObjectLocation {
        match self {
            InvocationEvent::Notification {
                record,
                record_count,
                ..
            } => {
                if *record_count > 1 {
                    warn!(
                        "Notification carries {} records, processing only the first",
                        record_count
                    );
                }
                ObjectLocation::new(
                    record.s3.bucket.name.clone(),
                    decode_object_key(&record.s3.object.key),
                )
            }
            InvocationEvent::Direct(_) => ObjectLocation::new(
                settings.input_bucket.clone(),
                settings.default_transcript_object_key.clone(),
            ),
        }
    }
}

fn string_field(map: &serde_json::Map<String, Value>, name: &str) -> Result<Option<String>> {
    match map.get(name) {
        None => Ok(None),
        // A present null clears the configured value like an empty string.
        Some(Value::Null) => Ok(Some(String::new())),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(SummarizerError::InvalidEvent(format!(
            "{} must be a string, got {}",
            name, other
        ))),
    }
}

/// Decode an S3 notification key: `+` is a space, then percent-decoding.
pub fn decode_object_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> Settings {
        Settings::from_lookup(|name| match name {
            "MODEL_ID" => Some("model".to_string()),
            "INPUT_BUCKET" => Some("default-bucket".to_string()),
            "DEFAULT_TRANSCRIPT_OBJECT_KEY" => Some("samples/call.json".to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn notification(bucket: &str, key: &str) -> Value {
        json!({
            "Records": [{
                "eventName": "ObjectCreated:Put",
                "s3": {"bucket": {"name": bucket}, "object": {"key": key, "size": 1024}}
            }]
        })
    }

    #[test]
    fn test_direct_event_uses_defaults() {
        for value in [json!({}), json!(null), json!("hello"), json!({"Records": []})] {
            let event = InvocationEvent::from_value(&value).unwrap();
            let input = event.input_location(&settings());
            assert_eq!(input, ObjectLocation::new("default-bucket", "samples/call.json"));
        }
    }

    #[test]
    fn test_notification_event() {
        let event = InvocationEvent::from_value(&notification("uploads", "a%2Bb.json")).unwrap();
        let input = event.input_location(&settings());

        assert_eq!(input.bucket, "uploads");
        assert_eq!(input.key, "a+b.json");
    }

    #[test]
    fn test_decode_object_key() {
        assert_eq!(decode_object_key("calls/my+call.json"), "calls/my call.json");
        assert_eq!(decode_object_key("calls/%D7%A9%D7%99%D7%97%D7%94.json"), "calls/שיחה.json");
        assert_eq!(decode_object_key("plain/key.json"), "plain/key.json");
    }

    #[test]
    fn test_first_record_wins() {
        let value = json!({
            "Records": [
                {"s3": {"bucket": {"name": "first"}, "object": {"key": "one.json"}}},
                {"s3": {"bucket": {"name": "second"}, "object": {"key": "two.json"}}}
            ]
        });
        let event = InvocationEvent::from_value(&value).unwrap();
        assert!(matches!(event, InvocationEvent::Notification { record_count: 2, .. }));
        assert_eq!(event.input_location(&settings()).bucket, "first");
    }

    #[test]
    fn test_malformed_record_is_fatal() {
        let value = json!({"Records": [{"s3": {"bucket": {"name": "b"}}}]});
        let err = InvocationEvent::from_value(&value).unwrap_err();
        assert!(matches!(err, SummarizerError::MissingField(_)));
    }

    #[test]
    fn test_overrides_parsed() {
        let value = json!({"output_bucket": "out", "output_object_key": "x/y.json"});
        let event = InvocationEvent::from_value(&value).unwrap();

        assert_eq!(event.overrides().output_bucket.as_deref(), Some("out"));
        assert_eq!(event.overrides().output_object_key.as_deref(), Some("x/y.json"));
    }

    #[test]
    fn test_null_override_clears_configured_values() {
        let settings = Settings::from_lookup(|name| match name {
            "MODEL_ID" => Some("model".to_string()),
            "INPUT_BUCKET" => Some("transcripts".to_string()),
            "DEFAULT_TRANSCRIPT_OBJECT_KEY" => Some("samples/call.json".to_string()),
            "OUTPUT_OBJECT_KEY" => Some("fixed.json".to_string()),
            _ => None,
        })
        .unwrap();
        let mut value = notification("uploads", "calls/abc.json");
        value["output_bucket"] = Value::Null;
        value["output_object_key"] = Value::Null;

        let event = InvocationEvent::from_value(&value).unwrap();
        assert_eq!(event.overrides().output_bucket.as_deref(), Some(""));

        let input = event.input_location(&settings);
        let output = crate::location::resolve_output(&settings, event.overrides(), &input);
        assert_eq!(output, ObjectLocation::new("uploads", "calls/abc.summary.json"));
    }

    #[test]
    fn test_missing_override_is_absent() {
        let event = InvocationEvent::from_value(&json!({"unrelated": 1})).unwrap();
        assert_eq!(event.overrides(), &OutputOverrides::default());
    }

    #[test]
    fn test_non_string_override_rejected() {
        let err = InvocationEvent::from_value(&json!({"output_object_key": 7})).unwrap_err();
        assert!(matches!(err, SummarizerError::InvalidEvent(_)));
    }
}
