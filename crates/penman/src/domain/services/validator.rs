//! Input Validator
//!
//! Parses the trigger payload into a [`GenerationRequest`]. The payload may
//! arrive as a JSON-encoded string (gateway proxy events) or as an
//! already-decoded JSON object.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{GenerationRequest, TriggerEvent, DEFAULT_LENGTH};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::ContentKind;

/// Limits applied by [`validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Minimum topic length in characters, after trimming
    pub min_topic_length: usize,
}

impl ValidationRules {
    pub fn for_kind(kind: ContentKind) -> Self {
        Self {
            min_topic_length: kind.min_topic_length(),
        }
    }
}

#[derive(Deserialize)]
struct RawPayload {
    #[serde(default, alias = "blog_topic", alias = "subject")]
    topic: Option<String>,
    #[serde(default, alias = "desired_length")]
    length: Option<u32>,
    #[serde(default)]
    keywords: Option<Vec<String>>,
}

/// Validate a trigger event and extract the request it carries
pub fn validate(
    event: &TriggerEvent,
    rules: &ValidationRules,
) -> Result<GenerationRequest, ValidationError> {
    let payload = match event.body.as_ref() {
        None | Some(Value::Null) => return Err(ValidationError::MissingBody),
        Some(Value::String(raw)) if raw.trim().is_empty() => {
            return Err(ValidationError::MissingBody)
        }
        Some(Value::String(raw)) => serde_json::from_str::<Value>(raw)
            .map_err(|e| ValidationError::MalformedBody(e.to_string()))?,
        Some(other) => other.clone(),
    };

    if !payload.is_object() {
        return Err(ValidationError::MalformedBody(
            "payload must be a JSON object".to_string(),
        ));
    }

    let raw: RawPayload = serde_json::from_value(payload)
        .map_err(|e| ValidationError::MalformedBody(e.to_string()))?;

    let topic = raw
        .topic
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ValidationError::MissingField("topic"))?;

    let actual = topic.chars().count();
    if actual < rules.min_topic_length {
        return Err(ValidationError::FieldTooShort {
            field: "topic",
            min: rules.min_topic_length,
            actual,
        });
    }

    let length = raw.length.unwrap_or(DEFAULT_LENGTH);
    if length == 0 {
        return Err(ValidationError::InvalidField {
            field: "length",
            reason: "must be positive",
        });
    }

    let keywords = raw
        .keywords
        .unwrap_or_default()
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>();

    Ok(GenerationRequest::new(topic)
        .with_length(length)
        .with_keywords(keywords))
}
