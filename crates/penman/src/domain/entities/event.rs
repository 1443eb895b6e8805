//! TriggerEvent / TriggerResponse - Inbound event and HTTP-style result
//!
//! Mirrors the gateway proxy contract: the payload travels as a JSON-encoded
//! string in `body`, and the result carries `statusCode` plus a JSON-encoded
//! `body`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound event; every field other than `body` is ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TriggerEvent {
    /// JSON-encoded payload string, or the already-decoded JSON object
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub body: Option<serde_json::Value>,
}

impl TriggerEvent {
    /// Wrap a raw HTTP request body; an empty body means no payload
    pub fn from_http_body(body: &str) -> Self {
        if body.trim().is_empty() {
            Self { body: None }
        } else {
            Self {
                body: Some(serde_json::Value::String(body.to_string())),
            }
        }
    }

    /// Event whose body is the given payload, encoded as a string
    pub fn with_payload(payload: &serde_json::Value) -> Self {
        Self {
            body: Some(serde_json::Value::String(payload.to_string())),
        }
    }
}

/// HTTP-style result object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TriggerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded message
    pub body: String,
}

impl TriggerResponse {
    pub fn json(status_code: u16, body: serde_json::Value) -> Self {
        Self {
            status_code,
            body: body.to_string(),
        }
    }

    /// Decode `body` back into JSON
    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_http_body_has_no_payload() {
        assert!(TriggerEvent::from_http_body("").body.is_none());
        assert!(TriggerEvent::from_http_body("  ").body.is_none());
        assert!(TriggerEvent::from_http_body("{}").body.is_some());
    }

    #[test]
    fn test_event_ignores_unknown_fields() {
        let event: TriggerEvent = serde_json::from_value(json!({
            "httpMethod": "POST",
            "body": "{\"topic\":\"grit\"}"
        }))
        .unwrap();
        assert_eq!(event.body, Some(json!("{\"topic\":\"grit\"}")));

        let event: TriggerEvent = serde_json::from_value(json!({})).unwrap();
        assert!(event.body.is_none());
    }

    #[test]
    fn test_response_serializes_status_code_in_camel_case() {
        let response = TriggerResponse::json(200, json!("done"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "statusCode": 200, "body": "\"done\"" }));
        assert_eq!(response.body_json().unwrap(), json!("done"));
    }
}
