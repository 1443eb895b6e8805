//! GenerationResult - Output of one inference call

use serde::{Deserialize, Serialize};

/// Text extracted from a model response, plus the raw envelope
///
/// Empty `text` means the response carried no generated content; callers
/// must check [`GenerationResult::is_empty`] before using it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub text: String,
    pub raw_response: serde_json::Value,
}

impl GenerationResult {
    pub fn new(text: impl Into<String>, raw_response: serde_json::Value) -> Self {
        Self {
            text: text.into(),
            raw_response,
        }
    }

    /// Result for a response that had no usable text
    pub fn empty(raw_response: serde_json::Value) -> Self {
        Self::new(String::new(), raw_response)
    }

    /// True when there is nothing worth storing
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
