//! GenerationRequest - Validated input of one pipeline run

use serde::{Deserialize, Serialize};

pub const DEFAULT_LENGTH: u32 = 200;

/// A validated request; built only by the input validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    /// Desired length in words
    pub length: u32,
    /// Keywords to weave in, in the order given
    pub keywords: Vec<String>,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            length: DEFAULT_LENGTH,
            keywords: Vec::new(),
        }
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}
