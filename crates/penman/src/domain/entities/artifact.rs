//! Artifact - Durable output of one pipeline run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::value_objects::{ContentKind, StorageKey};

/// Metadata record written next to the generated content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArtifactMetadata {
    pub topic: String,
    pub content_kind: ContentKind,
    pub generated_at: DateTime<Utc>,
    pub length: u32,
    pub keywords: Vec<String>,
    pub summary: Option<String>,
    pub storage_key: StorageKey,
    pub model_id: String,
}

/// Generated content bound to its storage key
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub key: StorageKey,
    pub content: String,
    pub metadata: Option<ArtifactMetadata>,
}

impl Artifact {
    pub fn new(key: StorageKey, content: impl Into<String>) -> Self {
        Self {
            key,
            content: content.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: ArtifactMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Where an artifact ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageLocation {
    pub content_key: String,
    pub metadata_key: Option<String>,
    /// Addressable link to the content object (e.g. `s3://bucket/key`)
    pub link: String,
}
