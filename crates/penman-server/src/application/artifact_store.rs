//! Artifact Store
//!
//! Writes an artifact's content, then its metadata document when present.
//! The two writes are independent: if the metadata write fails the content
//! object stays behind and the failure is reported to the caller.

use std::sync::Arc;

use penman::{Artifact, DomainError, ObjectStore, StorageLocation};

const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
const CONTENT_TYPE_JSON: &str = "application/json";

/// Persists artifacts to an object store
pub struct ArtifactStore {
    objects: Arc<dyn ObjectStore>,
}

impl ArtifactStore {
    pub fn new(objects: Arc<dyn ObjectStore>) -> Self {
        Self { objects }
    }

    /// Write the artifact and report where it landed
    pub async fn persist(&self, artifact: &Artifact) -> Result<StorageLocation, DomainError> {
        let content_key = artifact.key.as_str();

        self.objects
            .put(
                content_key,
                artifact.content.as_bytes().to_vec(),
                CONTENT_TYPE_TEXT,
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to store content at {}: {}", content_key, e);
                into_storage_error(e)
            })?;

        tracing::info!("📝 Stored content at {}", content_key);

        let metadata_key = match &artifact.metadata {
            Some(metadata) => {
                let key = artifact.key.metadata_key();
                let document = serde_json::to_vec_pretty(metadata).map_err(|e| {
                    DomainError::Internal(format!("Failed to serialize metadata: {e}"))
                })?;

                if let Err(e) = self.objects.put(&key, document, CONTENT_TYPE_JSON).await {
                    tracing::error!(
                        "Failed to store metadata at {}; content {} was written without it: {}",
                        key,
                        content_key,
                        e
                    );
                    return Err(into_storage_error(e));
                }

                tracing::info!("🗂️  Stored metadata at {}", key);
                Some(key)
            }
            None => None,
        };

        Ok(StorageLocation {
            content_key: content_key.to_string(),
            metadata_key,
            link: self.objects.locate(content_key),
        })
    }
}

fn into_storage_error(error: DomainError) -> DomainError {
    match error {
        DomainError::Storage(_) => error,
        other => DomainError::Storage(other.to_string()),
    }
}
