//! StorageKey - Object-store path of a generated artifact
//!
//! Keys are `{prefix}/{YYYYMMDD_HHMMSS_ffffff}-{token}.txt`. The token is the
//! first 8 hex characters of a random UUID so two invocations landing in the
//! same microsecond still get distinct keys. The metadata document lives next
//! to the content under the same stem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S_%6f";
const CONTENT_SUFFIX: &str = ".txt";
const METADATA_SUFFIX: &str = "_metadata.json";
const TOKEN_LEN: usize = 8;

/// Storage key of an artifact's content object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    /// Build a key from a prefix, the invocation time, and a random token
    pub fn generate(prefix: &str, at: DateTime<Utc>, token: Uuid) -> Self {
        let token = token.simple().to_string();
        Self(format!(
            "{}/{}-{}{}",
            prefix.trim_end_matches('/'),
            at.format(TIMESTAMP_FORMAT),
            &token[..TOKEN_LEN],
            CONTENT_SUFFIX
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key without the content suffix; shared with the metadata key
    pub fn stem(&self) -> &str {
        self.0.strip_suffix(CONTENT_SUFFIX).unwrap_or(&self.0)
    }

    /// Key of the metadata document written alongside the content
    pub fn metadata_key(&self) -> String {
        format!("{}{}", self.stem(), METADATA_SUFFIX)
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
