//! Generation request / response bodies

use penman::ArtifactMetadata;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload accepted by the generation routes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationPayload {
    /// Topic to write about (also accepted as `blog_topic` or `subject`)
    #[schema(example = "perseverance")]
    pub topic: String,
    /// Desired length in words (default 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Keywords to include, in order
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Success body of the summarized-blog kind
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationResponse {
    pub message: String,
    /// Link to the stored content; absent when nothing was generated
    pub s3_link: Option<String>,
    pub metadata: Option<ArtifactMetadata>,
}

/// Error body of the summarized-blog kind
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    /// Machine-readable error code (e.g. `missing_field`, `inference_error`)
    pub error: String,
}
