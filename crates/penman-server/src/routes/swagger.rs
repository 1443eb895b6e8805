//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use penman::{ArtifactMetadata, ContentKind, StorageKey, TriggerEvent, TriggerResponse};

use crate::models::{ErrorResponse, GenerationPayload, GenerationResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::generate::generate,
        super::generate::handle_event,
    ),
    info(
        title = "Penman API",
        version = "0.3.0",
        description = "Generates quotes and blog posts with a hosted model and files them in object storage.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Generation", description = "Generation - Quote, blog and summarized blog"),
    ),
    components(
        schemas(
            GenerationPayload,
            GenerationResponse,
            ErrorResponse,
            TriggerEvent,
            TriggerResponse,
            ArtifactMetadata,
            ContentKind,
            StorageKey,
        )
    ),
)]
pub struct ApiDoc;
