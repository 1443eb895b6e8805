//! Inference Client Port
//!
//! Abstract interface for a hosted text-generation model. Implementations
//! own the wire format, authentication and transport-level retries.

use async_trait::async_trait;

use crate::domain::entities::{GenerationResult, Prompt};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::SamplingConfig;

/// Text generation interface
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Generate text for a prompt
    ///
    /// A response without a generated-text field yields an empty
    /// [`GenerationResult`] rather than an error. Transport failures and
    /// malformed responses are `DomainError::Inference`.
    async fn generate(
        &self,
        prompt: &Prompt,
        sampling: &SamplingConfig,
    ) -> Result<GenerationResult, DomainError>;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
