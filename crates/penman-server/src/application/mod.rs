//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the inference client and object storage.

mod artifact_store;
mod pipeline;

#[cfg(test)]
pub(crate) mod testing;

pub use artifact_store::ArtifactStore;
pub use pipeline::{GenerationPipeline, PipelineOutcome};
