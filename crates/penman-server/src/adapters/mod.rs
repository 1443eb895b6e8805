//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod aws;
pub mod bedrock;
pub mod s3;

// Re-exports
pub use aws::{AwsCredentials, AwsTransport};
pub use bedrock::BedrockInferenceClient;
pub use s3::S3ObjectStore;
