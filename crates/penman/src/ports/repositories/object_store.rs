//! Object Store Port
//!
//! Write-only interface to a bucket-style object store.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Object storage interface
///
/// Artifacts are only ever written: there are no read, list, update or
/// delete operations.
///
/// # Example
///
/// ```rust,ignore
/// use penman::ports::ObjectStore;
///
/// struct S3ObjectStore { /* signed HTTP transport */ }
///
/// #[async_trait]
/// impl ObjectStore for S3ObjectStore {
///     async fn put(&self, key: &str, body: Vec<u8>, content_type: &str)
///         -> Result<(), DomainError>
///     {
///         // PUT {endpoint}/{bucket}/{key}
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` under `key`, replacing nothing the caller did not ask for
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str)
        -> Result<(), DomainError>;

    /// Addressable link for a key (e.g. `s3://bucket/key`)
    fn locate(&self, key: &str) -> String;
}
