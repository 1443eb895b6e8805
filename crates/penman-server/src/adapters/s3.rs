//! S3 Object Store
//!
//! Path-style `PutObject` against AWS S3 or any S3-compatible endpoint.
//! Path-style addressing keeps bucket names that are not DNS-safe usable.

use async_trait::async_trait;
use reqwest::{Method, Url};

use penman::{DomainError, ObjectStore};

use super::aws::sigv4::{encode_component, encode_path};
use super::aws::AwsTransport;

const SERVICE: &str = "s3";

/// S3 implementation of ObjectStore
pub struct S3ObjectStore {
    transport: AwsTransport,
    endpoint: String,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(
        transport: AwsTransport,
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn object_url(&self, key: &str) -> Result<Url, DomainError> {
        let raw = format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            encode_component(&self.bucket),
            encode_path(key.trim_start_matches('/'))
        );
        Url::parse(&raw).map_err(|e| DomainError::Internal(format!("Invalid S3 URL {raw}: {e}")))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), DomainError> {
        let url = self.object_url(key)?;

        let response = self
            .transport
            .send(Method::PUT, &url, SERVICE, content_type, &body)
            .await
            .map_err(|e| DomainError::Storage(format!("PUT {} failed: {}", key, e)))?;

        if !response.status.is_success() {
            return Err(DomainError::Storage(format!(
                "S3 returned {} for {}: {}",
                response.status, key, response.body
            )));
        }

        tracing::debug!("PUT s3://{}/{} ({} bytes)", self.bucket, key, body.len());
        Ok(())
    }

    fn locate(&self, key: &str) -> String {
        format!("s3://{}/{}", self.bucket, key)
    }
}
