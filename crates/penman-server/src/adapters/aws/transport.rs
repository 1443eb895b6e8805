//! Signed HTTP transport
//!
//! One shared client for every AWS call, built from two middleware layers:
//! `RetryTransientMiddleware` outside (connection failures, timeouts, 429 and
//! 5xx, exponential backoff) and [`SigV4Signer`] inside, so every attempt is
//! signed afresh with its own request time. Callers never retry on their own.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use http::Extensions;
use reqwest::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Response, StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, Next};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use thiserror::Error;

use super::sigv4::{self, CanonicalRequest};
use super::AwsCredentials;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const RETRY_MIN_DELAY: Duration = Duration::from_millis(200);
const RETRY_MAX_DELAY: Duration = Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest_middleware::Error),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("Request to {0} carries no signing service")]
    Unsigned(String),
}

/// Final response after any retries
#[derive(Debug)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

/// AWS service name a request is signed for, carried as a request extension
#[derive(Debug, Clone, Copy)]
struct SigningService(&'static str);

/// Signs each outgoing request with SigV4
struct SigV4Signer {
    credentials: AwsCredentials,
    region: String,
}

#[async_trait]
impl Middleware for SigV4Signer {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let service = extensions
            .get::<SigningService>()
            .map(|s| s.0)
            .ok_or_else(|| TransportError::Unsigned(req.url().to_string()))
            .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;

        sign_request(&mut req, &self.credentials, &self.region, service, Utc::now())
            .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;

        next.run(req, extensions).await
    }
}

/// Add `x-amz-*` and `Authorization` headers to a built request
fn sign_request(
    req: &mut Request,
    credentials: &AwsCredentials,
    region: &str,
    service: &str,
    at: DateTime<Utc>,
) -> Result<(), TransportError> {
    let url = req.url().clone();
    let host =
        sigv4::host_header(&url).ok_or_else(|| TransportError::InvalidUrl(url.to_string()))?;
    let body = req.body().and_then(|b| b.as_bytes()).unwrap_or_default();
    let payload_hash = sigv4::sha256_hex(body);

    let mut headers: BTreeMap<&'static str, String> = BTreeMap::new();
    if let Some(content_type) = req.headers().get(CONTENT_TYPE) {
        let value = content_type
            .to_str()
            .map_err(|_| TransportError::InvalidHeader("content-type"))?;
        headers.insert("content-type", value.to_string());
    }
    headers.insert("host", host);
    headers.insert("x-amz-content-sha256", payload_hash.clone());
    headers.insert("x-amz-date", at.format(sigv4::AMZ_DATE_FORMAT).to_string());
    if let Some(token) = &credentials.session_token {
        headers.insert("x-amz-security-token", token.clone());
    }

    let canonical = CanonicalRequest {
        method: req.method().as_str(),
        uri: sigv4::canonical_uri(url.path(), service),
        query: sigv4::canonical_query(&url),
        headers: &headers,
        payload_hash: &payload_hash,
    };
    let authorization = sigv4::authorization(credentials, region, service, &canonical, at);

    let target = req.headers_mut();
    for (&name, value) in &headers {
        // Host comes from the URL; content-type is already set
        if matches!(name, "host" | "content-type") {
            continue;
        }
        let value = HeaderValue::from_str(value).map_err(|_| TransportError::InvalidHeader(name))?;
        target.insert(HeaderName::from_static(name), value);
    }
    let authorization = HeaderValue::from_str(&authorization)
        .map_err(|_| TransportError::InvalidHeader("authorization"))?;
    target.insert(AUTHORIZATION, authorization);

    Ok(())
}

/// Signed, retrying HTTP transport for AWS services
#[derive(Clone)]
pub struct AwsTransport {
    client: ClientWithMiddleware,
    region: String,
    max_attempts: u32,
}

impl AwsTransport {
    pub fn new(
        credentials: AwsCredentials,
        region: impl Into<String>,
        timeout: Duration,
        max_attempts: u32,
    ) -> Result<Self, TransportError> {
        let region = region.into();
        let max_attempts = max_attempts.max(1);

        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(concat!("penman/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(RETRY_MIN_DELAY, RETRY_MAX_DELAY)
            .build_with_max_retries(max_attempts - 1);

        let client = ClientBuilder::new(http)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .with(SigV4Signer {
                credentials,
                region: region.clone(),
            })
            .build();

        Ok(Self {
            client,
            region,
            max_attempts,
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Send a signed request, retrying transient failures
    ///
    /// Non-success statuses that are not retryable (or that persist after the
    /// last attempt) are returned as a response, not an error.
    pub async fn send(
        &self,
        method: Method,
        url: &Url,
        service: &'static str,
        content_type: &str,
        body: &[u8],
    ) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .request(method, url.clone())
            .header(CONTENT_TYPE, content_type)
            .body(body.to_vec())
            .with_extension(SigningService(service))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
