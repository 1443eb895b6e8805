//! Signature Version 4 request signing
//!
//! Implements the canonical-request / string-to-sign / derived-key scheme
//! used by every AWS HTTP API. Only header-based signing is supported.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use reqwest::Url;
use sha2::{Digest, Sha256};

use super::AwsCredentials;

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const AMZ_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// Request parts that take part in the signature
#[derive(Debug)]
pub struct CanonicalRequest<'a> {
    pub method: &'a str,
    /// Already URI-encoded path
    pub uri: String,
    pub query: String,
    /// Lowercase header name -> value
    pub headers: &'a BTreeMap<&'static str, String>,
    pub payload_hash: &'a str,
}

impl CanonicalRequest<'_> {
    pub fn signed_headers(&self) -> String {
        self.headers.keys().copied().collect::<Vec<_>>().join(";")
    }

    pub fn render(&self) -> String {
        let canonical_headers: String = self
            .headers
            .iter()
            .map(|(name, value)| format!("{}:{}\n", name, value.trim()))
            .collect();

        format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            self.method,
            self.uri,
            self.query,
            canonical_headers,
            self.signed_headers(),
            self.payload_hash
        )
    }
}

/// Value of the `Authorization` header for a request
pub fn authorization(
    credentials: &AwsCredentials,
    region: &str,
    service: &str,
    request: &CanonicalRequest<'_>,
    at: DateTime<Utc>,
) -> String {
    let amz_date = at.format(AMZ_DATE_FORMAT).to_string();
    let date_stamp = at.format(DATE_STAMP_FORMAT).to_string();
    let scope = format!("{}/{}/{}/aws4_request", date_stamp, region, service);

    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        sha256_hex(request.render().as_bytes())
    );

    let key = signing_key(&credentials.secret_access_key, &date_stamp, region, service);
    let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes()));

    format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        ALGORITHM,
        credentials.access_key_id,
        scope,
        request.signed_headers(),
        signature
    )
}

/// Derive the per-day, per-region, per-service signing key
pub fn signing_key(secret: &str, date_stamp: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{}", secret).as_bytes(), date_stamp.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Percent-encode everything outside the RFC 3986 unreserved set, `/` included
pub fn encode_component(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Percent-encode each `/`-separated segment, keeping the separators
pub fn encode_path(input: &str) -> String {
    input
        .split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Canonical URI for a request path
///
/// S3 signs the path as sent; every other service signs each path segment
/// encoded a second time.
pub fn canonical_uri(path: &str, service: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    if service == "s3" {
        return path.to_string();
    }
    encode_path(path)
}

/// Sorted, encoded query string
pub fn canonical_query(url: &Url) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode_component(&k), encode_component(&v)))
        .collect();
    pairs.sort();
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// `Host` header value as reqwest will send it
pub fn host_header(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
