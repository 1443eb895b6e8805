//! Service configuration
//!
//! Read once at startup through a key lookup (Shuttle secrets first, then the
//! process environment). Region, model and bucket fall back to built-in
//! defaults; AWS access keys are required.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::adapters::AwsCredentials;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "meta.llama2-13b-chat-v1";
pub const DEFAULT_BUCKET: &str = "aws_bedrock_course1";
const DEFAULT_READ_TIMEOUT_SECS: u64 = 300;
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub region: String,
    pub model_id: String,
    pub bucket: String,
    pub read_timeout: Duration,
    pub max_attempts: u32,
    pub bedrock_endpoint: String,
    pub s3_endpoint: String,
    pub credentials: AwsCredentials,
}

impl AppConfig {
    /// Build the configuration from a key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let region = get("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());
        let model_id = get("BEDROCK_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        let bucket = get("S3_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string());

        let read_timeout_secs: u64 = parse_or(
            "BEDROCK_READ_TIMEOUT_SECS",
            get("BEDROCK_READ_TIMEOUT_SECS"),
            DEFAULT_READ_TIMEOUT_SECS,
        )?;
        let max_attempts: u32 = parse_or(
            "AWS_MAX_ATTEMPTS",
            get("AWS_MAX_ATTEMPTS"),
            DEFAULT_MAX_ATTEMPTS,
        )?;
        if max_attempts == 0 {
            return Err(ConfigError::Invalid {
                key: "AWS_MAX_ATTEMPTS",
                reason: "must be at least 1".to_string(),
            });
        }

        let bedrock_endpoint = get("BEDROCK_ENDPOINT")
            .unwrap_or_else(|| format!("https://bedrock-runtime.{}.amazonaws.com", region));
        let s3_endpoint =
            get("S3_ENDPOINT").unwrap_or_else(|| format!("https://s3.{}.amazonaws.com", region));

        let credentials = AwsCredentials::new(
            get("AWS_ACCESS_KEY_ID").ok_or(ConfigError::Missing("AWS_ACCESS_KEY_ID"))?,
            get("AWS_SECRET_ACCESS_KEY").ok_or(ConfigError::Missing("AWS_SECRET_ACCESS_KEY"))?,
            get("AWS_SESSION_TOKEN"),
        );

        Ok(Self {
            region,
            model_id,
            bucket,
            read_timeout: Duration::from_secs(read_timeout_secs),
            max_attempts,
            bedrock_endpoint,
            s3_endpoint,
            credentials,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("{:?}: {}", value, e),
        }),
        None => Ok(default),
    }
}
