//! ContentKind - What the pipeline is asked to write
//!
//! Each kind corresponds to one handler iteration: a motivational quote,
//! a blog post, and a blog post with a summary and metadata record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::SamplingConfig;

/// Kind of content a request produces
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Quote,
    Blog,
    SummarizedBlog,
}

/// Shape of the response body for a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStyle {
    /// A single JSON string
    PlainMessage,
    /// `{ message, s3_link, metadata }`
    Structured,
}

impl ContentKind {
    /// Human-readable noun used in response messages
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Quote => "Quote",
            ContentKind::Blog | ContentKind::SummarizedBlog => "Blog",
        }
    }

    /// Object-store folder for this kind
    pub fn storage_prefix(&self) -> &'static str {
        match self {
            ContentKind::Quote => "quote-output",
            ContentKind::Blog | ContentKind::SummarizedBlog => "blog-output",
        }
    }

    /// Minimum topic length accepted by the validator
    pub fn min_topic_length(&self) -> usize {
        match self {
            ContentKind::SummarizedBlog => 3,
            ContentKind::Quote | ContentKind::Blog => 1,
        }
    }

    /// Sampling used for the primary generation call
    pub fn generation_sampling(&self) -> SamplingConfig {
        match self {
            ContentKind::Quote => SamplingConfig::new(128, 0.7, 0.9),
            ContentKind::Blog | ContentKind::SummarizedBlog => SamplingConfig::new(512, 0.5, 0.9),
        }
    }

    /// Sampling for the follow-up summary call, if this kind summarizes
    pub fn summary_sampling(&self) -> Option<SamplingConfig> {
        match self {
            ContentKind::SummarizedBlog => Some(SamplingConfig::new(150, 0.5, 0.9)),
            ContentKind::Quote | ContentKind::Blog => None,
        }
    }

    /// Whether a metadata document is written next to the content
    pub fn writes_metadata(&self) -> bool {
        matches!(self, ContentKind::SummarizedBlog)
    }

    pub fn response_style(&self) -> ResponseStyle {
        match self {
            ContentKind::SummarizedBlog => ResponseStyle::Structured,
            ContentKind::Quote | ContentKind::Blog => ResponseStyle::PlainMessage,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Quote => write!(f, "quote"),
            ContentKind::Blog => write!(f, "blog"),
            ContentKind::SummarizedBlog => write!(f, "summarized-blog"),
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quote" => Ok(ContentKind::Quote),
            "blog" => Ok(ContentKind::Blog),
            "summarized-blog" | "summarized_blog" => Ok(ContentKind::SummarizedBlog),
            _ => Err(format!("Unknown content kind: {}", s)),
        }
    }
}
