//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Client input errors raised by the input validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing_body: request carries no payload")]
    MissingBody,

    #[error("malformed_body: {0}")]
    MalformedBody(String),

    #[error("missing_field: {0}")]
    MissingField(&'static str),

    #[error("field_too_short: {field} must be at least {min} characters, got {actual}")]
    FieldTooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("invalid_field: {field} {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingBody => "missing_body",
            Self::MalformedBody(_) => "malformed_body",
            Self::MissingField(_) => "missing_field",
            Self::FieldTooShort { .. } => "field_too_short",
            Self::InvalidField { .. } => "invalid_field",
        }
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// HTTP-style status code this error maps to
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Inference(_) | Self::Storage(_) | Self::Internal(_) => 500,
        }
    }

    /// Short machine-readable error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.code(),
            Self::Inference(_) => "inference_error",
            Self::Storage(_) => "storage_error",
            Self::Internal(_) => "internal_error",
        }
    }
}
