//! Penman Domain Library
//!
//! Core domain types and interfaces for the Penman generation pipeline:
//! a topic comes in, a model writes about it, the result is stored.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (GenerationRequest, Prompt, Artifact, TriggerEvent)
//!   - `value_objects/`: Immutable value types (ContentKind, SamplingConfig, StorageKey)
//!   - `services/`: Pure domain services (input validation, prompt building)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Object storage interface
//!   - `services/`: Text generation interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use penman::domain::services::{build_generation_prompt, validate};
//! use penman::{ContentKind, InferenceClient, ObjectStore};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Artifact, ArtifactMetadata, ContentKind, DomainError, GenerationRequest, GenerationResult,
    Prompt, ResponseStyle, SamplingConfig, StorageKey, StorageLocation, TriggerEvent,
    TriggerResponse, ValidationError, ValidationRules,
};
pub use ports::{InferenceClient, ObjectStore};
