//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - GenerationRequest: Validated input of one pipeline run
//! - Prompt: Rendered model prompt
//! - GenerationResult: Text extracted from a model response
//! - Artifact: Durable output (content + metadata) of one run
//! - TriggerEvent / TriggerResponse: Inbound event and HTTP-style result

mod artifact;
mod event;
mod generation;
mod prompt;
mod request;

pub use artifact::*;
pub use event::*;
pub use generation::*;
pub use prompt::*;
pub use request::*;
