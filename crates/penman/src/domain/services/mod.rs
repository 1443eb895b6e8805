//! Domain Services
//!
//! Pure functions over domain types: no I/O, no clocks, no randomness.
//! - validator: Trigger payload -> GenerationRequest
//! - prompt_builder: GenerationRequest -> Prompt

mod prompt_builder;
mod validator;

pub use prompt_builder::*;
pub use validator::*;
