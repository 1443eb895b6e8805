//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod content_kind;
mod sampling;
mod storage_key;

pub use content_kind::*;
pub use sampling::*;
pub use storage_key::*;
