//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod object_store;

pub use object_store::*;
