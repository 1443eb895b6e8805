//! Penman HTTP Models
//!
//! - Generation: Request payload and response bodies of the generation routes

mod generation;

pub use generation::*;
