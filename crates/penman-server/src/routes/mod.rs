//! Penman API Routes
//!
//! - /penman/:kind - Generate content from an HTTP payload
//! - /penman/:kind/events - Run a raw trigger event, reply with the trigger response

pub mod generate;
pub mod swagger;
