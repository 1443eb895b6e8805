//! SamplingConfig - Generation parameters sent with each inference call

use serde::{Deserialize, Serialize};

/// Options controlling length and randomness of generated text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
    /// Temperature (0.0 = deterministic)
    pub temperature: f32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
}

impl SamplingConfig {
    pub const fn new(max_output_tokens: u32, temperature: f32, top_p: f32) -> Self {
        Self {
            max_output_tokens,
            temperature,
            top_p,
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::new(512, 0.5, 0.9)
    }
}
