//! Prompt Builder
//!
//! Renders Llama-2 chat prompts. Output depends only on the arguments.

use crate::domain::entities::{GenerationRequest, Prompt};
use crate::domain::value_objects::ContentKind;

const INSTRUCTION_OPEN: &str = "<s>[INST]Human: ";
const INSTRUCTION_CLOSE: &str = "\nAssistant:[/INST]";

/// Prompt for the primary generation call
pub fn build_generation_prompt(
    kind: ContentKind,
    topic: &str,
    length: u32,
    keywords: &[String],
) -> Prompt {
    let mut instruction = match kind {
        ContentKind::Quote => format!("Provide a motivational quote on the topic \"{}\".", topic),
        ContentKind::Blog | ContentKind::SummarizedBlog => {
            format!("Write a {} words blog on the topic \"{}\".", length, topic)
        }
    };

    if let Some(clause) = keyword_clause(keywords) {
        instruction.push(' ');
        instruction.push_str(&clause);
    }

    frame(&instruction)
}

/// Shorthand for [`build_generation_prompt`] over a validated request
pub fn build_prompt_for(kind: ContentKind, request: &GenerationRequest) -> Prompt {
    build_generation_prompt(kind, &request.topic, request.length, &request.keywords)
}

/// Prompt for the follow-up summarization call
pub fn build_summary_prompt(text: &str) -> Prompt {
    frame(&format!(
        "Summarize the following blog post in 2-3 sentences:\n\n{}",
        text.trim()
    ))
}

fn keyword_clause(keywords: &[String]) -> Option<String> {
    if keywords.is_empty() {
        return None;
    }
    Some(format!(
        "Include the following keywords: {}.",
        keywords.join(", ")
    ))
}

fn frame(instruction: &str) -> Prompt {
    Prompt::new(format!("{INSTRUCTION_OPEN}{instruction}{INSTRUCTION_CLOSE}"))
}
