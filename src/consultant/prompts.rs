use serde::Serialize;

use crate::models::{CourseRecord, Language};

/// Facts block used when no course matched the question
pub const NO_FACTS: &str = "No matching course facts found.";

/// Sampling settings sent with every consultant call
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    pub const CONSULTANT: GenerationConfig = GenerationConfig {
        temperature: 0.2,
        top_p: 0.8,
        top_k: 40,
        max_output_tokens: 512,
    };
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::CONSULTANT
    }
}

/// Everything the completion service needs for one answer
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Persona, rules and the facts block
    pub system_instruction: String,
    /// The caller's question, untouched
    pub user_query: String,
    pub generation: GenerationConfig,
}

/// Render matched courses as one bullet line each
pub fn courses_to_facts(courses: &[&CourseRecord]) -> String {
    if courses.is_empty() {
        return NO_FACTS.to_string();
    }

    courses
        .iter()
        .map(|course| {
            let parts = course
                .labelled_fields()
                .iter()
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect::<Vec<_>>()
                .join(" | ");
            format!(" • {}", parts)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the consultant persona and rules for the requested reply language
pub fn build_system_instruction(lang: Language) -> String {
    format!(
        "You are an EdTech Course Consultant voice agent for an Indian audience.\n\
Respond in {} with a clear, friendly tone.\n\
STRICT RULES:\n\
• provide accurate information when discussing syllabus, fees, duration, placement.\n\
• If a fact is missing or uncertain, say you don’t know and offer to arrange a callback.\n\
• Be concise; use bullet points when listing items.\n\
• If the query is vague, ask exactly one clarifying question.\n\
• Never invent numbers, claims, colleges or guarantees.",
        lang.display_name()
    )
}

/// Combine persona, facts and the raw question into a completion request
pub fn assemble(query: &str, lang: Language, facts: &str) -> CompletionRequest {
    let system_instruction = format!("{}\n\nFACTS:\n{}", build_system_instruction(lang), facts);

    CompletionRequest {
        system_instruction,
        user_query: query.to_string(),
        generation: GenerationConfig::CONSULTANT,
    }
}
