mod core;
mod parsing;
mod prompts;

// ===== MODEL CONFIGURATION =====

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Upper bound on a single provider call
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Sent back when the provider answers without any usable text
pub const FALLBACK_REPLY: &str = "I couldn’t find reliable details for that. \
Would you like me to schedule a callback with a human consultant?";

// ===== PUBLIC API =====

pub use self::core::{CompletionClient, CompletionError, GeminiClient};
pub use self::parsing::{extract_reply, truncate_for_log};
pub use self::prompts::{
    assemble, build_system_instruction, courses_to_facts, CompletionRequest, GenerationConfig,
    NO_FACTS,
};
