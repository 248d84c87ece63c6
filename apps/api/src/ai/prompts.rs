//! Prompt templates for the three proxy modes.
//!
//! Every builder here is a pure function from typed inputs to a prompt
//! string, so each template is unit-testable against literal inputs without
//! invoking any generation backend.

use serde::{Deserialize, Serialize};

use crate::ai::{EvalKind, GenPromptType};

/// Trailing chat turns included in the prompt. Bounds per-call cost against
/// the model's finite context window; older turns are simply dropped.
pub const HISTORY_WINDOW: usize = 5;

/// INTEL source text is cut to this many characters before embedding,
/// respecting upstream size limits.
pub const INTEL_CONTEXT_LIMIT: usize = 5000;

/// Fixed persona preamble for the chat mentor.
pub const CHAT_SYSTEM_PREAMBLE: &str = "You are ProductSense AI, the ultimate personal mastery \
    partner for aspiring Product Specialists.\n\
    YOUR MISSION: Guide the user from beginner to expert.\n\
    INTERACTION MODES: ELI5, ANALOGIES, QUIZ MODE, CRITIC.";

/// A single prior turn of the chat transcript as sent by the client.
/// Extra fields (ids, timestamps, reactions) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub text: String,
}

/// Chat mode: persona preamble, context label, the trailing history window
/// rendered as JSON, then the new message.
pub fn chat_prompt(message: &str, history: &[ChatTurn], context: &str) -> String {
    let context = if context.trim().is_empty() {
        "General Mentorship"
    } else {
        context
    };

    let window_start = history.len().saturating_sub(HISTORY_WINDOW);
    let history_json =
        serde_json::to_string(&history[window_start..]).unwrap_or_else(|_| "[]".to_string());

    format!(
        "{CHAT_SYSTEM_PREAMBLE}\n\
         Current Context: {context}\n\n\
         Previous conversation summary: {history_json}\n\
         USER: {message}\n\
         MODEL:"
    )
}

/// Evaluation mode. SCENARIO gets the senior-product-leader rubric with a
/// strengths/improvements shape; every other kind shares the generic
/// exercise rubric with a tips shape. The submission is embedded verbatim.
pub fn evaluation_prompt(kind: EvalKind, input: &str, context: &str) -> String {
    match kind {
        EvalKind::Scenario => format!(
            "Act as a Senior Product Leader.\n\
             Scenario Context: {context}.\n\
             User Submission: {input}.\n\
             Evaluate on scale 0-100. Provide constructive feedback, 2 strengths, 2 areas for improvement.\n\
             Return JSON: {{ \"score\": number, \"feedback\": \"string\", \"strengths\": [], \"improvements\": [] }}"
        ),
        _ => format!(
            "Evaluate this {} exercise.\n\
             Context: {context}.\n\
             User Input: {input}.\n\
             Return JSON: {{ \"score\": number, \"feedback\": \"string\", \"tips\": [] }}",
            kind.as_str()
        ),
    }
}

/// Generation mode: free-text markdown, no structured parsing downstream.
pub fn generation_prompt(kind: GenPromptType, topic: &str, context: &str) -> String {
    match kind {
        GenPromptType::LearningGuide => format!(
            "Write a comprehensive learning guide about: \"{topic}\".\n\
             Context: {context}.\n\
             Structure: Definition, The Why, Core Mechanics, Real World Example, Pro Tips.\n\
             Format: Markdown."
        ),
        GenPromptType::ResearchHelp => {
            format!("Generate specific user research content. Type: {topic}. Context: {context}.")
        }
        GenPromptType::Intel => {
            let excerpt: String = context.chars().take(INTEL_CONTEXT_LIMIT).collect();
            format!("Analyze the following text. Task: {topic} (TAKEAWAYS/QUIZ/ELI5). Text: {excerpt}")
        }
    }
}
