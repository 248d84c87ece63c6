//! LLM proxy services — chat, evaluation, and content generation.
//!
//! Each service builds a prompt with a pure template function, makes exactly
//! one generation call, and shapes the response. Capability failures and
//! malformed responses are recovered HERE with mode-appropriate fallbacks:
//! no error from this module ever propagates to the HTTP caller.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::{strip_json_fences, TextGenerator};
use prompts::{chat_prompt, evaluation_prompt, generation_prompt, ChatTurn};

/// Returned for any chat-mode failure so the conversation degrades gracefully
/// instead of erroring.
pub const CHAT_FALLBACK: &str =
    "ProductSense AI is unavailable right now. Please try again in a moment.";

/// Returned for any generation-mode failure. Short markdown, rendered inline.
pub const GENERATION_FALLBACK: &str = "Content generation failed.";

/// Feedback text in the neutral zero-score evaluation fallback.
pub const EVALUATION_FALLBACK_FEEDBACK: &str =
    "Evaluation is temporarily unavailable. Your submission was not scored — please try again.";

/// The fixed set of evaluation exercises. SCENARIO is scored with a
/// strengths/improvements shape; every other kind with a tips shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EvalKind {
    Scenario,
    UserStory,
    Metrics,
    PrdSection,
    ResearchPlan,
    PrdAnalysis,
    ResearchScript,
    ResearchSynthesis,
    ResearchBias,
}

impl EvalKind {
    /// Wire-format tag, as embedded in evaluation prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvalKind::Scenario => "SCENARIO",
            EvalKind::UserStory => "USER_STORY",
            EvalKind::Metrics => "METRICS",
            EvalKind::PrdSection => "PRD_SECTION",
            EvalKind::ResearchPlan => "RESEARCH_PLAN",
            EvalKind::PrdAnalysis => "PRD_ANALYSIS",
            EvalKind::ResearchScript => "RESEARCH_SCRIPT",
            EvalKind::ResearchSynthesis => "RESEARCH_SYNTHESIS",
            EvalKind::ResearchBias => "RESEARCH_BIAS",
        }
    }
}

/// The fixed set of free-text generation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenPromptType {
    LearningGuide,
    ResearchHelp,
    Intel,
}

/// Scenario evaluation shape requested from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioEvaluation {
    pub score: i64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Evaluation shape for every non-scenario exercise kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEvaluation {
    pub score: i64,
    pub feedback: String,
    pub tips: Vec<String>,
}

/// Tagged union of the two evaluation shapes. Serialized untagged: the wire
/// payload is the bare object the SPA already expects.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Evaluation {
    Scenario(ScenarioEvaluation),
    Exercise(ExerciseEvaluation),
}

impl Evaluation {
    /// Neutral zero-score payload used for both capability failures and
    /// schema mismatches. Always the tips shape, regardless of kind.
    fn fallback() -> Self {
        Evaluation::Exercise(ExerciseEvaluation {
            score: 0,
            feedback: EVALUATION_FALLBACK_FEEDBACK.to_string(),
            tips: vec![],
        })
    }
}

/// Chat mode: one free-text call. Failures return the fixed fallback string
/// to preserve conversational UX.
pub async fn run_chat(
    llm: &dyn TextGenerator,
    message: &str,
    history: &[ChatTurn],
    context: &str,
) -> String {
    let prompt = chat_prompt(message, history, context);
    match llm.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("chat generation failed: {e}");
            CHAT_FALLBACK.to_string()
        }
    }
}

/// Evaluation mode: one JSON-only call, strictly parsed per kind. Capability
/// errors and schema mismatches both yield the neutral zero-score fallback.
pub async fn run_evaluation(
    llm: &dyn TextGenerator,
    kind: EvalKind,
    input: &str,
    context: &str,
) -> Evaluation {
    let prompt = evaluation_prompt(kind, input, context);

    let raw = match llm.generate_json(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("evaluation generation failed: {e}");
            return Evaluation::fallback();
        }
    };

    match parse_evaluation(kind, &raw) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            warn!("evaluation response did not match the expected schema: {e}");
            Evaluation::fallback()
        }
    }
}

/// Strict parse-and-validate at the trust boundary. The upstream payload's
/// shape is never trusted implicitly: unparseable responses are rejected and
/// out-of-range scores clamped to 0-100.
fn parse_evaluation(kind: EvalKind, raw: &str) -> Result<Evaluation, serde_json::Error> {
    let raw = strip_json_fences(raw);

    Ok(match kind {
        EvalKind::Scenario => {
            let mut parsed: ScenarioEvaluation = serde_json::from_str(raw)?;
            parsed.score = parsed.score.clamp(0, 100);
            Evaluation::Scenario(parsed)
        }
        _ => {
            let mut parsed: ExerciseEvaluation = serde_json::from_str(raw)?;
            parsed.score = parsed.score.clamp(0, 100);
            Evaluation::Exercise(parsed)
        }
    })
}

/// Generation mode: one free-text call producing markdown.
pub async fn run_generation(
    llm: &dyn TextGenerator,
    kind: GenPromptType,
    topic: &str,
    context: &str,
) -> String {
    let prompt = generation_prompt(kind, topic, context);
    match llm.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("content generation failed: {e}");
            GENERATION_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::llm_client::LlmError;

    /// Canned backend returning a fixed payload for every call.
    struct CannedGenerator(String);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
        async fn generate_json(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    /// Backend that fails every call, as if the upstream API were down.
    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            })
        }
        async fn generate_json(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            })
        }
    }

    fn assert_is_fallback(evaluation: &Evaluation) {
        match evaluation {
            Evaluation::Exercise(e) => {
                assert_eq!(e.score, 0);
                assert!(!e.feedback.is_empty());
                assert!(e.tips.is_empty());
            }
            Evaluation::Scenario(_) => panic!("fallback must use the tips shape"),
        }
    }

    #[tokio::test]
    async fn test_evaluation_parses_exercise_shape() {
        let llm = CannedGenerator(
            r#"{"score": 82, "feedback": "Solid structure.", "tips": ["Name the user segment"]}"#
                .to_string(),
        );
        let result = run_evaluation(&llm, EvalKind::UserStory, "As a traveler...", "").await;

        match result {
            Evaluation::Exercise(e) => {
                assert_eq!(e.score, 82);
                assert_eq!(e.feedback, "Solid structure.");
                assert_eq!(e.tips, vec!["Name the user segment"]);
            }
            Evaluation::Scenario(_) => panic!("USER_STORY must parse as the exercise shape"),
        }
    }

    #[tokio::test]
    async fn test_evaluation_parses_scenario_shape() {
        let llm = CannedGenerator(
            r#"{"score": 64, "feedback": "Reasonable.", "strengths": ["Empathy"], "improvements": ["Data first"]}"#
                .to_string(),
        );
        let result = run_evaluation(&llm, EvalKind::Scenario, "I would...", "VP brief").await;

        match result {
            Evaluation::Scenario(e) => {
                assert_eq!(e.score, 64);
                assert_eq!(e.strengths, vec!["Empathy"]);
                assert_eq!(e.improvements, vec!["Data first"]);
            }
            Evaluation::Exercise(_) => panic!("SCENARIO must parse as the scenario shape"),
        }
    }

    #[tokio::test]
    async fn test_evaluation_capability_failure_yields_zero_score_fallback() {
        let result = run_evaluation(&FailingGenerator, EvalKind::Metrics, "DAU/MAU", "").await;
        assert_is_fallback(&result);
    }

    #[tokio::test]
    async fn test_evaluation_malformed_json_yields_fallback() {
        let llm = CannedGenerator("Here's my evaluation: it was great!".to_string());
        let result = run_evaluation(&llm, EvalKind::PrdSection, "...", "").await;
        assert_is_fallback(&result);
    }

    #[tokio::test]
    async fn test_evaluation_scenario_failure_still_uses_tips_shape() {
        let result = run_evaluation(&FailingGenerator, EvalKind::Scenario, "...", "brief").await;
        assert_is_fallback(&result);
    }

    #[tokio::test]
    async fn test_evaluation_clamps_out_of_range_scores() {
        let llm =
            CannedGenerator(r#"{"score": 140, "feedback": "Over-enthusiastic.", "tips": []}"#.to_string());
        let result = run_evaluation(&llm, EvalKind::ResearchPlan, "...", "").await;

        match result {
            Evaluation::Exercise(e) => assert_eq!(e.score, 100),
            Evaluation::Scenario(_) => panic!("unexpected shape"),
        }
    }

    #[tokio::test]
    async fn test_evaluation_strips_code_fences() {
        let llm = CannedGenerator(
            "```json\n{\"score\": 55, \"feedback\": \"ok\", \"tips\": []}\n```".to_string(),
        );
        let result = run_evaluation(&llm, EvalKind::ResearchBias, "...", "").await;

        match result {
            Evaluation::Exercise(e) => assert_eq!(e.score, 55),
            Evaluation::Scenario(_) => panic!("unexpected shape"),
        }
    }

    #[tokio::test]
    async fn test_chat_failure_returns_fallback_string() {
        let text = run_chat(&FailingGenerator, "hello", &[], "").await;
        assert_eq!(text, CHAT_FALLBACK);
    }

    #[tokio::test]
    async fn test_chat_passes_through_generated_text() {
        let llm = CannedGenerator("Churn is the rate at which users leave.".to_string());
        let text = run_chat(&llm, "What is churn?", &[], "").await;
        assert_eq!(text, "Churn is the rate at which users leave.");
    }

    #[tokio::test]
    async fn test_generation_failure_returns_fallback_string() {
        let text = run_generation(&FailingGenerator, GenPromptType::LearningGuide, "PRDs", "").await;
        assert_eq!(text, GENERATION_FALLBACK);
    }

    #[test]
    fn test_eval_kind_wire_tags_round_trip() {
        for (kind, tag) in [
            (EvalKind::Scenario, "\"SCENARIO\""),
            (EvalKind::UserStory, "\"USER_STORY\""),
            (EvalKind::PrdAnalysis, "\"PRD_ANALYSIS\""),
            (EvalKind::ResearchSynthesis, "\"RESEARCH_SYNTHESIS\""),
            (EvalKind::ResearchBias, "\"RESEARCH_BIAS\""),
        ] {
            assert_eq!(serde_json::to_string(&kind).unwrap(), tag);
            let parsed: EvalKind = serde_json::from_str(tag).unwrap();
            assert_eq!(parsed, kind);
            assert_eq!(format!("\"{}\"", kind.as_str()), tag);
        }
    }

    #[test]
    fn test_gen_prompt_type_wire_tags() {
        let parsed: GenPromptType = serde_json::from_str("\"LEARNING_GUIDE\"").unwrap();
        assert_eq!(parsed, GenPromptType::LearningGuide);
        let parsed: GenPromptType = serde_json::from_str("\"INTEL\"").unwrap();
        assert_eq!(parsed, GenPromptType::Intel);
    }

    #[test]
    fn test_evaluation_serializes_untagged() {
        let evaluation = Evaluation::Exercise(ExerciseEvaluation {
            score: 70,
            feedback: "Good".to_string(),
            tips: vec![],
        });
        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["score"], 70);
        assert!(json.get("Exercise").is_none(), "wire payload must be the bare object");
    }
}
