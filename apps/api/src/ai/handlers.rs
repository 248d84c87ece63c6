//! HTTP surface of the LLM proxy. Handlers are infallible by design: the
//! service layer recovers every capability failure with a fallback payload,
//! so these endpoints always answer 200 with a well-shaped body.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::ai::prompts::ChatTurn;
use crate::ai::{run_chat, run_evaluation, run_generation, EvalKind, Evaluation, GenPromptType};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

/// POST /api/ai/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<TextResponse> {
    let text = run_chat(state.llm.as_ref(), &req.message, &req.history, &req.context).await;
    Json(TextResponse { text })
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(rename = "type")]
    pub kind: EvalKind,
    pub input: String,
    #[serde(default)]
    pub context: String,
}

/// POST /api/ai/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Json<Evaluation> {
    let evaluation = run_evaluation(state.llm.as_ref(), req.kind, &req.input, &req.context).await;
    Json(evaluation)
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "promptType")]
    pub prompt_type: GenPromptType,
    pub topic: String,
    #[serde(default)]
    pub context: String,
}

/// POST /api/ai/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Json<TextResponse> {
    let text = run_generation(
        state.llm.as_ref(),
        req.prompt_type,
        &req.topic,
        &req.context,
    )
    .await;
    Json(TextResponse { text })
}
