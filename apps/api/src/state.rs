use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable generation backend. Production: `GeminiClient`.
    /// Tests inject a canned fake so no handler test touches the network.
    pub llm: Arc<dyn TextGenerator>,
}
