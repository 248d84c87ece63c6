use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A curriculum unit. Reference data: seeded once, never mutated by normal
/// application flow. `locked` is static seed state, not derived from the
/// learner's completion list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ModuleRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub category: String,
    /// 'DISCOVERY' | 'DELIVERY' | 'STRATEGY' | 'GENERAL'
    pub track: String,
    pub duration: String,
    pub locked: bool,
}

/// A role-play brief for simulated stakeholder interactions.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScenarioRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub context: String,
    pub task: String,
}

/// A knowledge-base article. `content` may be absent; the SPA fills it on
/// demand via the generate endpoint without writing back.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResourceRow {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub difficulty: String,
    pub category: String,
    pub duration: String,
    pub tags: Vec<String>,
    pub content: Option<String>,
}
