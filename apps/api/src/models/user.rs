use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Per-skill confidence map, stored as a JSONB document on the profile row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidence {
    pub research: i32,
    pub strategy: i32,
    pub technical: i32,
    pub communication: i32,
}

/// The learner profile. One row per account; created lazily on first access.
///
/// Wire format is camelCase — the contract the SPA consumes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileRow {
    pub id: Uuid,
    pub account_id: String,
    pub name: String,
    pub level: String,
    pub xp: i64,
    pub streak: i32,
    /// Free-form module ids — not validated against the modules collection.
    pub completed_modules: Vec<String>,
    pub confidence: Json<Confidence>,
    pub learning_style: String,
    pub created_at: DateTime<Utc>,
}

impl UserProfileRow {
    /// The record created on first access to an account: fresh apprentice,
    /// all counters and confidence dimensions at zero.
    pub fn default_for(account_id: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id: account_id.to_string(),
            name: "New Specialist".to_string(),
            level: "Apprentice".to_string(),
            xp: 0,
            streak: 0,
            completed_modules: vec![],
            confidence: Json(Confidence::default()),
            learning_style: "mixed".to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Partial update applied to a profile. Absent fields are left unchanged;
/// `confidence` replaces the whole map (whole-document semantics).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub level: Option<String>,
    pub xp: Option<i64>,
    pub streak: Option<i32>,
    pub completed_modules: Option<Vec<String>>,
    pub confidence: Option<Confidence>,
    pub learning_style: Option<String>,
}
