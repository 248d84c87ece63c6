//! Learner profile store — get-or-create plus patch-update, keyed by an
//! explicit account id. Last writer wins on concurrent updates; the profile
//! is a single document and needs no cross-row transactions.

pub mod handlers;

use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::user::{ProfilePatch, UserProfileRow};

/// Account used when the client does not identify itself. Keeps the
/// single-user flow working with no query parameters.
pub const DEFAULT_ACCOUNT: &str = "default";

async fn fetch_profile(
    pool: &PgPool,
    account_id: &str,
) -> Result<Option<UserProfileRow>, AppError> {
    let row = sqlx::query_as("SELECT * FROM users WHERE account_id = $1")
        .bind(account_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Returns the profile for `account_id`, creating a default one on first
/// access. `ON CONFLICT DO NOTHING` keeps two concurrent first requests from
/// racing to two rows; whichever insert lands, both re-select the same row.
pub async fn get_or_create_profile(
    pool: &PgPool,
    account_id: &str,
) -> Result<UserProfileRow, AppError> {
    if let Some(row) = fetch_profile(pool, account_id).await? {
        return Ok(row);
    }

    let defaults = UserProfileRow::default_for(account_id);
    sqlx::query(
        r#"
        INSERT INTO users
            (id, account_id, name, level, xp, streak, completed_modules, confidence, learning_style)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (account_id) DO NOTHING
        "#,
    )
    .bind(defaults.id)
    .bind(&defaults.account_id)
    .bind(&defaults.name)
    .bind(&defaults.level)
    .bind(defaults.xp)
    .bind(defaults.streak)
    .bind(&defaults.completed_modules)
    .bind(&defaults.confidence)
    .bind(&defaults.learning_style)
    .execute(pool)
    .await?;

    info!("Created default profile for account '{account_id}'");

    fetch_profile(pool, account_id)
        .await?
        .ok_or_else(|| AppError::ProfileMissing(account_id.to_string()))
}

/// Merges `patch` onto the existing profile and writes the whole row back.
/// Errors if no profile exists — updates never create.
pub async fn update_profile(
    pool: &PgPool,
    account_id: &str,
    patch: ProfilePatch,
) -> Result<UserProfileRow, AppError> {
    let existing = fetch_profile(pool, account_id)
        .await?
        .ok_or_else(|| AppError::ProfileMissing(account_id.to_string()))?;

    let merged = apply_patch(existing, patch);

    let row = sqlx::query_as(
        r#"
        UPDATE users
        SET name = $2,
            level = $3,
            xp = $4,
            streak = $5,
            completed_modules = $6,
            confidence = $7,
            learning_style = $8
        WHERE account_id = $1
        RETURNING *
        "#,
    )
    .bind(account_id)
    .bind(&merged.name)
    .bind(&merged.level)
    .bind(merged.xp)
    .bind(merged.streak)
    .bind(&merged.completed_modules)
    .bind(&merged.confidence)
    .bind(&merged.learning_style)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

fn apply_patch(mut row: UserProfileRow, patch: ProfilePatch) -> UserProfileRow {
    if let Some(name) = patch.name {
        row.name = name;
    }
    if let Some(level) = patch.level {
        row.level = level;
    }
    if let Some(xp) = patch.xp {
        row.xp = xp;
    }
    if let Some(streak) = patch.streak {
        row.streak = streak;
    }
    if let Some(completed) = patch.completed_modules {
        row.completed_modules = completed;
    }
    if let Some(confidence) = patch.confidence {
        row.confidence = sqlx::types::Json(confidence);
    }
    if let Some(style) = patch.learning_style {
        row.learning_style = style;
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Confidence;

    fn default_row() -> UserProfileRow {
        UserProfileRow::default_for(DEFAULT_ACCOUNT)
    }

    #[test]
    fn test_first_access_profile_defaults() {
        let row = UserProfileRow::default_for("acct-1");

        assert_eq!(row.account_id, "acct-1");
        assert_eq!(row.name, "New Specialist");
        assert_eq!(row.level, "Apprentice");
        assert_eq!(row.xp, 0);
        assert_eq!(row.streak, 0);
        assert!(row.completed_modules.is_empty());
        assert_eq!(row.confidence.0, Confidence::default());
        assert_eq!(row.confidence.research, 0);
        assert_eq!(row.confidence.strategy, 0);
        assert_eq!(row.confidence.technical, 0);
        assert_eq!(row.confidence.communication, 0);
        assert_eq!(row.learning_style, "mixed");
    }

    #[test]
    fn test_default_profiles_get_distinct_ids() {
        let a = UserProfileRow::default_for("a");
        let b = UserProfileRow::default_for("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_patch_updates_only_given_fields() {
        let row = default_row();
        let patched = apply_patch(
            row,
            ProfilePatch {
                xp: Some(500),
                ..Default::default()
            },
        );

        assert_eq!(patched.xp, 500);
        assert_eq!(patched.name, "New Specialist");
        assert_eq!(patched.level, "Apprentice");
        assert_eq!(patched.streak, 0);
        assert!(patched.completed_modules.is_empty());
        assert_eq!(patched.confidence.0, Confidence::default());
    }

    #[test]
    fn test_patch_replaces_confidence_wholesale() {
        let row = default_row();
        let patched = apply_patch(
            row,
            ProfilePatch {
                confidence: Some(Confidence {
                    research: 40,
                    strategy: 10,
                    technical: 0,
                    communication: 25,
                }),
                ..Default::default()
            },
        );

        assert_eq!(patched.confidence.research, 40);
        assert_eq!(patched.confidence.communication, 25);
    }

    #[test]
    fn test_patch_deserializes_camel_case_wire_format() {
        let patch: ProfilePatch = serde_json::from_str(
            r#"{"completedModules": ["m1", "m2"], "learningStyle": "visual"}"#,
        )
        .unwrap();

        let patched = apply_patch(default_row(), patch);
        assert_eq!(patched.completed_modules, vec!["m1", "m2"]);
        assert_eq!(patched.learning_style, "visual");
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let row = default_row();
        let before = row.clone();
        let patched = apply_patch(row, ProfilePatch::default());

        assert_eq!(patched.name, before.name);
        assert_eq!(patched.xp, before.xp);
        assert_eq!(patched.learning_style, before.learning_style);
    }
}
