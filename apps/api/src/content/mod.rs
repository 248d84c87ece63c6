//! Reference content store — read access to the modules, scenarios, and
//! resources collections plus the idempotent seed operation.

pub mod handlers;
pub mod seed;

use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::content::{ModuleRow, ResourceRow, ScenarioRow};

/// All modules, grouped by curriculum category.
pub async fn list_modules(pool: &PgPool) -> Result<Vec<ModuleRow>, AppError> {
    let rows = sqlx::query_as("SELECT * FROM modules ORDER BY category, id")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn list_scenarios(pool: &PgPool) -> Result<Vec<ScenarioRow>, AppError> {
    let rows = sqlx::query_as("SELECT * FROM scenarios")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn list_resources(pool: &PgPool) -> Result<Vec<ResourceRow>, AppError> {
    let rows = sqlx::query_as("SELECT * FROM resources")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

#[derive(Debug, Serialize)]
pub struct SeedSummary {
    pub message: String,
    pub modules: usize,
    pub scenarios: usize,
    pub resources: usize,
}

/// Upserts the fixed seed payload, keyed by identifier. Re-running updates
/// the seeded columns in place and never creates duplicates.
pub async fn run_seed(pool: &PgPool) -> Result<SeedSummary, AppError> {
    let modules = seed::modules();
    for m in &modules {
        sqlx::query(
            r#"
            INSERT INTO modules (id, title, description, difficulty, category, track, duration, locked)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                difficulty = EXCLUDED.difficulty,
                category = EXCLUDED.category,
                track = EXCLUDED.track,
                duration = EXCLUDED.duration,
                locked = EXCLUDED.locked
            "#,
        )
        .bind(&m.id)
        .bind(&m.title)
        .bind(&m.description)
        .bind(&m.difficulty)
        .bind(&m.category)
        .bind(&m.track)
        .bind(&m.duration)
        .bind(m.locked)
        .execute(pool)
        .await?;
    }

    let scenarios = seed::scenarios();
    for s in &scenarios {
        sqlx::query(
            r#"
            INSERT INTO scenarios (id, title, description, difficulty, context, task)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                difficulty = EXCLUDED.difficulty,
                context = EXCLUDED.context,
                task = EXCLUDED.task
            "#,
        )
        .bind(&s.id)
        .bind(&s.title)
        .bind(&s.description)
        .bind(&s.difficulty)
        .bind(&s.context)
        .bind(&s.task)
        .execute(pool)
        .await?;
    }

    let resources = seed::resources();
    for r in &resources {
        sqlx::query(
            r#"
            INSERT INTO resources (id, title, description, resource_type, difficulty, category, duration, tags, content)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                resource_type = EXCLUDED.resource_type,
                difficulty = EXCLUDED.difficulty,
                category = EXCLUDED.category,
                duration = EXCLUDED.duration,
                tags = EXCLUDED.tags,
                content = EXCLUDED.content
            "#,
        )
        .bind(&r.id)
        .bind(&r.title)
        .bind(&r.description)
        .bind(&r.resource_type)
        .bind(&r.difficulty)
        .bind(&r.category)
        .bind(&r.duration)
        .bind(&r.tags)
        .bind(&r.content)
        .execute(pool)
        .await?;
    }

    info!(
        "Seeded reference content: {} modules, {} scenarios, {} resources",
        modules.len(),
        scenarios.len(),
        resources.len()
    );

    Ok(SeedSummary {
        message: "Database seeded successfully".to_string(),
        modules: modules.len(),
        scenarios: scenarios.len(),
        resources: resources.len(),
    })
}
