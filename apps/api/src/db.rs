use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the four collections if they do not exist yet. Safe to run on
/// every startup.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_MODULES).execute(pool).await?;
    sqlx::query(CREATE_SCENARIOS).execute(pool).await?;
    sqlx::query(CREATE_RESOURCES).execute(pool).await?;

    info!("Schema initialized");
    Ok(())
}

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id                UUID PRIMARY KEY,
    account_id        TEXT NOT NULL UNIQUE,
    name              TEXT NOT NULL,
    level             TEXT NOT NULL,
    xp                BIGINT NOT NULL DEFAULT 0,
    streak            INT NOT NULL DEFAULT 0,
    completed_modules TEXT[] NOT NULL DEFAULT '{}',
    confidence        JSONB NOT NULL,
    learning_style    TEXT NOT NULL DEFAULT 'mixed',
    created_at        TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_MODULES: &str = r#"
CREATE TABLE IF NOT EXISTS modules (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    difficulty  TEXT NOT NULL,
    category    TEXT NOT NULL,
    track       TEXT NOT NULL DEFAULT 'GENERAL',
    duration    TEXT NOT NULL,
    locked      BOOLEAN NOT NULL DEFAULT true
)
"#;

const CREATE_SCENARIOS: &str = r#"
CREATE TABLE IF NOT EXISTS scenarios (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    difficulty  TEXT NOT NULL,
    context     TEXT NOT NULL,
    task        TEXT NOT NULL
)
"#;

const CREATE_RESOURCES: &str = r#"
CREATE TABLE IF NOT EXISTS resources (
    id            TEXT PRIMARY KEY,
    title         TEXT NOT NULL,
    description   TEXT NOT NULL,
    resource_type TEXT NOT NULL,
    difficulty    TEXT NOT NULL,
    category      TEXT NOT NULL,
    duration      TEXT NOT NULL,
    tags          TEXT[] NOT NULL DEFAULT '{}',
    content       TEXT
)
"#;
