// Storage adapters. `postgres` is the production backend; `memory` satisfies
// the same contracts for tests and local experiments. Row-to-entity mapping
// is explicit in `record`, no derive-driven relation magic.

pub mod memory;
pub mod postgres;
pub mod record;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::error::DomainError;

// Repositories lean on `?` for storage failures; they are carried through to
// the dispatcher untransformed, per the propagation policy.
impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Storage(err.to_string())
    }
}

pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;
    info!("connected to database");
    Ok(pool)
}

/// Bring the schema up. Statements are idempotent so this runs on every
/// startup. Comments cascade away with their parent post; author columns
/// carry no foreign key on purpose, so deleting a user leaves dangling rows
/// that the list finders silently exclude.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::Error> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'user',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
        "CREATE TABLE IF NOT EXISTS posts (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            content TEXT NOT NULL,
            author_id BIGINT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
        "CREATE TABLE IF NOT EXISTS comments (
            id BIGSERIAL PRIMARY KEY,
            content TEXT NOT NULL,
            post_id BIGINT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
            author_id BIGINT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("database schema is up to date");
    Ok(())
}
