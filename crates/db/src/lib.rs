//! PostgreSQL persistence for Inventra.
//!
//! Connection pooling, migrations, row models and repositories, plus the
//! two transactional write paths: [`recorder::MaintenanceRecorder`] and
//! [`editor::AssetEditor`].

use sqlx::postgres::PgPoolOptions;

pub mod editor;
pub mod models;
pub mod recorder;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
