//! Postgres connection pool and schema migrations.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

/// Shared Postgres pool handed to the repository adapters.
pub type DbPool = PgPool;

/// Open a pool against `database_url` with at most `max_connections`
/// connections.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    info!(max_connections, "connecting to employee database");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Apply the embedded migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    info!("applying employee schema migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
