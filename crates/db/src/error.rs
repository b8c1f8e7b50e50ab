//! Typed error type for the db crate.

use thiserror::Error;

/// Failures from the pool, the migrator, or a repository adapter.
#[derive(Debug, Error)]
pub enum DbError {
    /// Connectivity, query, or constraint failure reported by sqlx.
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// No employee row matched the id of an update or delete.
    #[error("employee row not found")]
    NotFound,

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
