//! Service-level error type.

use thiserror::Error;

/// Errors returned by [`crate::EmployeeService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No employee is stored under the requested id.
    #[error("Employee does not exist with the given id: {0}")]
    NotFound(i64),

    /// The repository call failed; propagated unchanged.
    #[error("storage error: {0}")]
    Storage(#[from] db::DbError),
}
