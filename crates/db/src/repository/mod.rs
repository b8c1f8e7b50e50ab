//! Repository layer — the storage contract for employee rows.
//!
//! [`EmployeeRepository`] is the seam the service crate depends on. Each
//! adapter takes its backing store at construction time and returns
//! `Result<T, DbError>` from every call. No business logic, no transfer
//! objects.

use async_trait::async_trait;

use crate::{DbError, EmployeeRow};

pub mod employees;
pub mod memory;

pub use employees::PgEmployeeRepository;
pub use memory::InMemoryEmployeeRepository;

/// Storage operations on the `employees` table, keyed by numeric id.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch one row, or `None` when no row has this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<EmployeeRow>, DbError>;

    /// Fetch every row. Callers must not rely on the order.
    async fn find_all(&self) -> Result<Vec<EmployeeRow>, DbError>;

    /// Insert `employee` when its id is unset, otherwise update the row with
    /// that id. Returns the persisted row with the id populated.
    ///
    /// Returns `DbError::NotFound` when updating an id that does not exist.
    async fn save(&self, employee: EmployeeRow) -> Result<EmployeeRow, DbError>;

    /// Remove the row with this id.
    ///
    /// Returns `DbError::NotFound` if no row was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<(), DbError>;
}
