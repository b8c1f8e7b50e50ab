//! `db` crate — persistence layer for employee records.
//!
//! Provides the connection pool, the `employees` row struct, and the
//! [`EmployeeRepository`] contract with a Postgres and an in-memory adapter.
//! No business logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
pub use models::EmployeeRow;
pub use repository::{EmployeeRepository, InMemoryEmployeeRepository, PgEmployeeRepository};
