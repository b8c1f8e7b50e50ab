//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Transfer objects live in the `service` crate.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// employees
// ---------------------------------------------------------------------------

/// A persisted employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EmployeeRow {
    /// Assigned by the database on insert; `None` for a row not yet saved.
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeRow {
    /// Build an unsaved row.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}
