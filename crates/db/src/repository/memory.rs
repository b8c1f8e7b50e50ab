//! In-memory adapter for [`EmployeeRepository`].
//!
//! Mirrors the Postgres adapter's observable behaviour (sequential ids
//! starting at 1, ascending-id listing, `NotFound` on missing update/delete)
//! so the service and API layers can be exercised without a database.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::EmployeeRepository;
use crate::{DbError, EmployeeRow};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i64, EmployeeRow>,
    next_id: i64,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Employee repository holding rows in process memory.
///
/// Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    table: Arc<Mutex<Table>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored.
    pub fn len(&self) -> usize {
        self.table().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<EmployeeRow>, DbError> {
        Ok(self.table().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRow>, DbError> {
        Ok(self.table().rows.values().cloned().collect())
    }

    async fn save(&self, mut employee: EmployeeRow) -> Result<EmployeeRow, DbError> {
        let mut table = self.table();
        let id = match employee.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(_) => return Err(DbError::NotFound),
            None => {
                let id = table.next_id;
                table.next_id += 1;
                id
            }
        };

        employee.id = Some(id);
        table.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbError> {
        match self.table().rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound),
        }
    }
}
