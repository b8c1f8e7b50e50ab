//! Postgres adapter for [`EmployeeRepository`].

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::EmployeeRepository;
use crate::{DbError, EmployeeRow};

/// Employee repository backed by the `employees` Postgres table.
#[derive(Debug, Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, employee: EmployeeRow) -> Result<EmployeeRow, DbError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = ?row.id, "inserted employee row");
        Ok(row)
    }

    async fn update(&self, id: i64, employee: EmployeeRow) -> Result<EmployeeRow, DbError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            UPDATE employees
            SET first_name = $1, last_name = $2, email = $3
            WHERE id = $4
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DbError::NotFound)?;

        debug!(id, "updated employee row");
        Ok(row)
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<EmployeeRow>, DbError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"SELECT id, first_name, last_name, email FROM employees WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRow>, DbError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"SELECT id, first_name, last_name, email FROM employees ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn save(&self, employee: EmployeeRow) -> Result<EmployeeRow, DbError> {
        match employee.id {
            Some(id) => self.update(id, employee).await,
            None => self.insert(employee).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        debug!(id, "deleted employee row");
        Ok(())
    }
}
