//! Employee service.
//!
//! `EmployeeService` is the orchestrator between the HTTP layer and storage:
//! each operation makes one repository call (two for update), mapping
//! transfer objects to rows on the way in and rows to transfer objects on
//! the way out. A missing id surfaces as [`ServiceError::NotFound`].

use std::sync::Arc;

use tracing::{info, instrument};

use db::{DbError, EmployeeRepository};

use crate::mapper::{to_dto, to_entity};
use crate::{EmployeeDto, ServiceError, UpdateEmployeeDto};

/// Confirmation returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Employee deleted successfully!";

/// Stateless employee operations over a shared repository.
///
/// Cloning is cheap; every clone uses the same repository.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new employee. Any id supplied by the caller is ignored.
    #[instrument(skip_all)]
    pub async fn create_employee(&self, dto: EmployeeDto) -> Result<EmployeeDto, ServiceError> {
        let mut employee = to_entity(dto);
        employee.id = None;

        let saved = self.repository.save(employee).await?;
        info!(id = ?saved.id, "employee created");
        Ok(to_dto(saved))
    }

    #[instrument(skip(self))]
    pub async fn get_employee_id(&self, id: i64) -> Result<EmployeeDto, ServiceError> {
        let employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        Ok(to_dto(employee))
    }

    #[instrument(skip(self))]
    pub async fn get_all_employees(&self) -> Result<Vec<EmployeeDto>, ServiceError> {
        let employees = self.repository.find_all().await?;
        Ok(employees.into_iter().map(to_dto).collect())
    }

    /// Overwrite the supplied name and email fields of an existing employee.
    /// The id and every field absent from `dto` keep their stored values.
    #[instrument(skip(self, dto))]
    pub async fn update_employee(
        &self,
        dto: UpdateEmployeeDto,
        id: i64,
    ) -> Result<EmployeeDto, ServiceError> {
        let mut employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        if let Some(first_name) = dto.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = dto.last_name {
            employee.last_name = last_name;
        }
        if let Some(email) = dto.email {
            employee.email = email;
        }

        // The row can vanish between the lookup and the save.
        let updated = match self.repository.save(employee).await {
            Ok(row) => row,
            Err(DbError::NotFound) => return Err(ServiceError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };

        info!("employee updated");
        Ok(to_dto(updated))
    }

    /// Remove an employee and return a confirmation message.
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, id: i64) -> Result<String, ServiceError> {
        match self.repository.delete_by_id(id).await {
            Ok(()) => {
                info!("employee deleted");
                Ok(DELETED_MESSAGE.to_string())
            }
            Err(DbError::NotFound) => Err(ServiceError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }
}
