//! Conversions between [`EmployeeRow`] and [`EmployeeDto`].
//!
//! Both directions copy all four fields, the id included, so an update can
//! carry the id back into storage.

use db::EmployeeRow;

use crate::EmployeeDto;

pub fn to_dto(employee: EmployeeRow) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        first_name: employee.first_name,
        last_name: employee.last_name,
        email: employee.email,
    }
}

pub fn to_entity(dto: EmployeeDto) -> EmployeeRow {
    EmployeeRow {
        id: dto.id,
        first_name: dto.first_name,
        last_name: dto.last_name,
        email: dto.email,
    }
}
