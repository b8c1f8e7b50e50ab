//! `service` crate — transfer objects, mapping, and the employee service.
//!
//! The HTTP layer talks to [`EmployeeService`] in terms of [`EmployeeDto`];
//! the service talks to a [`db::EmployeeRepository`] in terms of
//! [`db::EmployeeRow`]. The [`mapper`] functions convert between the two.

pub mod dto;
pub mod error;
pub mod mapper;
pub mod employees;

pub use dto::{EmployeeDto, UpdateEmployeeDto};
pub use error::ServiceError;
pub use employees::EmployeeService;
