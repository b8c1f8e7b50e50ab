//! Request handlers, one module per resource.

use service::EmployeeService;

pub mod employees;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: EmployeeService,
}
