//! Transfer objects exposed at the API boundary.
//!
//! Serialised with camelCase field names (`firstName`, `lastName`).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EmployeeDto
// ---------------------------------------------------------------------------

/// An employee as sent and received over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    /// `null` (or absent) on create requests; always set in responses.
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeDto {
    /// Convenience constructor for a dto without an id.
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

// ---------------------------------------------------------------------------
// UpdateEmployeeDto
// ---------------------------------------------------------------------------

/// Body of an update request. Absent fields keep their stored value; any
/// `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeDto {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<EmployeeDto> for UpdateEmployeeDto {
    fn from(dto: EmployeeDto) -> Self {
        Self {
            first_name: Some(dto.first_name),
            last_name: Some(dto.last_name),
            email: Some(dto.email),
        }
    }
}
