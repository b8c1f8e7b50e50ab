use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use service::{EmployeeDto, UpdateEmployeeDto};

use super::AppState;
use crate::ApiError;

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeDto>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeDto>), ApiError> {
    let Json(dto) = payload?;
    let created = state.service.create_employee(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<EmployeeDto>, ApiError> {
    let Path(id) = id?;
    let employee = state.service.get_employee_id(id).await?;
    Ok(Json(employee))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    let employees = state.service.get_all_employees().await?;
    Ok(Json(employees))
}

pub async fn update(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateEmployeeDto>, JsonRejection>,
) -> Result<Json<EmployeeDto>, ApiError> {
    let Path(id) = id?;
    let Json(changes) = payload?;
    let updated = state.service.update_employee(changes, id).await?;
    Ok(Json(updated))
}

pub async fn delete(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<String>, ApiError> {
    let Path(id) = id?;
    let message = state.service.delete_employee(id).await?;
    Ok(Json(message))
}
