//! End-to-end tests for the `/api/employees` routes.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot` over an
//! `InMemoryEmployeeRepository`, so no server socket or Postgres is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use db::{DbError, EmployeeRepository, EmployeeRow, InMemoryEmployeeRepository};
use serde_json::{json, Value};
use service::EmployeeService;
use tower::ServiceExt;

fn app() -> Router {
    let repo = InMemoryEmployeeRepository::new();
    api::router(EmployeeService::new(Arc::new(repo)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_ana(app: &Router) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/employees",
        Some(json!({ "firstName": "Ana", "lastName": "Lee", "email": "ana@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("created employee should carry an id")
}

// ============================================================
// create
// ============================================================

#[tokio::test]
async fn post_creates_employee_with_assigned_id() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "firstName": "Ana", "lastName": "Lee", "email": "ana@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "id": 1, "firstName": "Ana", "lastName": "Lee", "email": "ana@x.com" })
    );
}

#[tokio::test]
async fn post_with_malformed_body_is_bad_request() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/employees",
        Some(json!({ "firstName": "Ana" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (_, list) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(list, json!([]));
}

// ============================================================
// read
// ============================================================

#[tokio::test]
async fn get_returns_created_employee() {
    let app = app();
    let id = create_ana(&app).await;

    let (status, body) = send(&app, Method::GET, &format!("/api/employees/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["firstName"], "Ana");
    assert_eq!(body["lastName"], "Lee");
    assert_eq!(body["email"], "ana@x.com");
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/employees/9999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("9999"));
}

#[tokio::test]
async fn get_non_numeric_id_is_bad_request() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/employees/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_every_employee() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    create_ana(&app).await;
    create_ana(&app).await;

    let (status, body) = send(&app, Method::GET, "/api/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

// ============================================================
// update
// ============================================================

#[tokio::test]
async fn put_with_partial_body_keeps_other_fields() {
    let app = app();
    let id = create_ana(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/employees/{id}"),
        Some(json!({ "firstName": "Ann" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": id, "firstName": "Ann", "lastName": "Lee", "email": "ana@x.com" })
    );
}

#[tokio::test]
async fn put_ignores_id_in_body() {
    let app = app();
    let id = create_ana(&app).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/employees/{id}"),
        Some(json!({ "id": 42, "firstName": "Ann", "lastName": "Li", "email": "ann@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["lastName"], "Li");
}

#[tokio::test]
async fn put_unknown_id_is_not_found() {
    let app = app();

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/employees/5",
        Some(json!({ "firstName": "Ann" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================
// delete
// ============================================================

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = app();
    let id = create_ana(&app).await;

    let (status, body) = send(&app, Method::DELETE, &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Employee deleted successfully!"));

    let (status, _) = send(&app, Method::GET, &format!("/api/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let app = app();
    let (status, _) = send(&app, Method::DELETE, "/api/employees/8", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================
// cross-cutting
// ============================================================

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/employees")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

struct BrokenRepository;

#[async_trait]
impl EmployeeRepository for BrokenRepository {
    async fn find_by_id(&self, _id: i64) -> Result<Option<EmployeeRow>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRow>, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn save(&self, _employee: EmployeeRow) -> Result<EmployeeRow, DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<(), DbError> {
        Err(DbError::Sqlx(sqlx::Error::PoolClosed))
    }
}

#[tokio::test]
async fn storage_failure_is_internal_server_error() {
    let app = api::router(EmployeeService::new(Arc::new(BrokenRepository)));

    let (status, body) = send(&app, Method::GET, "/api/employees", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "internal server error" }));
}
