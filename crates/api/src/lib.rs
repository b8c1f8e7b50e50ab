//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   POST   /api/employees
//!   GET    /api/employees
//!   GET    /api/employees/{id}
//!   PUT    /api/employees/{id}
//!   DELETE /api/employees/{id}

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use service::EmployeeService;

pub use error::ApiError;
pub use handlers::AppState;

/// Build the application router with CORS and request tracing applied.
pub fn router(service: EmployeeService) -> Router {
    Router::new()
        .route(
            "/api/employees",
            get(handlers::employees::list).post(handlers::employees::create),
        )
        .route(
            "/api/employees/:id",
            get(handlers::employees::get)
                .put(handlers::employees::update)
                .delete(handlers::employees::delete),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}

/// Bind `addr` and serve the API until the process is stopped.
pub async fn serve(addr: &str, service: EmployeeService) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(service)).await
}
