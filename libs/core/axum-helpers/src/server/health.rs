use axum::{Json, Router, routing::get};
use core_config::AppInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness body returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub name: String,
    pub version: String,
}

/// Router exposing `GET /health`.
///
/// Liveness only: it never touches external resources. Readiness checks
/// belong to the app, which knows what it depends on.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new().route(
        "/health",
        get(move || async move {
            Json(HealthResponse {
                status: "healthy".to_string(),
                name: app_info.name.to_string(),
                version: app_info.version.to_string(),
            })
        }),
    )
}
